// SPDX-License-Identifier: Apache-2.0 OR MIT
use plist::{Dictionary, Value};

/// The decoded top-level dictionary of an `Info.plist`, keyed by property
/// name and kept in document order.
///
/// Values keep their plist type; formatting and display go through
/// [`render`] to get a string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Properties {
	dict: Dictionary,
}

impl Properties {
	#[inline]
	pub const fn new(dict: Dictionary) -> Self {
		Self { dict }
	}

	/// The raw plist value stored under `key`.
	#[inline]
	pub fn value(&self, key: &str) -> Option<&Value> {
		self.dict.get(key)
	}

	/// The value under `key` rendered as a string.
	pub fn get(&self, key: &str) -> Option<String> {
		self.value(key).map(render)
	}

	/// Every property in document order, with values rendered.
	pub fn iter(&self) -> impl Iterator<Item = (&str, String)> + '_ {
		self.dict.iter().map(|(key, value)| (key.as_str(), render(value)))
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.dict.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.dict.is_empty()
	}

	#[inline]
	pub fn into_inner(self) -> Dictionary {
		self.dict
	}
}

impl From<Dictionary> for Properties {
	fn from(dict: Dictionary) -> Self {
		Self::new(dict)
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Properties {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut dict = Dictionary::new();
		for (key, value) in iter {
			dict.insert(key.into(), value.into());
		}
		Self::new(dict)
	}
}

/// Renders a plist value the way it appears in filenames and listings.
pub fn render(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Integer(i) => i.to_string(),
		Value::Real(r) => r.to_string(),
		Value::Boolean(b) => b.to_string(),
		Value::Date(date) => date.to_xml_format(),
		Value::Data(data) => hex::encode(data),
		Value::Uid(uid) => uid.get().to_string(),
		Value::Array(items) => {
			let items = items.iter().map(render).collect::<Vec<_>>();
			format!("[{}]", items.join(", "))
		}
		Value::Dictionary(dict) => {
			let entries = dict
				.iter()
				.map(|(key, value)| format!("{key}: {}", render(value)))
				.collect::<Vec<_>>();
			format!("{{{}}}", entries.join(", "))
		}
		_ => String::new(),
	}
}
