// SPDX-License-Identifier: Apache-2.0 OR MIT
use crate::properties::Properties;
use serde::Serialize;
use std::io::{self, Write};

/// Keyword that selects every property.
pub const ALL: &str = "all";
/// Keyword that selects the configured major keys.
pub const MAJOR: &str = "major";

/// Which properties to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
	/// Every property, in document order.
	All,
	/// Exactly these keys, in this order. Missing keys show up empty.
	Keys(Vec<String>),
	/// Every key containing this case-sensitive substring.
	Substring(String),
}

impl Selection {
	/// Interprets a `-k` argument. A space makes it a key list, otherwise
	/// `all` and `major` are keywords and anything else is a substring.
	pub fn parse(spec: &str, major_keys: &[String]) -> Self {
		if spec.contains(' ') {
			Self::Keys(spec.split_whitespace().map(str::to_owned).collect())
		} else if spec == ALL {
			Self::All
		} else if spec == MAJOR {
			Self::Keys(major_keys.to_vec())
		} else {
			Self::Substring(spec.to_owned())
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
	pub key: String,
	pub value: String,
}

pub fn select(props: &Properties, selection: &Selection) -> Vec<Property> {
	match selection {
		Selection::Keys(keys) => keys
			.iter()
			.map(|key| Property {
				key: key.clone(),
				value: props.get(key).unwrap_or_default(),
			})
			.collect(),
		Selection::All => props
			.iter()
			.map(|(key, value)| Property {
				key: key.to_owned(),
				value,
			})
			.collect(),
		Selection::Substring(pattern) => props
			.iter()
			.filter(|(key, _)| key.contains(pattern.as_str()))
			.map(|(key, value)| Property {
				key: key.to_owned(),
				value,
			})
			.collect(),
	}
}

/// Writes one `key: value` line per property.
pub fn write_properties<W: Write>(out: &mut W, properties: &[Property]) -> io::Result<()> {
	for Property { key, value } in properties {
		writeln!(out, "{key}: {value}")?;
	}
	Ok(())
}

/// Writes the properties as a single-line JSON array.
pub fn write_json<W: Write>(out: &mut W, properties: &[Property]) -> io::Result<()> {
	serde_json::to_writer(&mut *out, properties).map_err(io::Error::from)?;
	writeln!(out)
}
