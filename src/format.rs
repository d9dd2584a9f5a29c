// SPDX-License-Identifier: Apache-2.0 OR MIT
use crate::properties::Properties;
use log::debug;
use regex::Regex;
use std::{path::MAIN_SEPARATOR, sync::OnceLock};

/// Character that starts a token in a format string.
pub const MARKER: char = '%';
/// Character that separates the alternatives of a fallback token.
pub const SEPARATOR: char = '|';

// Marker, one uppercase letter, then letters or separators. Anything else
// ends the token.
const TOKEN_PATTERN: &str = r"%[A-Z][|a-zA-Z]*";

fn token_regex() -> &'static Regex {
	static TOKEN: OnceLock<Regex> = OnceLock::new();
	TOKEN.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is a valid regex"))
}

/// How the substituted name is finished off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
	/// Value used for properties that are missing.
	pub empty: String,
	/// Replacement for every space in the substituted name.
	pub space: String,
	/// Appended to the substituted name.
	pub extension: String,
}

impl Default for FormatOptions {
	fn default() -> Self {
		Self {
			empty: String::new(),
			space: "_".to_owned(),
			extension: ".ipa".to_owned(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
	/// The token as written, marker included.
	text: String,
	/// Property names to try, in order.
	candidates: Vec<String>,
}

impl Token {
	fn parse(text: &str) -> Self {
		let body = &text[MARKER.len_utf8()..];
		let candidates = if body.contains(SEPARATOR) {
			body.split(SEPARATOR).map(str::to_owned).collect()
		} else {
			vec![body.to_owned()]
		};
		Self {
			text: text.to_owned(),
			candidates,
		}
	}

	/// Looks up each candidate in turn and stops at the first one that isn't
	/// `empty`. When none qualifies the last lookup is kept, which is `empty`.
	fn resolve(&self, props: &Properties, empty: &str) -> String {
		let mut value = empty.to_owned();
		for candidate in &self.candidates {
			value = props.get(candidate).unwrap_or_else(|| empty.to_owned());
			if value != empty {
				break;
			}
		}
		value
	}
}

/// A parsed format string such as
/// `%CFBundleName|CFBundleDisplayName-v%CFBundleVersion`.
///
/// Tokens are found once, when the format is built, and resolved again for
/// every set of [`Properties`] passed to [`NameFormat::format`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFormat {
	spec: String,
	tokens: Vec<Token>,
}

impl NameFormat {
	pub fn new(spec: impl Into<String>) -> Self {
		let spec = spec.into();
		let tokens = token_regex()
			.find_iter(&spec)
			.map(|m| Token::parse(m.as_str()))
			.collect();
		Self { spec, tokens }
	}

	/// The format string this was built from.
	#[inline]
	pub fn spec(&self) -> &str {
		&self.spec
	}

	/// Every token in the format string, in order, duplicates included.
	pub fn tokens(&self) -> impl Iterator<Item = &str> {
		self.tokens.iter().map(|token| token.text.as_str())
	}

	/// Builds a filename from `props`.
	///
	/// Each token replaces the first remaining occurrence of its own text, so
	/// repeated tokens are consumed left to right. Spaces and path separators
	/// are then replaced and the extension appended.
	pub fn format(&self, props: &Properties, options: &FormatOptions) -> String {
		let mut name = self.spec.clone();
		for token in &self.tokens {
			let value = token.resolve(props, &options.empty);
			debug!("{} -> {:?}", token.text, value);
			name = name.replacen(&token.text, &value, 1);
		}
		let mut name = name
			.replace(' ', &options.space)
			.replace(&['/', MAIN_SEPARATOR][..], &options.space);
		name.push_str(&options.extension);
		name
	}
}

/// Parses `spec` and formats `props` with it in one go.
pub fn format_name(props: &Properties, spec: &str, options: &FormatOptions) -> String {
	NameFormat::new(spec).format(props, options)
}

#[cfg(test)]
mod test {
	use super::{format_name, FormatOptions, NameFormat};
	use crate::{config::DEFAULT_FORMAT, properties::Properties};

	fn props(pairs: &[(&str, &str)]) -> Properties {
		pairs.iter().copied().collect()
	}

	#[test]
	fn default_format() {
		let props = props(&[
			("CFBundleName", "Foo App"),
			("CFBundleVersion", "2.1"),
			("MinimumOSVersion", "14.0"),
		]);
		let name = format_name(&props, DEFAULT_FORMAT, &FormatOptions::default());
		assert_eq!(name, "Foo_App-v2.1-ios14.0.ipa");
	}

	#[test]
	fn tokens_stop_at_digits_and_punctuation() {
		let format = NameFormat::new("%CFBundleName|CFBundleDisplayName-v%CFBundleVersion2.%X_%lower %");
		assert_eq!(format.tokens().collect::<Vec<_>>(), [
			"%CFBundleName|CFBundleDisplayName",
			"%CFBundleVersion",
			"%X",
		]);
	}

	#[test]
	fn single_tokens_substitute_verbatim() {
		let props = props(&[("A", "one"), ("Bee", "two three")]);
		let name = format_name(&props, "x%A-%Bee(y)", &FormatOptions::default());
		assert_eq!(name, "xone-two_three(y).ipa");
	}

	#[test]
	fn fallback_prefers_first_non_empty() {
		let both = props(&[("A", "first"), ("B", "second")]);
		let only_b = props(&[("B", "second")]);
		let blank_a = props(&[("A", ""), ("B", "second")]);
		let options = FormatOptions::default();

		assert_eq!(format_name(&both, "%A|B", &options), "first.ipa");
		assert_eq!(format_name(&only_b, "%A|B", &options), "second.ipa");
		assert_eq!(format_name(&blank_a, "%A|B", &options), "second.ipa");
		assert_eq!(format_name(&props(&[]), "%A|B", &options), ".ipa");
	}

	#[test]
	fn missing_properties_use_placeholder() {
		let options = FormatOptions {
			empty: "unknown".to_owned(),
			..FormatOptions::default()
		};
		let props = props(&[("B", "b")]);
		assert_eq!(format_name(&props, "%A-%B", &options), "unknown-b.ipa");
		assert_eq!(format_name(&props, "%A|C", &options), "unknown.ipa");
		assert_eq!(format_name(&props, "%A|B", &options), "b.ipa");
	}

	#[test]
	fn repeated_tokens_are_each_replaced() {
		let props = props(&[("V", "1.0")]);
		let name = format_name(&props, "%V and %V", &FormatOptions::default());
		assert_eq!(name, "1.0_and_1.0.ipa");
	}

	#[test]
	fn custom_space_and_extension() {
		let options = FormatOptions {
			space: "-".to_owned(),
			extension: ".zip".to_owned(),
			..FormatOptions::default()
		};
		let props = props(&[("Name", "My Great App")]);
		assert_eq!(format_name(&props, "%Name v1", &options), "My-Great-App-v1.zip");
	}

	#[test]
	fn path_separators_stay_out_of_the_name() {
		let props = props(&[("CFBundleName", "../../etc/Foo"), ("CFBundleVersion", "1")]);
		let name = format_name(&props, "%CFBundleName-v%CFBundleVersion", &FormatOptions::default());
		assert_eq!(name, ".._.._etc_Foo-v1.ipa");
		assert!(!name.contains('/'));
	}

	#[test]
	fn format_without_tokens() {
		let format = NameFormat::new("plain name");
		assert_eq!(format.tokens().count(), 0);
		assert_eq!(format.format(&props(&[]), &FormatOptions::default()), "plain_name.ipa");
	}

	#[test]
	fn non_string_values_are_rendered() {
		let mut props = props(&[("Name", "App")]);
		let mut dict = props.into_inner();
		dict.insert("Build".to_owned(), plist::Value::from(42_u64));
		props = Properties::new(dict);
		assert_eq!(
			format_name(&props, "%Name-b%Build", &FormatOptions::default()),
			"App-b42.ipa"
		);
	}
}
