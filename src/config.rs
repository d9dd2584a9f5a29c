// SPDX-License-Identifier: Apache-2.0 OR MIT
use crate::format::{FormatOptions, NameFormat};

/// Format used when none is given.
pub const DEFAULT_FORMAT: &str =
	"%CFBundleName|CFBundleDisplayName-v%CFBundleVersion-ios%MinimumOSVersion";

/// Properties shown by the `major` key selection.
pub const MAJOR_KEYS: &[&str] = &[
	"MinimumOSVersion",
	"DTPlatformVersion",
	"CFBundleVersion",
	"CFBundleDisplayName",
	"CFBundleName",
];

/// Where the metadata lives inside the app bundle.
pub const INFO_PLIST: &str = "/Info.plist";

/// Settings for one run, fixed before the first file is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub format: NameFormat,
	pub options: FormatOptions,
	pub major_keys: Vec<String>,
	pub metadata_suffix: String,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			format: NameFormat::new(DEFAULT_FORMAT),
			options: FormatOptions::default(),
			major_keys: MAJOR_KEYS.iter().map(|key| (*key).to_owned()).collect(),
			metadata_suffix: INFO_PLIST.to_owned(),
		}
	}
}

impl Config {
	pub fn with_format(mut self, format: impl Into<String>) -> Self {
		self.format = NameFormat::new(format);
		self
	}

	pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
		self.options.extension = extension.into();
		self
	}

	pub fn with_space(mut self, space: impl Into<String>) -> Self {
		self.options.space = space.into();
		self
	}
}

#[cfg(test)]
mod test {
	use super::{Config, DEFAULT_FORMAT};

	#[test]
	fn defaults() {
		let config = Config::default();
		assert_eq!(config.format.spec(), DEFAULT_FORMAT);
		assert_eq!(config.options.extension, ".ipa");
		assert_eq!(config.options.space, "_");
		assert!(config.options.empty.is_empty());
		assert_eq!(config.metadata_suffix, "/Info.plist");
		assert_eq!(config.major_keys.len(), 5);
	}

	#[test]
	fn overrides() {
		let config = Config::default()
			.with_format("%CFBundleDisplayName")
			.with_extension(".zip")
			.with_space("-");
		assert_eq!(config.format.tokens().collect::<Vec<_>>(), ["%CFBundleDisplayName"]);
		assert_eq!(config.options.extension, ".zip");
		assert_eq!(config.options.space, "-");
	}
}
