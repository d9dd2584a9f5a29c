// SPDX-License-Identifier: Apache-2.0 OR MIT
use clap::Parser;
use ipa_rename::{config::DEFAULT_FORMAT, Config};
use std::path::PathBuf;

/// Normalize .ipa filenames from their Info.plist properties
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct AppArgs {
	/// Dry run: show what would be renamed, rename nothing
	#[clap(short = 'n', long)]
	pub dry_run: bool,
	/// Display properties instead of renaming: a key substring, `all`,
	/// `major`, or a quoted space-separated list of keys
	#[clap(short, long, value_name = "KEY")]
	pub key: Option<String>,
	/// Format string for the new name
	#[clap(short, long, env = "IPA_RENAME_FORMAT", default_value = DEFAULT_FORMAT)]
	pub format: String,
	/// Extension appended to the new name
	#[clap(long, default_value = ".ipa")]
	pub extension: String,
	/// Replacement for spaces in the new name
	#[clap(long, default_value = "_")]
	pub space: String,
	/// Print displayed properties as JSON
	#[clap(long, requires = "key")]
	pub json: bool,
	/// Log what is going on
	#[clap(short, long)]
	pub verbose: bool,
	/// The .ipa files to process
	#[clap(value_parser, required = true)]
	pub files: Vec<PathBuf>,
}

impl AppArgs {
	pub fn config(&self) -> Config {
		Config::default()
			.with_format(self.format.as_str())
			.with_extension(self.extension.as_str())
			.with_space(self.space.as_str())
	}
}

#[cfg(test)]
mod test {
	use super::AppArgs;
	use clap::Parser;
	use ipa_rename::config::DEFAULT_FORMAT;

	#[test]
	fn defaults() {
		let args = AppArgs::try_parse_from(["ipa-rename", "a.ipa", "b.ipa"]).expect("valid args");
		assert!(!args.dry_run);
		assert!(args.key.is_none());
		assert_eq!(args.files.len(), 2);
		let config = args.config();
		if std::env::var_os("IPA_RENAME_FORMAT").is_none() {
			assert_eq!(config.format.spec(), DEFAULT_FORMAT);
		}
		assert_eq!(config.options.extension, ".ipa");
	}

	#[test]
	fn flags() {
		let args = AppArgs::try_parse_from([
			"ipa-rename",
			"-n",
			"-k",
			"CFBundleName CFBundleVersion",
			"-f",
			"%CFBundleDisplayName-v%CFBundleVersion",
			"--json",
			"/NAS/apps/ttb.ipa",
		])
		.expect("valid args");
		assert!(args.dry_run);
		assert!(args.json);
		assert_eq!(args.key.as_deref(), Some("CFBundleName CFBundleVersion"));
		assert_eq!(args.config().format.spec(), "%CFBundleDisplayName-v%CFBundleVersion");
	}

	#[test]
	fn files_are_required() {
		assert!(AppArgs::try_parse_from(["ipa-rename", "-n"]).is_err());
	}

	#[test]
	fn json_requires_key() {
		assert!(AppArgs::try_parse_from(["ipa-rename", "--json", "a.ipa"]).is_err());
	}
}
