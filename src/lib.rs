// SPDX-License-Identifier: Apache-2.0 OR MIT
#![forbid(unsafe_code)]
#![warn(
	clippy::perf,
	clippy::complexity,
	clippy::style,
	clippy::correctness,
	clippy::missing_const_for_fn
)]
#![allow(clippy::tabs_in_doc_comments)]

//! This crate reads the `Info.plist` out of an iOS app archive (`.ipa`) and
//! builds a normalized filename from its properties, so that many versions of
//! the same app can sit side by side with consistent, sortable names.
//!
//! # Examples
//!
//! ## Computing the normalized name of an IPA
//! ```rust,no_run
//! use ipa_rename::{reader::read_metadata, Config, Result};
//!
//! fn main() -> Result<()> {
//! 	let config = Config::default();
//! 	let props = read_metadata("ttb.ipa", &config.metadata_suffix)?;
//! 	let name = config.format.format(&props, &config.options);
//! 	println!("ttb.ipa -> {name}");
//! 	Ok(())
//! }
//! ```
//!
//! ## Listing the major properties
//! ```rust,no_run
//! use ipa_rename::{
//! 	display::{select, write_properties, Selection},
//! 	reader::read_metadata,
//! 	Config, Result,
//! };
//!
//! fn main() -> Result<()> {
//! 	let config = Config::default();
//! 	let props = read_metadata("ttb.ipa", &config.metadata_suffix)?;
//! 	let selection = Selection::parse("major", &config.major_keys);
//! 	write_properties(&mut std::io::stdout(), &select(&props, &selection))?;
//! 	Ok(())
//! }
//! ```
//!
//! # Format strings
//!
//! A token is `%` followed by an uppercase letter and then more letters,
//! e.g. `%CFBundleVersion`. `%CFBundleName|CFBundleDisplayName` tries each
//! name in turn and uses the first one with a value. Missing properties
//! become empty, spaces become `_`, and `.ipa` is appended.
//!
//! # License
//!
//! `ipa-rename` is licensed under either the MIT license or the
//! Apache License 2.0, at the choice of the user.

/// Run configuration and built-in defaults.
pub mod config;
/// Showing selected properties.
pub mod display;
/// Error handling for reading archives and renaming them.
pub mod error;
/// Turning properties into a filename.
pub mod format;
/// The decoded property list.
pub mod properties;
/// Reading metadata out of IPA archives.
pub mod reader;
/// Renaming archives in place.
pub mod rename;

pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use format::{format_name, FormatOptions, NameFormat};
pub use properties::Properties;
pub use reader::{read_metadata, MetadataReader};
