// SPDX-License-Identifier: Apache-2.0 OR MIT
use super::args::AppArgs;
use color_eyre::{eyre::WrapErr, Result};
use ipa_rename::{
	display::{select, write_json, write_properties, Selection},
	reader::read_metadata,
	rename::{rename_archive, target_path, Outcome},
	Config, Error,
};
use log::debug;
use std::{
	io::{self, Write},
	path::{Path, PathBuf},
};

/// What to do with each archive once its properties are read.
pub enum Mode {
	Display { selection: Selection, json: bool },
	DryRun,
	Rename,
}

impl Mode {
	pub fn new(args: &AppArgs, config: &Config) -> Self {
		match &args.key {
			Some(key) => Self::Display {
				selection: Selection::parse(key, &config.major_keys),
				json: args.json,
			},
			None if args.dry_run => Self::DryRun,
			None => Self::Rename,
		}
	}
}

pub fn process(args: &AppArgs, config: &Config) -> Result<()> {
	let mode = Mode::new(args, config);
	let stdout = io::stdout();
	let stderr = io::stderr();
	process_files(
		&mut stdout.lock(),
		&mut stderr.lock(),
		&args.files,
		config,
		&mode,
	)
	.wrap_err("failed to write output")
}

/// Handles every file in order. A file that fails gets one `ERR:` line on
/// `diag` and the rest are still processed; only failing to write to `out`
/// or `diag` stops the loop.
pub fn process_files<W: Write, D: Write>(
	out: &mut W,
	diag: &mut D,
	files: &[PathBuf],
	config: &Config,
	mode: &Mode,
) -> io::Result<()> {
	for path in files {
		debug!("processing {}", path.display());
		if let Err(err) = process_file(out, path, config, mode) {
			out.flush()?;
			writeln!(diag, "ERR: {}", describe(path, &err))?;
		}
	}
	Ok(())
}

pub fn process_file<W: Write>(
	out: &mut W,
	path: &Path,
	config: &Config,
	mode: &Mode,
) -> ipa_rename::Result<()> {
	let props = read_metadata(path, &config.metadata_suffix)?;
	let target = match mode {
		Mode::Display { selection, json } => {
			let selected = select(&props, selection);
			if *json {
				write_json(out, &selected)?;
			} else {
				write_properties(out, &selected)?;
			}
			return Ok(());
		}
		Mode::DryRun | Mode::Rename => {
			target_path(path, &config.format.format(&props, &config.options))?
		}
	};

	write!(out, "{} -> {}", path.display(), target.display())?;
	if let Mode::DryRun = mode {
		writeln!(out)?;
		return Ok(());
	}
	match rename_archive(path, &target) {
		Ok(Outcome::Renamed) => writeln!(out, " OK")?,
		Ok(Outcome::Unchanged) => writeln!(out, " unchanged")?,
		Err(err) => {
			writeln!(out)?;
			return Err(err);
		}
	}
	Ok(())
}

/// One-line diagnostic for a file that could not be handled.
pub fn describe(path: &Path, err: &Error) -> String {
	let path = path.display();
	match err {
		Error::Io(io_err) => format!("{path}: {io_err}"),
		Error::InvalidArchive(_) => format!("not valid IPA file: {path}"),
		Error::CorruptArchive { entry } => format!("ZIP error: {entry} in {path}"),
		Error::MetadataNotFound { suffix } => format!("{suffix} not found in {path}"),
		Error::EmptyMetadata => format!("{path} returns empty property list"),
		Error::MalformedMetadata(plist_err) => {
			format!("{path} has a malformed property list: {plist_err}")
		}
		Error::InvalidName { name } => format!("{path} not renamed, {name:?} is not a file name"),
		Error::DestinationExists { path: dest } => {
			format!("{path} not renamed, {} already exists", dest.display())
		}
		Error::Rename { to, source, .. } => {
			format!("{path} not renamed to {}: {source}", to.display())
		}
	}
}
