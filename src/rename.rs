// SPDX-License-Identifier: Apache-2.0 OR MIT
use crate::error::{Error, Result};
use log::debug;
use std::{
	ffi::OsStr,
	fs,
	path::{Path, PathBuf},
};

/// Where `source` ends up once its file name is replaced with `name`. The
/// directory part is left as is.
///
/// `name` must be a plain file name: anything with a separator, or `.`/`..`,
/// is rejected with [`Error::InvalidName`].
pub fn target_path(source: &Path, name: &str) -> Result<PathBuf> {
	if Path::new(name).file_name() != Some(OsStr::new(name)) {
		return Err(Error::InvalidName {
			name: name.to_owned(),
		});
	}
	Ok(source.with_file_name(name))
}

/// What [`rename_archive`] did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
	Renamed,
	/// The file already had the target name.
	Unchanged,
}

/// Renames `source` to `target` without replacing another file.
pub fn rename_archive(source: &Path, target: &Path) -> Result<Outcome> {
	if source == target {
		return Ok(Outcome::Unchanged);
	}
	// Not atomic: a file created at `target` between this check and the
	// rename is still overwritten.
	if target.exists() {
		return Err(Error::DestinationExists {
			path: target.to_path_buf(),
		});
	}
	debug!("renaming {} to {}", source.display(), target.display());
	fs::rename(source, target).map_err(|source_err| Error::Rename {
		from: source.to_path_buf(),
		to: target.to_path_buf(),
		source: source_err,
	})?;
	Ok(Outcome::Renamed)
}
