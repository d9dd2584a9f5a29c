// SPDX-License-Identifier: Apache-2.0 OR MIT
use plist::Error as PlistError;
use std::{io::Error as IoError, path::PathBuf};
use thiserror::Error as ThisError;
use zip::result::ZipError;

#[derive(Debug, ThisError)]
pub enum Error {
	#[error("I/O error: {0}")]
	Io(#[from] IoError),
	#[error("not a valid IPA file: {0}")]
	InvalidArchive(#[source] ZipError),
	#[error("ZIP error: bad entry {entry}")]
	CorruptArchive { entry: String },
	#[error("{suffix} not found")]
	MetadataNotFound { suffix: String },
	#[error("metadata decodes to an empty property list")]
	EmptyMetadata,
	#[error("malformed property list: {0}")]
	MalformedMetadata(#[from] PlistError),
	#[error("{name:?} is not a plain file name")]
	InvalidName { name: String },
	#[error("destination {} already exists", .path.display())]
	DestinationExists { path: PathBuf },
	#[error("failed to rename {} to {}: {source}", .from.display(), .to.display())]
	Rename {
		from: PathBuf,
		to: PathBuf,
		#[source]
		source: IoError,
	},
}

/// The failure class of an [`Error`], without its payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	Io,
	InvalidArchive,
	CorruptArchive,
	MetadataNotFound,
	EmptyMetadata,
	MalformedMetadata,
	RenameFailure,
}

impl Error {
	pub const fn kind(&self) -> ErrorKind {
		match self {
			Self::Io(_) => ErrorKind::Io,
			Self::InvalidArchive(_) => ErrorKind::InvalidArchive,
			Self::CorruptArchive { .. } => ErrorKind::CorruptArchive,
			Self::MetadataNotFound { .. } => ErrorKind::MetadataNotFound,
			Self::EmptyMetadata => ErrorKind::EmptyMetadata,
			Self::MalformedMetadata(_) => ErrorKind::MalformedMetadata,
			Self::InvalidName { .. } | Self::DestinationExists { .. } | Self::Rename { .. } => {
				ErrorKind::RenameFailure
			}
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
	use super::{Error, ErrorKind};
	use std::{
		io::{Error as IoError, ErrorKind as IoErrorKind},
		path::PathBuf,
	};

	#[test]
	fn rename_failures_share_a_kind() {
		let exists = Error::DestinationExists {
			path: PathBuf::from("a.ipa"),
		};
		let rename = Error::Rename {
			from: PathBuf::from("a.ipa"),
			to: PathBuf::from("b.ipa"),
			source: IoError::new(IoErrorKind::PermissionDenied, "denied"),
		};
		assert_eq!(exists.kind(), ErrorKind::RenameFailure);
		assert_eq!(rename.kind(), ErrorKind::RenameFailure);
	}

	#[test]
	fn corrupt_archive_names_entry() {
		let err = Error::CorruptArchive {
			entry: "Payload/Foo.app/Foo".to_owned(),
		};
		assert_eq!(err.to_string(), "ZIP error: bad entry Payload/Foo.app/Foo");
	}
}
