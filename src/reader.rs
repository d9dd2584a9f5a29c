// SPDX-License-Identifier: Apache-2.0 OR MIT
use crate::{
	error::{Error, Result},
	properties::Properties,
};
use log::{debug, trace};
use plist::Value;
use std::{
	fs::File,
	io::{self, BufReader, Cursor, Read, Seek},
	path::Path,
};
use zip::{result::ZipError, ZipArchive};

/// Reads the metadata property list out of an IPA file on disk.
///
/// The archive is opened, every entry is checked against its CRC, and the
/// first entry whose path ends with `suffix` is decoded as a binary or XML
/// property list. The file handle is dropped before this returns, on every
/// path.
///
/// ```rust,no_run
/// use ipa_rename::{reader::read_metadata, Result};
///
/// fn main() -> Result<()> {
/// 	let props = read_metadata("Foo.ipa", "/Info.plist")?;
/// 	println!("{:?}", props.get("CFBundleVersion"));
/// 	Ok(())
/// }
/// ```
pub fn read_metadata(path: impl AsRef<Path>, suffix: &str) -> Result<Properties> {
	let path = path.as_ref();
	debug!("opening archive {}", path.display());
	let file = File::open(path)?;
	read_metadata_from(BufReader::new(file), suffix)
}

/// Same as [`read_metadata`], for an archive that is already in memory or
/// otherwise seekable.
pub fn read_metadata_from<R: Read + Seek>(reader: R, suffix: &str) -> Result<Properties> {
	MetadataReader::new(reader)?.read(suffix)
}

/// An open IPA archive.
pub struct MetadataReader<R> {
	archive: ZipArchive<R>,
}

impl<R: Read + Seek> MetadataReader<R> {
	/// Parses the ZIP central directory. Anything that isn't a well-formed
	/// ZIP container is reported as [`Error::InvalidArchive`].
	pub fn new(reader: R) -> Result<Self> {
		let archive = ZipArchive::new(reader).map_err(Error::InvalidArchive)?;
		debug!("archive has {} entries", archive.len());
		Ok(Self { archive })
	}

	/// Decompresses every entry and checks its CRC, returning the entry names
	/// in archive order. The first entry that fails its checksum or can't be
	/// decoded is reported as [`Error::CorruptArchive`]. Failures of the
	/// underlying reader stay [`Error::Io`].
	pub fn validate(&mut self) -> Result<Vec<String>> {
		let mut names = Vec::with_capacity(self.archive.len());
		for index in 0..self.archive.len() {
			let name = self.entry_name(index);
			let checked = match self.archive.by_index(index) {
				Ok(mut entry) => io::copy(&mut entry, &mut io::sink()).map_err(ZipError::Io),
				Err(err) => Err(err),
			};
			if let Err(err) = checked {
				return Err(entry_error(err, name));
			}
			trace!("entry ok: {name}");
			names.push(name);
		}
		Ok(names)
	}

	/// Validates the archive, then decodes the first entry ending in `suffix`.
	pub fn read(mut self, suffix: &str) -> Result<Properties> {
		let names = self.validate()?;
		let index = names
			.iter()
			.position(|name| name.ends_with(suffix))
			.ok_or_else(|| Error::MetadataNotFound {
				suffix: suffix.to_owned(),
			})?;
		debug!("reading metadata from {}", names[index]);

		let mut data = Vec::new();
		self.archive
			.by_index(index)
			.and_then(|mut entry| entry.read_to_end(&mut data).map_err(ZipError::Io))
			.map_err(|err| entry_error(err, names[index].clone()))?;
		decode(&data)
	}

	fn entry_name(&mut self, index: usize) -> String {
		self.archive
			.by_index_raw(index)
			.map(|entry| entry.name().to_owned())
			.unwrap_or_else(|_| format!("#{index}"))
	}
}

/// Sorts a failure while reading `entry` into damage in the archive itself
/// and errors from the underlying reader.
fn entry_error(err: ZipError, entry: String) -> Error {
	match err {
		ZipError::Io(io_err) if !is_corruption(&io_err) => Error::Io(io_err),
		_ => Error::CorruptArchive { entry },
	}
}

// zip reports CRC mismatches as a plain io::Error carrying "Invalid
// checksum"; decompressors use InvalidData/InvalidInput, truncation EOF.
fn is_corruption(err: &io::Error) -> bool {
	matches!(
		err.kind(),
		io::ErrorKind::InvalidData | io::ErrorKind::InvalidInput | io::ErrorKind::UnexpectedEof
	) || err.to_string().to_lowercase().contains("checksum")
}

/// Decodes raw property list bytes, binary or XML, into [`Properties`].
///
/// A document whose root is not a dictionary, or is an empty one, carries no
/// usable metadata and yields [`Error::EmptyMetadata`].
pub fn decode(data: &[u8]) -> Result<Properties> {
	let root = Value::from_reader(Cursor::new(data))?;
	match root.into_dictionary() {
		Some(dict) if !dict.is_empty() => Ok(Properties::new(dict)),
		_ => Err(Error::EmptyMetadata),
	}
}
