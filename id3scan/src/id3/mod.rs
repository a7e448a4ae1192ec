//! ID3 specific items
//!
//! ID3 comes in two very different shapes: ID3v1, a fixed-size trailer at the end of the file, and
//! ID3v2, a frame-based header at the start. Check the submodules for format-specific notes.

pub mod v1;
pub mod v2;

use crate::error::Result;
use crate::util::cursor::ByteCursor;
use v2::Id3v2Version;

use std::io::{Read, Seek, SeekFrom};

pub(crate) const ID3V2_TAG_MARKER: [u8; 3] = *b"ID3";

/// The kind of ID3 tag held by a source
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Default)]
pub enum TagVersion {
	/// No tag has been read
	#[default]
	None,
	/// ID3v1, or an unrecognized start of file that may have an ID3v1 trailer
	V1,
	/// ID3v2.2
	V22,
	/// ID3v2.3
	V23,
	/// ID3v2.4
	V24,
}

impl TagVersion {
	/// The ID3v2 version, if this is an ID3v2 tag
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::TagVersion;
	/// use id3scan::id3::v2::Id3v2Version;
	///
	/// assert_eq!(TagVersion::V23.id3v2_version(), Some(Id3v2Version::V3));
	/// assert_eq!(TagVersion::V1.id3v2_version(), None);
	/// ```
	pub fn id3v2_version(self) -> Option<Id3v2Version> {
		match self {
			TagVersion::V22 => Some(Id3v2Version::V2),
			TagVersion::V23 => Some(Id3v2Version::V3),
			TagVersion::V24 => Some(Id3v2Version::V4),
			TagVersion::None | TagVersion::V1 => None,
		}
	}
}

/// Classify the tag held by a source from its first bytes
///
/// A source starting with `"ID3"` and a major version of 2, 3, or 4 is an ID3v2 tag. Anything
/// else, including a source too short to hold the header, is an ID3v1 candidate. Whether an ID3v1 trailer
/// actually exists is only known once it has been searched for.
///
/// The cursor is left in an unspecified position.
///
/// # Errors
///
/// * [`std::io::Error`]
///
/// # Examples
///
/// ```rust
/// use id3scan::ByteCursor;
/// use id3scan::id3::{TagVersion, detect_version};
/// use std::io::Cursor;
///
/// # fn main() -> id3scan::error::Result<()> {
/// let mut cursor = ByteCursor::new(Cursor::new(b"ID3\x04\x00"))?;
/// assert_eq!(detect_version(&mut cursor)?, TagVersion::V24);
///
/// let mut cursor = ByteCursor::new(Cursor::new(b"ID"))?;
/// assert_eq!(detect_version(&mut cursor)?, TagVersion::V1);
/// # Ok(()) }
/// ```
pub fn detect_version<R>(cursor: &mut ByteCursor<R>) -> Result<TagVersion>
where
	R: Read + Seek,
{
	log::debug!("Detecting the tag version");

	cursor.seek(SeekFrom::Start(0))?;

	// Marker + major version
	if cursor.len() < 4 {
		log::debug!("Source is too small to contain an ID3v2 header");
		return Ok(TagVersion::V1);
	}

	let mut marker = [0; 3];
	cursor.read_into(&mut marker)?;

	if marker != ID3V2_TAG_MARKER {
		return Ok(TagVersion::V1);
	}

	let major = cursor.read_byte()?;
	match Id3v2Version::from_major(major) {
		Some(version) => {
			log::debug!("Found an ID3v2 header, version: {version:?}");
			Ok(version.into())
		},
		None => {
			log::warn!("Found an invalid ID3v2 version (v2.{major}), treating as ID3v1");
			Ok(TagVersion::V1)
		},
	}
}
