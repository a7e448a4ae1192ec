//! ID3v2 items and utilities
//!
//! ## Important notes
//!
//! Only the title (`TIT2`/`TT2`), artist (`TPE1`/`TP1`), and album (`TALB`/`TAL`) text frames are read.
//! Frames are located by scanning the start of the source for their identifiers, rather than walking the
//! frame list, so the frame order within the tag is irrelevant.

mod body;
mod frame_id;
mod locate;
pub mod synchsafe;

pub use body::read_frame_body;
pub use frame_id::FrameId;
pub use locate::find_frame;

use crate::config::ScanOptions;
use crate::error::Result;
use crate::id3::TagVersion;
use crate::macros::err;
use crate::tag::{ItemKey, TagFields};
use crate::util::cursor::ByteCursor;

use std::io::{Read, Seek, SeekFrom};

/// The ID3v2 version
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Id3v2Version {
	/// ID3v2.2
	V2,
	/// ID3v2.3
	V3,
	/// ID3v2.4
	V4,
}

impl Id3v2Version {
	/// Get the `Id3v2Version` for a major version number
	pub fn from_major(major: u8) -> Option<Self> {
		match major {
			2 => Some(Self::V2),
			3 => Some(Self::V3),
			4 => Some(Self::V4),
			_ => None,
		}
	}
}

impl From<Id3v2Version> for TagVersion {
	fn from(input: Id3v2Version) -> Self {
		match input {
			Id3v2Version::V2 => TagVersion::V22,
			Id3v2Version::V3 => TagVersion::V23,
			Id3v2Version::V4 => TagVersion::V24,
		}
	}
}

/// Locate and read the text frame holding `key`
///
/// The cursor is rewound to the start of the source afterwards, so the next frame can be
/// searched for regardless of order.
pub(crate) fn read_text_frame<R>(
	cursor: &mut ByteCursor<R>,
	version: Id3v2Version,
	key: ItemKey,
	options: ScanOptions,
) -> Result<String>
where
	R: Read + Seek,
{
	let frame_id = FrameId::for_item(key, version);

	if find_frame(cursor, frame_id, options.frame_search_window)?.is_none() {
		err!(FrameNotFound(frame_id));
	}

	let text = read_frame_body(cursor, version, options)?;
	cursor.seek(SeekFrom::Start(0))?;

	Ok(text)
}

/// Read the title, artist, and album frames
///
/// This is all-or-nothing, if any of the frames can't be read, the error is returned.
pub(crate) fn read_fields<R>(
	cursor: &mut ByteCursor<R>,
	version: Id3v2Version,
	options: ScanOptions,
) -> Result<TagFields>
where
	R: Read + Seek,
{
	log::debug!("Reading ID3v2 fields, version: {version:?}");

	let mut fields = TagFields::new(version.into());
	for key in ItemKey::ALL {
		cursor.seek(SeekFrom::Start(0))?;

		let text = read_text_frame(cursor, version, key, options)?;
		fields.insert(key, text);
	}

	Ok(fields)
}
