use super::Id3v2Version;
use crate::error::Result;
use crate::macros::err;
use crate::tag::ItemKey;

use std::fmt::{Display, Formatter};

/// An `ID3v2` frame ID
///
/// ID3v2.2 uses 3 character IDs, while ID3v2.3 and ID3v2.4 use 4.
#[derive(PartialEq, Clone, Copy, Debug, Eq, Hash)]
pub enum FrameId {
	/// A 4 character `ID3v2.3/4` frame ID
	Valid([u8; 4]),
	/// A 3 character `ID3v2.2` frame ID
	Outdated([u8; 3]),
}

impl FrameId {
	/// Attempts to create a `FrameId` from an ID string
	///
	/// # Errors
	///
	/// * `id` contains invalid characters (must be 'A'..='Z' and '0'..='9')
	/// * `id` is an invalid length (must be 3 or 4)
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::v2::FrameId;
	///
	/// # fn main() -> id3scan::error::Result<()> {
	/// let id_valid = FrameId::new("TPE1")?;
	/// assert!(!id_valid.is_outdated());
	///
	/// let id_outdated = FrameId::new("TP1")?;
	/// assert!(id_outdated.is_outdated());
	///
	/// assert!(FrameId::new("tpe1").is_err());
	/// # Ok(()) }
	/// ```
	pub fn new(id: &str) -> Result<Self> {
		let bytes = id.as_bytes();
		Self::verify_id(bytes)?;

		match *bytes {
			[a, b, c] => Ok(Self::Outdated([a, b, c])),
			[a, b, c, d] => Ok(Self::Valid([a, b, c, d])),
			_ => err!(BadFrameId(bytes.to_vec())),
		}
	}

	/// Get the frame ID holding `key` in a tag of the given version
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::v2::{FrameId, Id3v2Version};
	/// use id3scan::tag::ItemKey;
	///
	/// let title = FrameId::for_item(ItemKey::TrackTitle, Id3v2Version::V2);
	/// assert_eq!(title.as_str(), "TT2");
	///
	/// let title = FrameId::for_item(ItemKey::TrackTitle, Id3v2Version::V4);
	/// assert_eq!(title.as_str(), "TIT2");
	/// ```
	pub fn for_item(key: ItemKey, version: Id3v2Version) -> Self {
		let (outdated, valid) = match key {
			ItemKey::TrackTitle => (*b"TT2", *b"TIT2"),
			ItemKey::TrackArtist => (*b"TP1", *b"TPE1"),
			ItemKey::AlbumTitle => (*b"TAL", *b"TALB"),
		};

		match version {
			Id3v2Version::V2 => Self::Outdated(outdated),
			Id3v2Version::V3 | Id3v2Version::V4 => Self::Valid(valid),
		}
	}

	/// Whether this frame ID represents an outdated (ID3v2.2) ID
	pub fn is_outdated(&self) -> bool {
		matches!(self, FrameId::Outdated(_))
	}

	/// The raw identifier
	pub fn as_bytes(&self) -> &[u8] {
		match self {
			FrameId::Valid(id) => id,
			FrameId::Outdated(id) => id,
		}
	}

	/// Extracts the string from the ID
	pub fn as_str(&self) -> &str {
		// Verified to be ASCII on creation
		std::str::from_utf8(self.as_bytes()).unwrap_or_default()
	}

	/// The width of the identifier in bytes
	pub fn len(&self) -> usize {
		self.as_bytes().len()
	}

	fn verify_id(id: &[u8]) -> Result<()> {
		for c in id {
			if !c.is_ascii_uppercase() && !c.is_ascii_digit() {
				err!(BadFrameId(id.to_vec()));
			}
		}

		Ok(())
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
