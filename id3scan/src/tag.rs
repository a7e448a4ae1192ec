//! The fields extracted from a tag

use crate::id3::TagVersion;

/// A generic representation of the fields that can be read
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum ItemKey {
	/// The track title (`TIT2`/`TT2`, or the first ID3v1 field)
	TrackTitle,
	/// The track artist (`TPE1`/`TP1`, or the second ID3v1 field)
	TrackArtist,
	/// The album title (`TALB`/`TAL`, or the third ID3v1 field)
	AlbumTitle,
}

impl ItemKey {
	/// Every key, in the order the fields are read
	pub const ALL: [ItemKey; 3] = [
		ItemKey::TrackTitle,
		ItemKey::TrackArtist,
		ItemKey::AlbumTitle,
	];

	/// A human readable name for the key
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::tag::ItemKey;
	///
	/// assert_eq!(ItemKey::TrackArtist.name(), "artist");
	/// ```
	pub fn name(self) -> &'static str {
		match self {
			ItemKey::TrackTitle => "title",
			ItemKey::TrackArtist => "artist",
			ItemKey::AlbumTitle => "album",
		}
	}
}

/// The title, artist, and album read from a source
///
/// A field that could not be read is `None`. An empty string means the field was present, but blank.
///
/// # Examples
///
/// ```rust
/// use id3scan::id3::TagVersion;
/// use id3scan::tag::{ItemKey, TagFields};
///
/// let mut fields = TagFields::new(TagVersion::V1);
/// fields.insert(ItemKey::TrackTitle, String::from("Foo title"));
///
/// assert_eq!(fields.title(), Some("Foo title"));
/// assert_eq!(fields.artist(), None);
/// ```
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct TagFields {
	version: TagVersion,
	title: Option<String>,
	artist: Option<String>,
	album: Option<String>,
}

impl TagFields {
	/// Create an empty `TagFields`
	pub fn new(version: TagVersion) -> Self {
		Self {
			version,
			..Self::default()
		}
	}

	/// The kind of tag the fields were read from
	///
	/// This is [`TagVersion::None`] only when nothing was read.
	pub fn version(&self) -> TagVersion {
		self.version
	}

	/// The track title
	pub fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}

	/// The track artist
	pub fn artist(&self) -> Option<&str> {
		self.artist.as_deref()
	}

	/// The album title
	pub fn album(&self) -> Option<&str> {
		self.album.as_deref()
	}

	/// Get the field for `key`
	pub fn get(&self, key: ItemKey) -> Option<&str> {
		match key {
			ItemKey::TrackTitle => self.title(),
			ItemKey::TrackArtist => self.artist(),
			ItemKey::AlbumTitle => self.album(),
		}
	}

	/// Set the field for `key`, replacing any existing value
	pub fn insert(&mut self, key: ItemKey, value: String) {
		let slot = match key {
			ItemKey::TrackTitle => &mut self.title,
			ItemKey::TrackArtist => &mut self.artist,
			ItemKey::AlbumTitle => &mut self.album,
		};

		*slot = Some(value);
	}

	/// Whether no field is set
	pub fn is_empty(&self) -> bool {
		ItemKey::ALL.into_iter().all(|key| self.get(key).is_none())
	}
}
