pub(crate) const ID3V1_TAG_MARKER: [u8; 3] = *b"TAG";

/// The size of a complete ID3v1 tag, including the marker
pub(crate) const ID3V1_TAG_SIZE: u64 = 128;

/// The size of the title, artist, and album fields
pub const ID3V1_FIELD_LEN: usize = 30;
