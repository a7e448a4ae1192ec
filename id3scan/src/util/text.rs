/// The text encoding descriptor of an ID3v2 text frame
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	UTF16 = 1,
	/// UTF-16 big endian
	UTF16BE = 2,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a u8, must be 0-3 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 => Some(Self::UTF16),
			2 => Some(Self::UTF16BE),
			3 => Some(Self::UTF8),
			_ => None,
		}
	}

	/// The number of descriptor bytes following the encoding byte
	///
	/// Only [`TextEncoding::UTF16`] is followed by a byte order mark.
	pub(crate) fn descriptor_len(self) -> u32 {
		match self {
			Self::UTF16 => 2,
			_ => 0,
		}
	}

	/// Decode text that has already had its null bytes removed
	///
	/// UTF-16 text with its nulls removed only retains the low bytes of its code units,
	/// so it is treated as Latin-1.
	pub(crate) fn decode(self, bytes: &[u8]) -> String {
		match self {
			Self::UTF8 => String::from_utf8_lossy(bytes).into_owned(),
			_ => latin1_decode(bytes),
		}
	}
}

pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	bytes.iter().map(|c| char::from(*c)).collect::<String>()
}

/// Truncate at the first null, then strip any trailing space padding
pub(crate) fn trim_fixed_field(data: &[u8]) -> &[u8] {
	let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
	if data[end..].iter().any(|b| *b != 0) {
		log::warn!("Fixed-length text field contains trailing junk, skipping");
	}

	let data = &data[..end];
	let trimmed_len = data
		.iter()
		.rposition(|&b| b != b' ')
		.map_or(0, |last| last + 1);

	&data[..trimmed_len]
}
