use super::Id3v2Version;
use super::synchsafe::unsynch_u32;
use crate::config::ScanOptions;
use crate::error::Result;
use crate::macros::err;
use crate::util::cursor::ByteCursor;
use crate::util::text::TextEncoding;

use std::io::{Read, Seek};

use byteorder::{BigEndian, ByteOrder};

/// The portion of a text frame header following its identifier
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct TextFrameHeader {
	/// The size declared in the frame header, covering the encoding descriptor and the text
	pub declared_size: u32,
	pub encoding: TextEncoding,
	/// The number of descriptor bytes consumed after the flags
	pub descriptor_len: u32,
}

impl TextFrameHeader {
	/// The number of text bytes following the descriptor
	pub(crate) fn body_len(&self) -> Result<u32> {
		match self.declared_size.checked_sub(self.descriptor_len) {
			Some(len) => Ok(len),
			None => err!(BadFrameLength),
		}
	}
}

pub(crate) fn parse_text_frame_header<R>(
	cursor: &mut ByteCursor<R>,
	version: Id3v2Version,
) -> Result<TextFrameHeader>
where
	R: Read + Seek,
{
	let declared_size = match version {
		Id3v2Version::V2 => {
			let mut size = [0; 3];
			cursor.read_into(&mut size)?;
			BigEndian::read_u24(&size)
		},
		Id3v2Version::V3 | Id3v2Version::V4 => {
			let mut size = [0; 4];
			cursor.read_into(&mut size)?;

			let mut flags = [0; 2];
			cursor.read_into(&mut flags)?;

			let size = BigEndian::read_u32(&size);
			if version == Id3v2Version::V4 {
				unsynch_u32(size)
			} else {
				size
			}
		},
	};

	let encoding_byte = cursor.read_byte()?;
	let encoding = TextEncoding::from_u8(encoding_byte).unwrap_or_else(|| {
		log::warn!("Found an unknown text encoding ({encoding_byte}), assuming Latin-1");
		TextEncoding::Latin1
	});

	// The byte order mark
	for _ in 0..encoding.descriptor_len() {
		cursor.read_byte()?;
	}

	Ok(TextFrameHeader {
		declared_size,
		encoding,
		descriptor_len: 1 + encoding.descriptor_len(),
	})
}

/// Read the text of a frame, with the cursor positioned directly after its identifier
///
/// The frame size, flags (ID3v2.3+), and encoding descriptor are consumed. Every null byte in
/// the body is discarded, which strips both terminators and the high bytes of UTF-16 code units.
///
/// # Errors
///
/// * The declared size is too small to hold the encoding descriptor ([`ErrorKind::BadFrameLength`](crate::error::ErrorKind::BadFrameLength))
/// * The declared size exceeds [`ScanOptions::max_frame_size`] ([`ErrorKind::TooMuchData`](crate::error::ErrorKind::TooMuchData))
/// * The source ends before the body does ([`ErrorKind::EndOfStream`](crate::error::ErrorKind::EndOfStream))
/// * [`std::io::Error`]
///
/// # Examples
///
/// ```rust
/// use id3scan::ByteCursor;
/// use id3scan::config::ScanOptions;
/// use id3scan::id3::v2::{Id3v2Version, read_frame_body};
/// use std::io::Cursor;
///
/// # fn main() -> id3scan::error::Result<()> {
/// // Size, flags, Latin-1 encoding, "Foo" + terminator
/// let frame = b"\x00\x00\x00\x05\x00\x00\x00Foo\x00";
/// let mut cursor = ByteCursor::new(Cursor::new(frame))?;
///
/// let text = read_frame_body(&mut cursor, Id3v2Version::V3, ScanOptions::new())?;
/// assert_eq!(text, "Foo");
/// # Ok(()) }
/// ```
pub fn read_frame_body<R>(
	cursor: &mut ByteCursor<R>,
	version: Id3v2Version,
	options: ScanOptions,
) -> Result<String>
where
	R: Read + Seek,
{
	let header = parse_text_frame_header(cursor, version)?;
	log::trace!("Parsed text frame header: {header:?}");

	if header.declared_size > options.max_frame_size {
		log::warn!(
			"Frame declares an abnormally large size: {}",
			header.declared_size
		);
		err!(TooMuchData);
	}

	let body_len = header.body_len()?;
	if u64::from(body_len) > cursor.remaining() {
		log::warn!(
			"Frame body extends past the end of the stream ({body_len} bytes, {} remaining)",
			cursor.remaining()
		);
		err!(EndOfStream);
	}

	let mut text = Vec::with_capacity(body_len as usize);
	for _ in 0..body_len {
		let byte = cursor.read_byte()?;
		if byte != 0 {
			text.push(byte);
		}
	}

	Ok(header.encoding.decode(&text))
}
