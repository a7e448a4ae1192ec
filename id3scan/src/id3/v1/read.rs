use super::constants::{ID3V1_FIELD_LEN, ID3V1_TAG_MARKER, ID3V1_TAG_SIZE};
use crate::config::ScanOptions;
use crate::error::{ErrorKind, Result};
use crate::id3::TagVersion;
use crate::macros::err;
use crate::tag::{ItemKey, TagFields};
use crate::util::cursor::ByteCursor;
use crate::util::text::{latin1_decode, trim_fixed_field};

use std::io::{Read, Seek, SeekFrom};

/// Search backwards from the end of the source for an ID3v1 trailer
///
/// A trailer in its usual position (128 bytes from the end) is always preferred. Otherwise, `window`
/// candidate offsets are tested, starting 3 bytes from the end and stepping backwards one byte at a time.
///
/// On success, the cursor is positioned directly after the `"TAG"` marker.
///
/// # Errors
///
/// * [`std::io::Error`]
///
/// # Examples
///
/// ```rust
/// use id3scan::ByteCursor;
/// use id3scan::id3::v1::find_trailer;
/// use std::io::Cursor;
///
/// # fn main() -> id3scan::error::Result<()> {
/// let mut cursor = ByteCursor::new(Cursor::new(b"audio dataTAGFoo title"))?;
///
/// assert!(find_trailer(&mut cursor, 200)?);
/// assert_eq!(cursor.position(), 13);
/// # Ok(()) }
/// ```
pub fn find_trailer<R>(cursor: &mut ByteCursor<R>, window: u64) -> Result<bool>
where
	R: Read + Seek,
{
	log::debug!("Searching for an ID3v1 tag");

	let len = cursor.len();

	// Reader is too small to contain the marker
	if len < ID3V1_TAG_MARKER.len() as u64 {
		return Ok(false);
	}

	if len >= ID3V1_TAG_SIZE && marker_at(cursor, len - ID3V1_TAG_SIZE)? {
		log::debug!("Found an ID3v1 tag");
		return Ok(true);
	}

	let last = len - ID3V1_TAG_MARKER.len() as u64;
	for distance in 0..window {
		let Some(offset) = last.checked_sub(distance) else {
			break;
		};

		if marker_at(cursor, offset)? {
			log::warn!(
				"Found an ID3v1 tag at an unusual offset: {offset} (expected {})",
				len.saturating_sub(ID3V1_TAG_SIZE)
			);
			return Ok(true);
		}
	}

	log::debug!("No ID3v1 tag found");
	Ok(false)
}

// Leaves the cursor after the marker on success
fn marker_at<R>(cursor: &mut ByteCursor<R>, offset: u64) -> Result<bool>
where
	R: Read + Seek,
{
	cursor.seek(SeekFrom::Start(offset))?;
	if cursor.peek_byte()? != ID3V1_TAG_MARKER[0] {
		return Ok(false);
	}

	let mut marker = [0; 3];
	cursor.read_into(&mut marker)?;

	Ok(marker == ID3V1_TAG_MARKER)
}

/// Read a fixed-length ID3v1 text field
///
/// Up to `max_len` bytes are read. The text is cut at the first null, and trailing spaces are removed.
/// A field consisting only of padding results in an empty string.
///
/// If the source ends before the field is complete, the bytes that were read are used. If the cursor is
/// already at the end, `None` is returned.
///
/// # Errors
///
/// * [`std::io::Error`]
///
/// # Examples
///
/// ```rust
/// use id3scan::ByteCursor;
/// use id3scan::id3::v1::read_field;
/// use std::io::Cursor;
///
/// # fn main() -> id3scan::error::Result<()> {
/// let mut cursor = ByteCursor::new(Cursor::new(b"Foo title   Bar artist   "))?;
///
/// assert_eq!(read_field(&mut cursor, 12)?.as_deref(), Some("Foo title"));
/// assert_eq!(read_field(&mut cursor, 13)?.as_deref(), Some("Bar artist"));
/// assert_eq!(read_field(&mut cursor, 30)?, None);
/// # Ok(()) }
/// ```
pub fn read_field<R>(cursor: &mut ByteCursor<R>, max_len: usize) -> Result<Option<String>>
where
	R: Read + Seek,
{
	let mut field = Vec::with_capacity(max_len);
	for _ in 0..max_len {
		match cursor.read_byte() {
			Ok(byte) => field.push(byte),
			Err(e) if matches!(e.kind(), ErrorKind::EndOfStream) => break,
			Err(e) => return Err(e),
		}
	}

	if field.is_empty() {
		return Ok(None);
	}

	if field.len() < max_len {
		log::warn!(
			"ID3v1 field cut short by the end of the stream ({} of {max_len} bytes)",
			field.len()
		);
	}

	Ok(Some(latin1_decode(trim_fixed_field(&field))))
}

/// Read the title, artist, and album from an ID3v1 trailer
pub(crate) fn read_fields<R>(cursor: &mut ByteCursor<R>, options: ScanOptions) -> Result<TagFields>
where
	R: Read + Seek,
{
	if !find_trailer(cursor, options.trailer_search_window)? {
		err!(NoTagPresent);
	}

	let mut fields = TagFields::new(TagVersion::V1);
	for key in ItemKey::ALL {
		if let Some(text) = read_field(cursor, ID3V1_FIELD_LEN)? {
			fields.insert(key, text);
		}
	}

	Ok(fields)
}
