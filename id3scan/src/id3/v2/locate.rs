use super::FrameId;
use crate::error::{ErrorKind, Result};
use crate::util::cursor::ByteCursor;

use std::io::{Read, Seek};

/// Search forward for a frame identifier
///
/// Every candidate offset in `start..start + window` (where `start` is the cursor's current position)
/// is tested, including candidates overlapping a partial match. For example, `TIT2` is found in
/// `TITIT2` at offset 2.
///
/// On success, the cursor is positioned directly after the identifier, and the identifier's offset
/// is returned.
///
/// If the identifier isn't found within the window, or the source ends first, `None` is returned and the
/// cursor position is unspecified.
///
/// # Errors
///
/// * [`std::io::Error`]
///
/// # Examples
///
/// ```rust
/// use id3scan::ByteCursor;
/// use id3scan::id3::v2::{FrameId, find_frame};
/// use std::io::Cursor;
///
/// # fn main() -> id3scan::error::Result<()> {
/// let mut cursor = ByteCursor::new(Cursor::new(b"\0\0TITIT2\0"))?;
///
/// let offset = find_frame(&mut cursor, FrameId::new("TIT2")?, 2000)?;
/// assert_eq!(offset, Some(4));
/// assert_eq!(cursor.position(), 8);
/// # Ok(()) }
/// ```
pub fn find_frame<R>(
	cursor: &mut ByteCursor<R>,
	frame_id: FrameId,
	window: u64,
) -> Result<Option<u64>>
where
	R: Read + Seek,
{
	let start = cursor.position();
	log::debug!("Searching for frame `{frame_id}` at offset: {start}");

	let id = frame_id.as_bytes();
	let id_len = id.len();

	// The last `filled` bytes read, the oldest being the current candidate's first byte
	let mut lookahead = [0; 4];
	let mut filled = 0;

	loop {
		let byte = match cursor.read_byte() {
			Ok(byte) => byte,
			Err(e) if matches!(e.kind(), ErrorKind::EndOfStream) => {
				log::debug!("Reached the end of the stream searching for `{frame_id}`");
				return Ok(None);
			},
			Err(e) => return Err(e),
		};

		if filled == id_len {
			lookahead.copy_within(1..id_len, 0);
			filled -= 1;
		}

		lookahead[filled] = byte;
		filled += 1;

		if filled < id_len {
			continue;
		}

		let candidate = cursor.position() - id_len as u64;
		if candidate - start >= window {
			log::debug!("Frame `{frame_id}` not found within {window} bytes");
			return Ok(None);
		}

		if &lookahead[..id_len] == id {
			log::debug!("Found frame `{frame_id}` at offset: {candidate}");
			return Ok(Some(candidate));
		}
	}
}
