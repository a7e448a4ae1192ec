//! A bounded, seekable byte reader with a single byte of pushback

use crate::error::Result;
use crate::macros::err;

use std::io::{Read, Seek, SeekFrom};

use byteorder::ReadBytesExt;

/// A sequential reader over a fixed-length byte source
///
/// The cursor tracks its own position, which is always within `0..=len`. Reading past the end
/// produces [`ErrorKind::EndOfStream`](crate::error::ErrorKind::EndOfStream), never a fabricated byte.
///
/// A single byte may be pushed back with [`ByteCursor::unread_byte`], and only directly after a read.
///
/// # Examples
///
/// ```rust
/// use id3scan::ByteCursor;
/// use std::io::{Cursor, SeekFrom};
///
/// # fn main() -> id3scan::error::Result<()> {
/// let mut cursor = ByteCursor::new(Cursor::new(b"ID3"))?;
///
/// assert_eq!(cursor.read_byte()?, b'I');
/// cursor.unread_byte(b'I')?;
/// assert_eq!(cursor.position(), 0);
///
/// cursor.seek(SeekFrom::End(-1))?;
/// assert_eq!(cursor.read_byte()?, b'3');
/// assert!(cursor.read_byte().is_err());
/// # Ok(()) }
/// ```
pub struct ByteCursor<R> {
	reader: R,
	pos: u64,
	len: u64,
	pushback: Option<u8>,
	can_unread: bool,
}

impl<R> ByteCursor<R>
where
	R: Read + Seek,
{
	/// Create a new `ByteCursor`, starting at the reader's current position
	///
	/// # Errors
	///
	/// The reader's length or position could not be determined
	pub fn new(mut reader: R) -> Result<Self> {
		let pos = reader.stream_position()?;
		let len = reader.seek(SeekFrom::End(0))?;
		reader.seek(SeekFrom::Start(pos))?;

		Ok(Self {
			reader,
			pos: pos.min(len),
			len,
			pushback: None,
			can_unread: false,
		})
	}

	/// The current position, in bytes from the start of the source
	pub fn position(&self) -> u64 {
		self.pos
	}

	/// The total length of the source
	pub fn len(&self) -> u64 {
		self.len
	}

	/// The number of bytes between the current position and the end of the source
	pub fn remaining(&self) -> u64 {
		self.len - self.pos
	}

	/// Move to an absolute (from start or end) or relative position
	///
	/// Any pushed back byte is discarded.
	///
	/// # Errors
	///
	/// * The target is outside of `0..=len` ([`ErrorKind::EndOfStream`](crate::error::ErrorKind::EndOfStream)),
	///   the position is left untouched
	/// * [`std::io::Error`]
	pub fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
		let target = match pos {
			SeekFrom::Start(offset) => i128::from(offset),
			SeekFrom::End(delta) => i128::from(self.len) + i128::from(delta),
			SeekFrom::Current(delta) => i128::from(self.pos) + i128::from(delta),
		};

		if target < 0 || target > i128::from(self.len) {
			err!(EndOfStream);
		}

		let target = target as u64;
		self.reader.seek(SeekFrom::Start(target))?;

		self.pos = target;
		self.pushback = None;
		self.can_unread = false;

		Ok(target)
	}

	/// Read a single byte, advancing the position by one
	///
	/// # Errors
	///
	/// * The cursor is at the end of the source ([`ErrorKind::EndOfStream`](crate::error::ErrorKind::EndOfStream))
	/// * [`std::io::Error`]
	pub fn read_byte(&mut self) -> Result<u8> {
		if let Some(byte) = self.pushback.take() {
			self.pos += 1;
			self.can_unread = true;
			return Ok(byte);
		}

		if self.pos >= self.len {
			err!(EndOfStream);
		}

		let byte = self.reader.read_u8()?;
		self.pos += 1;
		self.can_unread = true;

		Ok(byte)
	}

	/// Fill `buf` entirely
	///
	/// # Errors
	///
	/// See [`ByteCursor::read_byte`]
	pub fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
		for byte in buf {
			*byte = self.read_byte()?;
		}

		Ok(())
	}

	/// Push `byte` back, so that it is returned by the next [`ByteCursor::read_byte`]
	///
	/// # Errors
	///
	/// There was no read since the last unread or seek ([`ErrorKind::InvalidOperation`](crate::error::ErrorKind::InvalidOperation))
	pub fn unread_byte(&mut self, byte: u8) -> Result<()> {
		if !self.can_unread {
			err!(InvalidOperation(
				"unread requires a read since the last unread or seek"
			));
		}

		self.pushback = Some(byte);
		self.pos -= 1;
		self.can_unread = false;

		Ok(())
	}

	/// Read the next byte without advancing the position
	///
	/// # Errors
	///
	/// See [`ByteCursor::read_byte`]
	pub fn peek_byte(&mut self) -> Result<u8> {
		let byte = self.read_byte()?;
		self.unread_byte(byte)?;

		Ok(byte)
	}

	/// Consume the cursor, returning the underlying reader
	pub fn into_inner(self) -> R {
		self.reader
	}
}
