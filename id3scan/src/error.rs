//! Contains the errors that can arise within id3scan
//!
//! The primary error is [`Id3ScanError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use crate::id3::v2::FrameId;

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, Id3ScanError>`
pub type Result<T> = std::result::Result<T, Id3ScanError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Stream related errors
	/// Attempted to read or seek past the available bytes
	///
	/// This is recoverable, and only signals that a search or frame body ran out of data.
	EndOfStream,
	/// Misuse of the cursor's single byte pushback
	InvalidOperation(&'static str),

	// Tag related errors
	/// A frame search exhausted its scan window without finding the identifier
	FrameNotFound(FrameId),
	/// Neither an ID3v2 header nor an ID3v1 trailer were found
	NoTagPresent,
	/// A frame ID contains invalid characters (must be within `'A'..'Z'` or `'0'..'9'`),
	/// or is too short/long
	BadFrameId(Vec<u8>),
	/// A frame's declared size is too small to hold its own header bytes
	BadFrameLength,
	/// Attempting to read an abnormally large amount of data
	TooMuchData,

	// Conversions for external errors
	/// The source could not be opened
	SourceUnavailable(std::io::Error),
	/// Represents all other cases of [`std::io::Error`].
	Io(std::io::Error),
}

impl ErrorKind {
	/// Whether this error only affects a single frame
	///
	/// Frame-level errors cause an ID3v2 extraction to fall back to the ID3v1 trailer.
	pub fn is_frame_level(&self) -> bool {
		matches!(
			self,
			Self::EndOfStream | Self::FrameNotFound(_) | Self::BadFrameLength | Self::TooMuchData
		)
	}
}

/// Errors that could occur within id3scan
pub struct Id3ScanError {
	pub(crate) kind: ErrorKind,
}

impl Id3ScanError {
	/// Create an `Id3ScanError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::error::{ErrorKind, Id3ScanError};
	///
	/// let no_tag = Id3ScanError::new(ErrorKind::NoTagPresent);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::error::{ErrorKind, Id3ScanError};
	///
	/// let no_tag = Id3ScanError::new(ErrorKind::NoTagPresent);
	/// if let ErrorKind::NoTagPresent = no_tag.kind() {
	/// 	println!("Nothing to see here");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for Id3ScanError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::SourceUnavailable(ref err) | ErrorKind::Io(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for Id3ScanError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<std::io::Error> for Id3ScanError {
	fn from(input: std::io::Error) -> Self {
		// `read_exact` and friends report a short read this way
		if input.kind() == std::io::ErrorKind::UnexpectedEof {
			return Self {
				kind: ErrorKind::EndOfStream,
			};
		}

		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl Display for Id3ScanError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::SourceUnavailable(ref err) => write!(f, "Unable to open source: {err}"),
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			ErrorKind::EndOfStream => write!(f, "Reached the end of the stream"),
			ErrorKind::InvalidOperation(message) => write!(f, "Invalid operation: {message}"),
			ErrorKind::FrameNotFound(ref id) => {
				write!(f, "ID3v2: Frame `{id}` not found within the scan window")
			},
			ErrorKind::NoTagPresent => write!(f, "No ID3v2 or ID3v1 tag present"),
			ErrorKind::BadFrameId(ref frame_id) => {
				write!(f, "ID3v2: Failed to parse a frame ID: 0x{frame_id:x?}")
			},
			ErrorKind::BadFrameLength => write!(
				f,
				"ID3v2: Frame isn't long enough to extract the necessary information"
			),
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to read an abnormally large amount of data"
			),
		}
	}
}
