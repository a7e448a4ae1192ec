//! Tag extraction from arbitrary sources

use crate::config::ScanOptions;
use crate::error::{ErrorKind, Id3ScanError, Result};
use crate::id3::{TagVersion, detect_version, v1, v2};
use crate::tag::TagFields;
use crate::util::cursor::ByteCursor;

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// A tag reader for any seekable source
///
/// ## Usage
///
/// ```rust,no_run
/// # fn main() -> id3scan::error::Result<()> {
/// use id3scan::probe::Probe;
///
/// let fields = Probe::open("path/to/my.mp3")?.read()?;
///
/// println!("{:?}", fields.title());
/// # Ok(())
/// # }
/// ```
///
/// With custom [`ScanOptions`]:
///
/// ```rust
/// # fn main() -> id3scan::error::Result<()> {
/// use id3scan::config::ScanOptions;
/// use id3scan::probe::Probe;
/// use std::io::Cursor;
///
/// # let tag = {
/// # 	let mut tag = b"TAG".to_vec();
/// # 	tag.resize(128, b' ');
/// # 	tag
/// # };
/// let probe = Probe::new(Cursor::new(tag)).options(ScanOptions::new().trailer_search_window(10));
///
/// let fields = probe.read()?;
/// assert_eq!(fields.title(), Some(""));
/// # Ok(())
/// # }
/// ```
pub struct Probe<R: Read> {
	inner: R,
	options: Option<ScanOptions>,
}

impl<R: Read> Probe<R> {
	/// Create a new `Probe`
	///
	/// Before creating a `Probe`, consider wrapping it in a [`BufReader`] for better
	/// performance. The source is always read from its start, regardless of its current position.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::probe::Probe;
	/// use std::io::Cursor;
	///
	/// let probe = Probe::new(Cursor::new(Vec::<u8>::new()));
	/// ```
	#[must_use]
	pub const fn new(reader: R) -> Self {
		Self {
			inner: reader,
			options: None,
		}
	}

	/// Set the [`ScanOptions`] for the Probe
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::ScanOptions;
	/// use id3scan::probe::Probe;
	/// use std::io::Cursor;
	///
	/// // Report frame errors instead of looking for an ID3v1 tag
	/// let probe = Probe::new(Cursor::new(Vec::<u8>::new())).options(ScanOptions::new().fallback_to_id3v1(false));
	/// ```
	#[must_use]
	pub fn options(mut self, options: ScanOptions) -> Self {
		self.options = Some(options);
		self
	}

	/// Extract the reader
	pub fn into_inner(self) -> R {
		self.inner
	}
}

impl Probe<BufReader<File>> {
	/// Opens a file for reading
	///
	/// # Errors
	///
	/// * The file could not be opened ([`ErrorKind::SourceUnavailable`])
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// use id3scan::probe::Probe;
	///
	/// # fn main() -> id3scan::error::Result<()> {
	/// let probe = Probe::open("path/to/my.mp3")?;
	/// # Ok(()) }
	/// ```
	pub fn open<P>(path: P) -> Result<Self>
	where
		P: AsRef<Path>,
	{
		let path = path.as_ref();
		log::debug!("Probe: Opening `{}` for reading", path.display());

		let file = File::open(path)
			.map_err(|e| Id3ScanError::new(ErrorKind::SourceUnavailable(e)))?;

		Ok(Self::new(BufReader::new(file)))
	}
}

impl<R: Read + Seek> Probe<R> {
	/// Attempts to get the [`TagVersion`] of the source
	///
	/// See [`detect_version`] for how the source is classified.
	///
	/// # Errors
	///
	/// * [`std::io::Error`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::TagVersion;
	/// use id3scan::probe::Probe;
	/// use std::io::Cursor;
	///
	/// # fn main() -> id3scan::error::Result<()> {
	/// let probe = Probe::new(Cursor::new(b"ID3\x03\x00"));
	/// assert_eq!(probe.detect_version()?, TagVersion::V23);
	/// # Ok(()) }
	/// ```
	pub fn detect_version(self) -> Result<TagVersion> {
		let mut cursor = ByteCursor::new(self.inner)?;
		detect_version(&mut cursor)
	}

	/// Attempts to extract the title, artist, and album from the source
	///
	/// ID3v2 tags are read all-or-nothing. If any of the three frames can't be read because of
	/// an error that only concerns that frame, such as a missing or truncated frame, the ID3v2 values are
	/// discarded and the ID3v1 trailer is read instead. See [`ScanOptions::fallback_to_id3v1`].
	///
	/// # Errors
	///
	/// * No ID3v2 tag could be read, and there is no ID3v1 tag ([`ErrorKind::NoTagPresent`])
	/// * A frame-level error, with [`ScanOptions::fallback_to_id3v1`] disabled
	/// * [`std::io::Error`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::TagVersion;
	/// use id3scan::probe::Probe;
	/// use std::io::Cursor;
	///
	/// # fn main() -> id3scan::error::Result<()> {
	/// let mut tag = b"TAG".to_vec();
	/// tag.extend_from_slice(b"Foo title");
	/// tag.resize(128, 0);
	///
	/// let fields = Probe::new(Cursor::new(tag)).read()?;
	///
	/// assert_eq!(fields.version(), TagVersion::V1);
	/// assert_eq!(fields.title(), Some("Foo title"));
	/// # Ok(()) }
	/// ```
	pub fn read(self) -> Result<TagFields> {
		let options = self.options.unwrap_or_default();
		let mut cursor = ByteCursor::new(self.inner)?;

		let version = detect_version(&mut cursor)?;
		let Some(id3v2_version) = version.id3v2_version() else {
			return v1::read_fields(&mut cursor, options);
		};

		match v2::read_fields(&mut cursor, id3v2_version, options) {
			Ok(fields) => Ok(fields),
			Err(e) if e.kind().is_frame_level() && options.fallback_to_id3v1 => {
				log::warn!("Unable to read the ID3v2 tag ({e}), falling back to ID3v1");

				cursor.seek(SeekFrom::Start(0))?;
				v1::read_fields(&mut cursor, options)
			},
			Err(e) => Err(e),
		}
	}
}

/// Read the tag fields from a reader
///
/// This is equivalent to `Probe::new(reader).options(options).read()`.
///
/// # Errors
///
/// See [`Probe::read`]
///
/// # Examples
///
/// ```rust
/// use id3scan::config::ScanOptions;
/// use id3scan::error::ErrorKind;
/// use id3scan::read_from;
/// use std::io::Cursor;
///
/// let err = read_from(Cursor::new(b"ID"), ScanOptions::new()).unwrap_err();
/// assert!(matches!(err.kind(), ErrorKind::NoTagPresent));
/// ```
pub fn read_from<R>(reader: R, options: ScanOptions) -> Result<TagFields>
where
	R: Read + Seek,
{
	Probe::new(reader).options(options).read()
}

/// Read the tag fields from a path
///
/// # Errors
///
/// * The path could not be opened ([`ErrorKind::SourceUnavailable`])
/// * See [`Probe::read`]
///
/// # Examples
///
/// ```rust,no_run
/// use id3scan::config::ScanOptions;
/// use id3scan::read_from_path;
///
/// # fn main() -> id3scan::error::Result<()> {
/// let fields = read_from_path("tests/files/assets/a.mp3", ScanOptions::new())?;
/// # Ok(()) }
/// ```
pub fn read_from_path<P>(path: P, options: ScanOptions) -> Result<TagFields>
where
	P: AsRef<Path>,
{
	Probe::open(path)?.options(options).read()
}
