//! Read the title, artist, and album from ID3 tagged audio files.
//!
//! ID3v1 trailers and ID3v2.2, ID3v2.3, and ID3v2.4 headers are supported. When an ID3v2 tag is present,
//! but one of its frames can't be read, the ID3v1 trailer is used instead.
//!
//! # Examples
//!
//! ## Using a path
//!
//! ```rust,no_run
//! # fn main() -> id3scan::error::Result<()> {
//! use id3scan::config::ScanOptions;
//! use id3scan::read_from_path;
//!
//! let fields = read_from_path("test.mp3", ScanOptions::new())?;
//!
//! println!("Title: {:?}", fields.title());
//! println!("Artist: {:?}", fields.artist());
//! println!("Album: {:?}", fields.album());
//! # Ok(())
//! # }
//! ```
//!
//! ## Using an existing reader
//!
//! ```rust
//! # fn main() -> id3scan::error::Result<()> {
//! use id3scan::config::ScanOptions;
//! use id3scan::id3::TagVersion;
//! use id3scan::read_from;
//! use std::io::Cursor;
//!
//! // An ID3v2.2 tag, with 3 character frame IDs and 3 byte frame sizes
//! let mut tag = b"ID3\x02\x00\x00\x00\x00\x00\x00".to_vec();
//! tag.extend_from_slice(b"TT2\x00\x00\x0A\x00Foo title");
//! tag.extend_from_slice(b"TP1\x00\x00\x0B\x00Bar artist");
//! tag.extend_from_slice(b"TAL\x00\x00\x0A\x00Baz album");
//!
//! let fields = read_from(Cursor::new(tag), ScanOptions::new())?;
//!
//! assert_eq!(fields.version(), TagVersion::V22);
//! assert_eq!(fields.title(), Some("Foo title"));
//! assert_eq!(fields.artist(), Some("Bar artist"));
//! assert_eq!(fields.album(), Some("Baz album"));
//! # Ok(())
//! # }
//! ```
//!
//! # Important format-specific notes
//!
//! Frames are found by scanning for their identifiers, see the [`id3::v2`] module documentation.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod config;
pub mod error;
pub mod id3;
pub(crate) mod macros;
pub mod probe;
pub mod tag;
mod util;

pub use crate::probe::{read_from, read_from_path};

pub use util::cursor::ByteCursor;
pub use util::text::TextEncoding;

pub mod prelude {
	//! A prelude for commonly used items in the library.
	//!
	//! This module is intended to be wildcard imported.
	//!
	//! ```rust
	//! use id3scan::prelude::*;
	//! ```

	pub use crate::config::ScanOptions;
	pub use crate::id3::TagVersion;
	pub use crate::probe::Probe;
	pub use crate::tag::{ItemKey, TagFields};
}
