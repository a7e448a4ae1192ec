//! ID3v1 items
//!
//! # ID3v1 notes
//!
//! ID3v1 is a fixed 128 byte trailer, starting with `"TAG"`, followed by 30 byte title, artist,
//! and album fields.
//!
//! ## Padding
//!
//! Fields are padded with either spaces or nulls. Text after the first null is discarded, as is any
//! trailing space padding. A field made entirely of padding is read as an empty string.
pub(crate) mod constants;
mod read;

pub use constants::ID3V1_FIELD_LEN;
pub use read::{find_trailer, read_field};

pub(crate) use read::read_fields;
