#![allow(missing_docs)]

mod fallback;
mod id3v1;
mod id3v2;
pub(crate) mod util;
