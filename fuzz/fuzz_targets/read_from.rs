#![no_main]

use std::io::Cursor;

use id3scan::config::ScanOptions;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
	let _ = id3scan::read_from(Cursor::new(data), ScanOptions::new());
});
