#![no_main]

use std::io::Cursor;

use id3scan::ByteCursor;
use id3scan::id3::v1::{ID3V1_FIELD_LEN, find_trailer, read_field};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
	let Ok(mut cursor) = ByteCursor::new(Cursor::new(data)) else {
		return;
	};

	if let Ok(true) = find_trailer(&mut cursor, 200) {
		let _ = read_field(&mut cursor, ID3V1_FIELD_LEN);
	}
});
