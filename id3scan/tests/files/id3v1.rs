use crate::util::{assert_fields, audio_data, id3v1_field, id3v1_trailer, read};

use id3scan::config::ScanOptions;
use id3scan::error::ErrorKind;
use id3scan::id3::TagVersion;
use id3scan::read_from;
use std::io::Cursor;

#[test_log::test]
fn read_trailer() {
	let mut data = audio_data(1024);
	data.extend(id3v1_trailer("Foo title", "Bar artist", "Baz album"));

	let fields = read(data).unwrap();
	assert_eq!(fields.version(), TagVersion::V1);
	assert_fields(&fields, "Foo title", "Bar artist", "Baz album");
}

#[test_log::test]
fn trailer_only() {
	let fields = read(id3v1_trailer("Foo title", "Bar artist", "Baz album")).unwrap();
	assert_fields(&fields, "Foo title", "Bar artist", "Baz album");
}

#[test_log::test]
fn blank_fields() {
	let mut data = audio_data(16);
	data.extend(id3v1_trailer("", "   ", "Baz album"));

	let fields = read(data).unwrap();
	assert_fields(&fields, "", "", "Baz album");
}

#[test_log::test]
fn latin1_fields() {
	let mut data = b"TAG".to_vec();
	let mut title = id3v1_field("");
	title[..4].copy_from_slice(b"Caf\xE9");
	data.extend(title);
	data.extend(id3v1_field("Bar artist"));
	data.extend(id3v1_field("Baz album"));
	data.resize(128, 0);

	let fields = read(data).unwrap();
	assert_eq!(fields.title(), Some("Café"));
}

#[test_log::test]
fn trailing_junk() {
	let mut data = audio_data(512);
	data.extend(id3v1_trailer("Foo title", "Bar artist", "Baz album"));
	data.extend(audio_data(20));

	let fields = read(data).unwrap();
	assert_fields(&fields, "Foo title", "Bar artist", "Baz album");
}

#[test_log::test]
fn trailer_search_window() {
	let mut data = audio_data(512);
	data.extend(id3v1_trailer("Foo title", "Bar artist", "Baz album"));
	data.extend(audio_data(100));

	let err = read(data.clone()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::NoTagPresent));

	let fields = read_from(
		Cursor::new(data),
		ScanOptions::new().trailer_search_window(300),
	)
	.unwrap();
	assert_fields(&fields, "Foo title", "Bar artist", "Baz album");
}

#[test_log::test]
fn no_tag() {
	let err = read(audio_data(4096)).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::NoTagPresent));
}

#[test_log::test]
fn tiny_sources() {
	let sources: [&[u8]; 5] = [b"", b"T", b"TA", b"ID", b"ID3"];
	for data in sources {
		let err = read(data.to_vec()).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::NoTagPresent));
	}
}
