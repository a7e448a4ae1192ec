use crate::util::{assert_fields, audio_data, id3v1_trailer, id3v2_header, latin1_frame, read};

use id3scan::config::ScanOptions;
use id3scan::error::ErrorKind;
use id3scan::id3::TagVersion;
use id3scan::read_from;
use std::io::Cursor;

fn with_trailer(mut data: Vec<u8>) -> Vec<u8> {
	data.extend(audio_data(256));
	data.extend(id3v1_trailer("V1 title", "V1 artist", "V1 album"));
	data
}

// TIT2 and TALB, with no TPE1
fn missing_artist() -> Vec<u8> {
	let mut data = id3v2_header(3);
	data.extend(latin1_frame(3, "TIT2", "Foo title"));
	data.extend(latin1_frame(3, "TALB", "Baz album"));
	data
}

fn assert_v1(data: Vec<u8>) {
	let fields = read(data).unwrap();

	// Nothing from the ID3v2 tag survives
	assert_eq!(fields.version(), TagVersion::V1);
	assert_fields(&fields, "V1 title", "V1 artist", "V1 album");
}

#[test_log::test]
fn missing_frame() {
	assert_v1(with_trailer(missing_artist()));
}

#[test_log::test]
fn missing_frame_without_trailer() {
	let err = read(missing_artist()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::NoTagPresent));
}

#[test_log::test]
fn fallback_disabled() {
	let err = read_from(
		Cursor::new(with_trailer(missing_artist())),
		ScanOptions::new().fallback_to_id3v1(false),
	)
	.unwrap_err();

	match err.kind() {
		ErrorKind::FrameNotFound(id) => assert_eq!(id.as_str(), "TPE1"),
		kind => panic!("unexpected error: {kind:?}"),
	}
}

#[test_log::test]
fn truncated_frame() {
	let mut data = id3v2_header(3);
	data.extend(latin1_frame(3, "TIT2", "Foo title"));
	data.extend(latin1_frame(3, "TPE1", "Bar artist"));
	// 1 MiB declared, far past the end of the source
	data.extend_from_slice(b"TALB\x00\x10\x00\x00\x00\x00\x00Baz");

	assert_v1(with_trailer(data));
}

#[test_log::test]
fn oversized_frame() {
	let mut data = id3v2_header(3);
	data.extend_from_slice(b"TIT2\x7F\xFF\xFF\xFF\x00\x00\x00Foo");

	assert_v1(with_trailer(data));
}

#[test_log::test]
fn zero_sized_frame() {
	let mut data = id3v2_header(3);
	data.extend_from_slice(b"TIT2\x00\x00\x00\x00\x00\x00");
	data.extend(latin1_frame(3, "TPE1", "Bar artist"));
	data.extend(latin1_frame(3, "TALB", "Baz album"));

	assert_v1(with_trailer(data));
}

#[test_log::test]
fn v22_ids_are_not_v23_ids() {
	// An ID3v2.3 header with ID3v2.2 frames
	let mut data = id3v2_header(3);
	data.extend(latin1_frame(2, "TT2", "Foo title"));
	data.extend(latin1_frame(2, "TP1", "Bar artist"));
	data.extend(latin1_frame(2, "TAL", "Baz album"));

	assert_v1(with_trailer(data));
}

#[test_log::test]
fn unknown_major_version() {
	let mut data = id3v2_header(5);
	data.extend(latin1_frame(4, "TIT2", "Foo title"));

	assert_v1(with_trailer(data));
}
