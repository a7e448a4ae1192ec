use crate::util::{
	assert_fields, audio_data, id3v2_header, id3v2_tag, latin1_frame, read, temp_file, text_frame,
};

use id3scan::config::ScanOptions;
use id3scan::error::ErrorKind;
use id3scan::id3::TagVersion;
use id3scan::probe::Probe;
use id3scan::{read_from, read_from_path};
use std::io::{Cursor, Write as _};

#[test_log::test]
fn read_v22() {
	let mut data = id3v2_tag(2, "Foo title", "Bar artist", "Baz album");
	data.extend(audio_data(256));

	let fields = read(data).unwrap();
	assert_eq!(fields.version(), TagVersion::V22);
	assert_fields(&fields, "Foo title", "Bar artist", "Baz album");
}

#[test_log::test]
fn read_v23() {
	let mut data = id3v2_tag(3, "Foo title", "Bar artist", "Baz album");
	data.extend(audio_data(256));

	let fields = read(data).unwrap();
	assert_eq!(fields.version(), TagVersion::V23);
	assert_fields(&fields, "Foo title", "Bar artist", "Baz album");
}

#[test_log::test]
fn read_v24() {
	let mut data = id3v2_tag(4, "Foo title", "Bar artist", "Baz album");
	data.extend(audio_data(256));

	let fields = read(data).unwrap();
	assert_eq!(fields.version(), TagVersion::V24);
	assert_fields(&fields, "Foo title", "Bar artist", "Baz album");
}

#[test_log::test]
fn v24_synchsafe_frame_size() {
	// Large enough for the synchsafe and plain sizes to differ
	let title = "a".repeat(200);

	let mut data = id3v2_header(4);
	data.extend(latin1_frame(4, "TIT2", &title));
	data.extend(latin1_frame(4, "TPE1", "Bar artist"));
	data.extend(latin1_frame(4, "TALB", "Baz album"));

	let fields = read(data).unwrap();
	assert_fields(&fields, &title, "Bar artist", "Baz album");
}

#[test_log::test]
fn utf16_frames() {
	let mut utf16_title = vec![0xFF, 0xFE];
	for unit in "Foo title".encode_utf16() {
		utf16_title.extend_from_slice(&unit.to_le_bytes());
	}
	utf16_title.extend_from_slice(&[0, 0]);

	let mut utf8_album = "Baz álbum".as_bytes().to_vec();
	utf8_album.push(0);

	let mut data = id3v2_header(3);
	data.extend(text_frame(3, "TIT2", 1, &utf16_title));
	data.extend(latin1_frame(3, "TPE1", "Bar artist"));
	data.extend(text_frame(3, "TALB", 3, &utf8_album));

	let fields = read(data).unwrap();
	assert_fields(&fields, "Foo title", "Bar artist", "Baz álbum");
}

#[test_log::test]
fn frame_order_and_padding() {
	let mut data = id3v2_header(3);
	data.extend(latin1_frame(3, "TALB", "Baz album"));
	data.extend(latin1_frame(3, "TCON", "Qux genre"));
	data.extend(latin1_frame(3, "TPE1", "Bar artist"));
	data.extend(latin1_frame(3, "TIT2", "Foo title"));
	data.extend([0; 64]);
	data.extend(audio_data(64));

	let fields = read(data).unwrap();
	assert_fields(&fields, "Foo title", "Bar artist", "Baz album");
}

#[test_log::test]
fn empty_frame_text() {
	let mut data = id3v2_header(3);
	data.extend(text_frame(3, "TIT2", 0, &[]));
	data.extend(latin1_frame(3, "TPE1", ""));
	data.extend(latin1_frame(3, "TALB", "Baz album"));

	let fields = read(data).unwrap();
	assert_fields(&fields, "", "", "Baz album");
}

#[test_log::test]
fn frame_search_window() {
	let mut data = id3v2_header(3);
	data.extend([0; 2100]);
	data.extend(latin1_frame(3, "TIT2", "Foo title"));
	data.extend(latin1_frame(3, "TPE1", "Bar artist"));
	data.extend(latin1_frame(3, "TALB", "Baz album"));

	// Past the default window, with no ID3v1 tag to fall back to
	let err = read(data.clone()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::NoTagPresent));

	let fields = read_from(
		Cursor::new(data),
		ScanOptions::new().frame_search_window(4096),
	)
	.unwrap();
	assert_fields(&fields, "Foo title", "Bar artist", "Baz album");
}

#[test_log::test]
fn read_file() {
	let data = id3v2_tag(3, "Foo title", "Bar artist", "Baz album");
	let file = temp_file(&data);

	let fields = Probe::new(file).read().unwrap();
	assert_fields(&fields, "Foo title", "Bar artist", "Baz album");
}

#[test_log::test]
fn read_path() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(&id3v2_tag(4, "Foo title", "Bar artist", "Baz album"))
		.unwrap();
	file.flush().unwrap();

	let fields = read_from_path(file.path(), ScanOptions::new()).unwrap();
	assert_eq!(fields.version(), TagVersion::V24);
	assert_fields(&fields, "Foo title", "Bar artist", "Baz album");
}

#[test_log::test]
fn missing_path() {
	let dir = tempfile::tempdir().unwrap();

	let err = read_from_path(dir.path().join("missing.mp3"), ScanOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::SourceUnavailable(_)));
	assert!(std::error::Error::source(&err).is_some());
}
