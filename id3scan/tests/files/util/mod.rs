use id3scan::config::ScanOptions;
use id3scan::error::Result;
use id3scan::read_from;
use id3scan::tag::TagFields;
use std::fs::File;
use std::io::{Cursor, Seek as _, Write as _};

/// Some bytes standing in for audio data, containing no ID3 markers
pub fn audio_data(len: usize) -> Vec<u8> {
	(0..len).map(|i| [0xFF, 0xFB, 0x90, 0x64][i % 4]).collect()
}

/// Build an ID3v2 header for `major`, with a zeroed tag size
pub fn id3v2_header(major: u8) -> Vec<u8> {
	vec![b'I', b'D', b'3', major, 0, 0, 0, 0, 0, 0]
}

/// Encode `value` as a synchsafe integer
pub fn synchsafe(value: u32) -> [u8; 4] {
	assert!(value < 1 << 28);
	[
		((value >> 21) & 0x7F) as u8,
		((value >> 14) & 0x7F) as u8,
		((value >> 7) & 0x7F) as u8,
		(value & 0x7F) as u8,
	]
}

/// Build a text frame, with `body` being the already encoded text (excluding the encoding byte)
pub fn text_frame(major: u8, id: &str, encoding: u8, body: &[u8]) -> Vec<u8> {
	let size = body.len() as u32 + 1;

	let mut frame = id.as_bytes().to_vec();
	match major {
		2 => frame.extend_from_slice(&size.to_be_bytes()[1..]),
		3 => frame.extend_from_slice(&size.to_be_bytes()),
		4 => frame.extend_from_slice(&synchsafe(size)),
		_ => unreachable!(),
	}

	// Flags
	if major > 2 {
		frame.extend_from_slice(&[0, 0]);
	}

	frame.push(encoding);
	frame.extend_from_slice(body);
	frame
}

/// Build a Latin-1 text frame with a null terminator
pub fn latin1_frame(major: u8, id: &str, text: &str) -> Vec<u8> {
	let mut body = text.as_bytes().to_vec();
	body.push(0);
	text_frame(major, id, 0, &body)
}

/// Build a complete ID3v2 tag holding a title, artist, and album
pub fn id3v2_tag(major: u8, title: &str, artist: &str, album: &str) -> Vec<u8> {
	let ids: [&str; 3] = if major == 2 {
		["TT2", "TP1", "TAL"]
	} else {
		["TIT2", "TPE1", "TALB"]
	};

	let mut tag = id3v2_header(major);
	for (id, text) in ids.into_iter().zip([title, artist, album]) {
		tag.extend(latin1_frame(major, id, text));
	}

	tag
}

/// Pad or cut `text` to an ID3v1 field
pub fn id3v1_field(text: &str) -> Vec<u8> {
	let mut field = text.as_bytes().to_vec();
	field.resize(30, b' ');
	field
}

/// Build a 128 byte ID3v1 trailer
pub fn id3v1_trailer(title: &str, artist: &str, album: &str) -> Vec<u8> {
	let mut tag = b"TAG".to_vec();
	tag.extend(id3v1_field(title));
	tag.extend(id3v1_field(artist));
	tag.extend(id3v1_field(album));
	tag.resize(128, 0);
	tag
}

/// Read `data` with the default options
pub fn read(data: Vec<u8>) -> Result<TagFields> {
	read_from(Cursor::new(data), ScanOptions::new())
}

/// Write `data` into a new temporary file
pub fn temp_file(data: &[u8]) -> File {
	let mut file = tempfile::tempfile().unwrap();
	file.write_all(data).unwrap();
	file.rewind().unwrap();

	file
}

/// Check every field of `fields`
pub fn assert_fields(fields: &TagFields, title: &str, artist: &str, album: &str) {
	assert_eq!(fields.title(), Some(title));
	assert_eq!(fields.artist(), Some(artist));
	assert_eq!(fields.album(), Some(album));
}
