#![allow(missing_docs)]

use id3scan::error::ErrorKind;
use id3scan::prelude::*;
use id3scan::read_from_path;

use structopt::StructOpt;

use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, StructOpt)]
#[structopt(name = "tag_reader", about = "Print the title, artist, and album of ID3 tagged files")]
struct Opt {
	/// Report ID3v2 frame errors instead of reading the ID3v1 tag
	#[structopt(long)]
	no_fallback: bool,

	/// The number of bytes to scan for each ID3v2 frame
	#[structopt(long, default_value = "2000")]
	frame_window: u64,

	/// The number of positions to check for an ID3v1 tag
	#[structopt(long, default_value = "200")]
	trailer_window: u64,

	#[structopt(parse(from_os_str), required = true)]
	paths: Vec<PathBuf>,
}

fn display(fields: &TagFields) -> String {
	ItemKey::ALL
		.into_iter()
		.map(|key| match fields.get(key) {
			Some(value) => value.to_owned(),
			None => format!("{} not found", key.name()),
		})
		.collect::<Vec<_>>()
		.join(", ")
}

fn main() -> ExitCode {
	env_logger::init();

	let opt = Opt::from_args();
	let options = ScanOptions::new()
		.frame_search_window(opt.frame_window)
		.trailer_search_window(opt.trailer_window)
		.fallback_to_id3v1(!opt.no_fallback);

	let mut status = ExitCode::SUCCESS;
	for path in &opt.paths {
		match read_from_path(path, options) {
			Ok(fields) => println!("{}", display(&fields)),
			// Nothing to read, every field is missing
			Err(e) if matches!(e.kind(), ErrorKind::NoTagPresent) => {
				println!("{}", display(&TagFields::default()))
			},
			Err(e) => {
				eprintln!("ERROR: {}: {e}", path.display());
				status = ExitCode::FAILURE;
			},
		}
	}

	status
}
