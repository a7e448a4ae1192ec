/// Options to control how id3scan searches a source
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ScanOptions {
	pub(crate) frame_search_window: u64,
	pub(crate) trailer_search_window: u64,
	pub(crate) max_frame_size: u32,
	pub(crate) fallback_to_id3v1: bool,
}

impl Default for ScanOptions {
	/// The default implementation for `ScanOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ScanOptions {
	/// 	frame_search_window: 2000,
	/// 	trailer_search_window: 200,
	/// 	max_frame_size: 16 * 1024 * 1024,
	/// 	fallback_to_id3v1: true,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ScanOptions {
	/// Default number of bytes to search for an ID3v2 frame
	pub const DEFAULT_FRAME_SEARCH_WINDOW: u64 = 2000;

	/// Default number of positions to search backwards for an ID3v1 trailer
	pub const DEFAULT_TRAILER_SEARCH_WINDOW: u64 = 200;

	/// Default upper bound for a single frame's declared size
	pub const DEFAULT_MAX_FRAME_SIZE: u32 = 16 * 1024 * 1024;

	/// Creates a new `ScanOptions`, alias for `Default` implementation
	///
	/// See also: [`ScanOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::ScanOptions;
	///
	/// let scan_options = ScanOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			frame_search_window: Self::DEFAULT_FRAME_SEARCH_WINDOW,
			trailer_search_window: Self::DEFAULT_TRAILER_SEARCH_WINDOW,
			max_frame_size: Self::DEFAULT_MAX_FRAME_SIZE,
			fallback_to_id3v1: true,
		}
	}

	/// The number of bytes to search for each ID3v2 frame before giving up
	///
	/// Every candidate offset within this many bytes of the search start is tested.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::ScanOptions;
	///
	/// // My tags have a lot of padding before the text frames
	/// let scan_options =
	/// 	ScanOptions::new().frame_search_window(ScanOptions::DEFAULT_FRAME_SEARCH_WINDOW * 4);
	/// ```
	pub fn frame_search_window(&mut self, frame_search_window: u64) -> Self {
		self.frame_search_window = frame_search_window;
		*self
	}

	/// The number of positions to step backwards from the end of the source
	/// while searching for an ID3v1 trailer
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::ScanOptions;
	///
	/// // Never look before the canonical position, 128 bytes from the end
	/// let scan_options = ScanOptions::new().trailer_search_window(126);
	/// ```
	pub fn trailer_search_window(&mut self, trailer_search_window: u64) -> Self {
		self.trailer_search_window = trailer_search_window;
		*self
	}

	/// The largest declared frame size that will be read
	///
	/// Frames declaring a larger size are treated as malformed.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::ScanOptions;
	///
	/// // Text frames are tiny, anything over 64KiB is garbage
	/// let scan_options = ScanOptions::new().max_frame_size(64 * 1024);
	/// ```
	pub fn max_frame_size(&mut self, max_frame_size: u32) -> Self {
		self.max_frame_size = max_frame_size;
		*self
	}

	/// Whether a failed ID3v2 extraction should fall back to the ID3v1 trailer
	///
	/// If any of the title, artist, or album frames can't be read, the entire ID3v2 attempt
	/// is discarded. When this is disabled, the frame error is returned instead.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::ScanOptions;
	///
	/// // I only care about ID3v2
	/// let scan_options = ScanOptions::new().fallback_to_id3v1(false);
	/// ```
	pub fn fallback_to_id3v1(&mut self, fallback_to_id3v1: bool) -> Self {
		self.fallback_to_id3v1 = fallback_to_id3v1;
		*self
	}
}
