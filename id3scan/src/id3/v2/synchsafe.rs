//! Utilities for working with synchsafe integers
//!
//! ID3v2.4 frame sizes are stored as 28-bit integers spread over 4 bytes, with the most significant
//! bit of each byte unset.

/// Decode a synchsafe integer
///
/// # Examples
///
/// ```rust
/// use id3scan::id3::v2::synchsafe::unsynch_u32;
///
/// // 0x7F is the largest value that fits in the lowest byte
/// assert_eq!(unsynch_u32(0x0000_007F), 0x7F);
/// // Each byte only contributes 7 bits
/// assert_eq!(unsynch_u32(0x0000_0100), 0x80);
/// assert_eq!(unsynch_u32(0x7F7F_7F7F), 0xFFF_FFFF);
/// ```
pub fn unsynch_u32(n: u32) -> u32 {
	(n & 0xFF) | ((n & 0xFF00) >> 1) | ((n & 0xFF_0000) >> 2) | ((n & 0xFF00_0000) >> 3)
}
