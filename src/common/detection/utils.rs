//! Utility functions and constants for file format detection.

// Magic number signature of a ZIP local file header
pub const ZIP_SIGNATURE: &[u8] = &[0x50, 0x4B, 0x03, 0x04];

/// Check if a byte slice starts with a given signature.
#[inline]
pub fn signature_matches(data: &[u8], signature: &[u8]) -> bool {
    data.len() >= signature.len() && &data[..signature.len()] == signature
}

/// Helper function to find a pattern in a buffer.
#[inline]
pub fn find_in_buffer(buffer: &[u8], pattern: &[u8]) -> bool {
    memchr::memmem::find(buffer, pattern).is_some()
}
