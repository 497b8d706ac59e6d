//! Portable Document Format (PDF) protection detection.

/// Trailer scanning for `/Encrypt` dictionary references
pub mod trailer;

pub use trailer::{PDF_SCAN_WINDOW, has_encrypt_reference, is_pdf_protected};
