//! Office Open XML (OOXML) protection detection.
//!
//! Word (.docx), Excel (.xlsx) and PowerPoint (.pptx) packages are ZIP
//! archives. Whether a file really is one is decided by
//! [`is_ooxml`](crate::common::detection::is_ooxml); this module scans
//! packages for encryption markers.

pub mod encryption;

pub use encryption::{contains_encryption_marker, is_package_protected};
