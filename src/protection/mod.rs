//! Password protection detection.
//!
//! Each document kind has its own heuristic, chosen to never flag a genuine
//! unprotected file:
//!
//! | Kind | Check |
//! |---|---|
//! | `.doc` | FIB `fEncrypted` flag, then compound file encryption streams |
//! | `.xls` | FilePass record id in the first 1024 bytes |
//! | `.ppt` | FilePass record id in the first 512 bytes |
//! | `.docx`, `.xlsx`, `.pptx` | encryption markers in the package bytes |
//! | `.pdf` | dictionary-scoped `/Encrypt` reference in the first 8192 bytes |
//!
//! In non-strict mode an OOXML kind whose bytes are not a ZIP package is
//! checked as its legacy sibling instead.

pub mod detector;

pub use detector::{DetectOptions, ProtectionDetector, Report};

use crate::common::detection::DocumentKind;
use crate::common::error::Result;
use crate::common::source::ByteSource;

/// Check whether a source of the given kind is password protected, using
/// the default detector.
///
/// # Errors
///
/// Only fails if the source cannot be read.
pub async fn is_password_protected<S: ByteSource>(
    source: &S,
    kind: DocumentKind,
    strict: bool,
) -> Result<bool> {
    ProtectionDetector::new()
        .is_password_protected(source, kind, strict)
        .await
}
