//! Encryption marker scanning for OOXML packages.
//!
//! The package bytes are decoded as text and searched for the tokens that
//! name Office-standard encryption parts. Nothing is unzipped or parsed, so
//! the tokens are only seen where they appear verbatim in the raw bytes:
//! entry names in the local and central directory headers and the content
//! of stored parts. Third-party schemes using other names are not detected.

use aho_corasick::AhoCorasick;
use log::debug;
use once_cell::sync::Lazy;

use crate::common::error::Result;
use crate::common::source::ByteSource;

/// Tokens that mark an encrypted package.
pub const ENCRYPTION_MARKERS: [&str; 2] = ["Encryption", "EncryptedPackage"];

static MARKER_FINDER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(ENCRYPTION_MARKERS)
        .expect("Failed to build encryption marker finder")
});

/// Check whether text contains any encryption marker.
///
/// ```
/// use litchi_guard::ooxml::encryption::contains_encryption_marker;
///
/// assert!(contains_encryption_marker("PK..EncryptionInfo.."));
/// assert!(!contains_encryption_marker("word/document.xml"));
/// ```
#[inline]
pub fn contains_encryption_marker(text: &str) -> bool {
    MARKER_FINDER.is_match(text)
}

/// Check whether an OOXML package carries encryption markers.
///
/// The entire source is read.
///
/// # Errors
///
/// Only fails if the source cannot be read.
pub async fn is_package_protected<S: ByteSource>(source: &S) -> Result<bool> {
    let text = source.read_text(None).await?;

    match MARKER_FINDER.find(&text) {
        Some(found) => {
            debug!(
                "encryption marker {:?} at offset {}",
                ENCRYPTION_MARKERS[found.pattern().as_usize()],
                found.start()
            );
            Ok(true)
        },
        None => Ok(false),
    }
}
