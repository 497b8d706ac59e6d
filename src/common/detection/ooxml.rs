//! OOXML container sniffing.
//!
//! A file that classifies as `.docx`/`.xlsx`/`.pptx` by name or media type
//! may really be a renamed legacy OLE2 binary, or an encrypted package, which
//! Office stores inside an OLE2 envelope. Only the leading ZIP local file
//! header tells the two apart.

use crate::common::detection::utils::{ZIP_SIGNATURE, signature_matches};
use crate::common::error::Result;
use crate::common::source::ByteSource;

/// Check whether a source starts with the ZIP local file header magic.
///
/// Sources shorter than four bytes are not OOXML.
///
/// # Errors
///
/// Only fails if the source cannot be read.
pub async fn is_ooxml<S: ByteSource>(source: &S) -> Result<bool> {
    let header = source.read_prefix(ZIP_SIGNATURE.len()).await?;
    Ok(signature_matches(&header, ZIP_SIGNATURE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::MemorySource;

    #[tokio::test]
    async fn test_zip_magic() {
        let source = MemorySource::new(b"PK\x03\x04\x14\x00".to_vec());
        assert!(is_ooxml(&source).await.unwrap());
    }

    #[tokio::test]
    async fn test_ole2_and_empty_are_not_ooxml() {
        let ole = MemorySource::new(crate::ole::consts::MAGIC.to_vec());
        assert!(!is_ooxml(&ole).await.unwrap());
        assert!(!is_ooxml(&MemorySource::default()).await.unwrap());
        // An empty-archive end record is not a local file header.
        assert!(!is_ooxml(&MemorySource::new(b"PK\x05\x06".to_vec())).await.unwrap());
    }
}
