//! Word binary (`.doc`) protection detection.
//!
//! The FibBase flags word carries `fEncrypted` as bit 8, i.e. bit 0 of the
//! byte at offset 0x0B. That is only visible when the FIB sits at the start
//! of the file. Inside a compound file the FIB lives at the start of the
//! `WordDocument` stream instead, and Office 2007+ envelopes move the whole
//! document into `EncryptedPackage`, so a clear flag falls back to checking
//! the compound directory for encryption streams.

use log::debug;

use crate::common::error::Result;
use crate::common::source::ByteSource;
use crate::ole::consts::{DOC_HEADER_WINDOW, FIB_ENCRYPTED_MASK, FIB_FLAGS_OFFSET};
use crate::ole::directory::{CompoundDirectory, has_encryption_stream};

/// Check the FIB encryption flag in a header buffer.
///
/// Returns `None` when the buffer is too short to hold the flag byte.
#[inline]
pub fn fib_encrypted_flag(header: &[u8]) -> Option<bool> {
    header
        .get(FIB_FLAGS_OFFSET)
        .map(|&flags| (flags & FIB_ENCRYPTED_MASK) != 0)
}

/// Check whether a legacy Word document is password protected.
///
/// A header shorter than the flag offset is not protected and the compound
/// directory is not consulted.
///
/// # Errors
///
/// Only fails if the source cannot be read.
pub async fn is_doc_protected<S, D>(source: &S, directory: &D) -> Result<bool>
where
    S: ByteSource,
    D: CompoundDirectory + ?Sized,
{
    let header = source.read_prefix(DOC_HEADER_WINDOW).await?;

    match fib_encrypted_flag(&header) {
        None => Ok(false),
        Some(true) => {
            debug!("FIB fEncrypted flag set");
            Ok(true)
        },
        Some(false) => has_encryption_stream(source, directory).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::MemorySource;
    use crate::common::error::Error;
    use crate::common::fixtures;
    use crate::ole::directory::CfbDirectory;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts how often the directory is consulted.
    #[derive(Default)]
    struct Counting(AtomicUsize);

    impl CompoundDirectory for Counting {
        fn entry_names(&self, _data: &[u8]) -> Result<Vec<String>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(Error::InvalidFormat("synthetic".to_string()))
        }
    }

    fn header_with_flags(flags: u8) -> Vec<u8> {
        // wIdent 0xA5EC, nFib 0x00C1, then flags at 0x0A..0x0C.
        let mut header = vec![0u8; 512];
        header[0..2].copy_from_slice(&[0xEC, 0xA5]);
        header[2..4].copy_from_slice(&[0xC1, 0x00]);
        header[FIB_FLAGS_OFFSET] = flags;
        header
    }

    #[test]
    fn test_flag_bit() {
        assert_eq!(fib_encrypted_flag(&header_with_flags(0x01)), Some(true));
        assert_eq!(fib_encrypted_flag(&header_with_flags(0x13)), Some(true));
        assert_eq!(fib_encrypted_flag(&header_with_flags(0x02)), Some(false));
        assert_eq!(fib_encrypted_flag(&[0u8; 11]), None);
        assert_eq!(fib_encrypted_flag(&[0u8; 12]), Some(false));
    }

    #[tokio::test]
    async fn test_fast_path_skips_directory() {
        let directory = Counting::default();
        let source = MemorySource::new(header_with_flags(0x01));
        assert!(is_doc_protected(&source, &directory).await.unwrap());
        assert_eq!(directory.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_short_header_skips_directory() {
        let directory = Counting::default();
        assert!(!is_doc_protected(&MemorySource::new(vec![0xFF; 11]), &directory).await.unwrap());
        assert!(!is_doc_protected(&MemorySource::default(), &directory).await.unwrap());
        assert_eq!(directory.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_clear_flag_falls_back_to_directory() {
        let directory = Counting::default();
        let source = MemorySource::new(header_with_flags(0x00));
        assert!(!is_doc_protected(&source, &directory).await.unwrap());
        assert_eq!(directory.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_compound_documents() {
        let plain = MemorySource::new(fixtures::compound_file(&[
            ("WordDocument", header_with_flags(0x00).as_slice()),
            ("1Table", &[0u8; 32]),
        ]));
        assert!(!is_doc_protected(&plain, &CfbDirectory).await.unwrap());

        let envelope = MemorySource::new(fixtures::encrypted_envelope());
        assert!(is_doc_protected(&envelope, &CfbDirectory).await.unwrap());
    }
}
