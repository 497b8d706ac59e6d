//! Compound file directory scanning.
//!
//! Office 2007+ documents saved with a password are not ZIP packages: the
//! OOXML package is encrypted and wrapped in an OLE2 compound file
//! (CDFV2-Encrypted) whose root holds an `EncryptionInfo` and an
//! `EncryptedPackage` stream. Legacy `.doc` files encrypted with RC4
//! CryptoAPI may carry the same streams.
//!
//! Parsing the compound file itself is delegated to a [`CompoundDirectory`]
//! implementation; by default [`CfbDirectory`], backed by the `cfb` crate.

use std::io::Cursor;

use log::debug;

use crate::common::error::{Error, Result};
use crate::common::source::ByteSource;
use crate::ole::consts::ENCRYPTION_STREAMS;

/// Lists the entry names of a compound file.
///
/// This is the only thing protection detection needs from a compound file
/// parser. Implementations return [`Error::InvalidFormat`] when the bytes are
/// not a readable compound file.
pub trait CompoundDirectory: Send + Sync {
    /// Names of every storage and stream in the compound file.
    fn entry_names(&self, data: &[u8]) -> Result<Vec<String>>;
}

/// [`CompoundDirectory`] backed by the `cfb` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CfbDirectory;

impl CompoundDirectory for CfbDirectory {
    fn entry_names(&self, data: &[u8]) -> Result<Vec<String>> {
        let compound = cfb::CompoundFile::open(Cursor::new(data))
            .map_err(|e| Error::InvalidFormat(format!("not a compound file: {e}")))?;

        Ok(compound
            .walk()
            .map(|entry| entry.name().to_string())
            .collect())
    }
}

/// Check whether any entry name marks an encryption envelope.
pub fn contains_encryption_stream<I, N>(names: I) -> bool
where
    I: IntoIterator<Item = N>,
    N: AsRef<str>,
{
    names
        .into_iter()
        .any(|name| ENCRYPTION_STREAMS.contains(&name.as_ref()))
}

/// Check whether a source is a compound file carrying encryption streams.
///
/// The whole source is read. Bytes the directory parser rejects resolve to
/// `false`.
///
/// # Errors
///
/// Only fails if the source cannot be read.
pub async fn has_encryption_stream<S, D>(source: &S, directory: &D) -> Result<bool>
where
    S: ByteSource,
    D: CompoundDirectory + ?Sized,
{
    let data = source.read_all().await?;

    match directory.entry_names(&data) {
        Ok(names) => {
            let found = contains_encryption_stream(&names);
            if found {
                debug!("compound file carries an encryption stream");
            }
            Ok(found)
        },
        Err(e) => {
            debug!("compound directory unreadable, assuming unprotected: {e}");
            Ok(false)
        },
    }
}
