//! Unified error types for litchi-guard.
//!
//! Detection itself only ever fails with [`Error::Io`]: malformed or truncated
//! documents resolve to "not protected" instead of surfacing an error.
use thiserror::Error;

/// Main error type for litchi-guard operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading the underlying byte source failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Container bytes do not follow the expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A document kind name or extension was not recognized
    #[error("Unknown document kind: {0}")]
    UnknownKind(String),
}

/// Result type for litchi-guard operations.
pub type Result<T> = std::result::Result<T, Error>;
