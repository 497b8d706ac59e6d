//! Common types, traits, and utilities shared across formats.
//!
//! This module provides the byte source abstraction every check reads
//! through, document classification, and the unified error type.

// Submodule declarations
pub mod detection;
pub mod error;
pub mod source;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-exports for convenience
pub use detection::{DocumentKind, detect_kind, is_kind, is_ooxml};
pub use error::{Error, Result};
pub use source::{ByteSource, FileSource, MemorySource};
