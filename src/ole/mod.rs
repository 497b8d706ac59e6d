/// Constants for legacy Office binary formats
pub mod consts;

/// Compound file (OLE2) directory scanning for encryption envelopes
pub mod directory;

/// BIFF FilePass marker scanning for legacy Excel and PowerPoint files
pub mod biff;

/// File Information Block checks for legacy Word documents
pub mod fib;

// Re-export public types for convenient access
pub use directory::{CfbDirectory, CompoundDirectory};
