//! Unified error types for litchi-guard.
//!
//! This module provides the single error type shared by the byte sources,
//! the compound file collaborator and the protection scanners.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
