//! Document classification utilities.
//!
//! This module decides which supported kind a document is, from the
//! metadata supplied with it, and sniffs whether a document that claims to
//! be OOXML really is a ZIP package.

// Submodule declarations
pub mod classify;
pub mod ooxml;
pub mod types;
pub mod utils;

// Re-exports
pub use classify::{detect_kind, is_kind};
pub use ooxml::is_ooxml;
pub use types::DocumentKind;
