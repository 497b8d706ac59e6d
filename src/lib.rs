//! litchi-guard - classify Office and PDF uploads and detect password protection
//!
//! Upload pipelines often need to reject or flag protected documents before
//! handing them to a parser. This crate answers two questions about an
//! untrusted document:
//!
//! - **Which kind is it?** Legacy Word/Excel/PowerPoint (`.doc`, `.xls`,
//!   `.ppt`), their OOXML successors (`.docx`, `.xlsx`, `.pptx`) or PDF,
//!   decided from the declared media type with a file name fallback.
//! - **Is it password protected?** Decided by format-specific byte
//!   inspection of OLE2 compound files, BIFF records, OOXML packages and PDF
//!   trailers.
//!
//! Detection is conservative: anything undecidable (truncated headers,
//! corrupt containers, empty files) is reported as *not* protected. The only
//! error a check returns is a failure to read the source.
//!
//! # Example - Checking an upload
//!
//! ```
//! use litchi_guard::{MemorySource, is_docx, is_docx_password_protected};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> litchi_guard::Result<()> {
//! let upload = MemorySource::new(Vec::new())
//!     .with_name("contract.docx")
//!     .with_media_type("application/octet-stream");
//!
//! if is_docx(&upload, false) && is_docx_password_protected(&upload, false).await? {
//!     println!("rejecting protected document");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Files on disk
//!
//! ```no_run
//! use litchi_guard::{DetectOptions, FileSource, ProtectionDetector};
//!
//! # #[tokio::main]
//! # async fn main() -> litchi_guard::Result<()> {
//! let source = FileSource::open("quarterly.xls", "").await?;
//! if let Some(report) = ProtectionDetector::new().check(&source, DetectOptions::default()).await? {
//!     println!("{}: protected = {}", report.kind, report.protected);
//! }
//! # Ok(())
//! # }
//! ```

/// Per-kind convenience functions (`is_docx`, `is_pdf_password_protected`, ...)
pub mod api;

/// Byte sources, classification and errors shared by every format
pub mod common;

/// Legacy OLE2 binary formats (.doc, .xls, .ppt)
pub mod ole;

/// OOXML packages (.docx, .xlsx, .pptx)
pub mod ooxml;

/// Portable Document Format
pub mod pdf;

/// Protection detection dispatch
pub mod protection;

// Re-export commonly used types for convenience
pub use api::*;
pub use common::{
    ByteSource, DocumentKind, Error, FileSource, MemorySource, Result, detect_kind, is_kind,
};
pub use protection::{DetectOptions, ProtectionDetector, Report, is_password_protected};
