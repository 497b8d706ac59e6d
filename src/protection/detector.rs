//! Per-kind dispatch of protection scanners.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::common::detection::{DocumentKind, detect_kind, is_ooxml};
use crate::common::error::Result;
use crate::common::source::ByteSource;
use crate::ole::directory::{CfbDirectory, CompoundDirectory};
use crate::ole::{biff, fib};
use crate::ooxml::encryption;
use crate::pdf::trailer;

/// Options shared by classification and protection checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectOptions {
    /// Trust only the declared media type, and never treat a file that
    /// claims to be OOXML as a renamed legacy binary.
    pub strict: bool,
}

impl DetectOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Outcome of [`ProtectionDetector::check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Kind the source classified as
    pub kind: DocumentKind,
    /// Whether the scanners for that kind found protection
    pub protected: bool,
}

/// Chooses and runs the protection scanners for a document kind.
///
/// The detector holds no state besides its compound directory parser, so a
/// single instance can serve any number of concurrent checks.
///
/// # Examples
///
/// ```
/// use litchi_guard::{DocumentKind, MemorySource, ProtectionDetector};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> litchi_guard::Result<()> {
/// let pdf = MemorySource::new(b"%PDF-1.4\ntrailer << /Encrypt 4 0 R >>".to_vec())
///     .with_name("statement.pdf");
///
/// let detector = ProtectionDetector::new();
/// assert!(detector.is_password_protected(&pdf, DocumentKind::Pdf, false).await?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProtectionDetector<D = CfbDirectory> {
    directory: D,
}

impl ProtectionDetector {
    /// Create a detector that parses compound files with the `cfb` crate.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: CompoundDirectory> ProtectionDetector<D> {
    /// Create a detector with a custom compound directory parser.
    pub fn with_directory(directory: D) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Check whether a source of the given kind is password protected.
    ///
    /// For OOXML kinds in non-strict mode, a source that is not a ZIP
    /// package is checked with the scanner of its legacy sibling, since it
    /// is most likely a renamed `.doc`/`.xls`/`.ppt` or an encrypted package
    /// in its OLE2 envelope. `strict` has no effect on the other kinds.
    ///
    /// # Errors
    ///
    /// Only fails if the source cannot be read; undecidable input is
    /// reported as not protected.
    pub async fn is_password_protected<S: ByteSource>(
        &self,
        source: &S,
        kind: DocumentKind,
        strict: bool,
    ) -> Result<bool> {
        match kind {
            DocumentKind::Doc | DocumentKind::Xls | DocumentKind::Ppt => {
                self.scan_legacy(source, kind).await
            },
            DocumentKind::Docx | DocumentKind::Xlsx | DocumentKind::Pptx => {
                if !strict
                    && !is_ooxml(source).await?
                    && let Some(legacy) = kind.legacy_sibling()
                {
                    debug!("{kind} source is not a ZIP package, scanning as {legacy}");
                    return self.scan_legacy(source, legacy).await;
                }
                encryption::is_package_protected(source).await
            },
            DocumentKind::Pdf => trailer::is_pdf_protected(source).await,
        }
    }

    /// Classify a source and check it for protection in one call.
    ///
    /// Returns `None` when the source does not classify as any supported
    /// kind.
    pub async fn check<S: ByteSource>(
        &self,
        source: &S,
        options: DetectOptions,
    ) -> Result<Option<Report>> {
        let Some(kind) = detect_kind(source, options.strict) else {
            debug!("source {:?} matches no supported kind", source.name());
            return Ok(None);
        };

        let protected = self
            .is_password_protected(source, kind, options.strict)
            .await?;
        Ok(Some(Report { kind, protected }))
    }

    async fn scan_legacy<S: ByteSource>(&self, source: &S, kind: DocumentKind) -> Result<bool> {
        match kind {
            DocumentKind::Doc => fib::is_doc_protected(source, &self.directory).await,
            DocumentKind::Xls => biff::is_xls_protected(source).await,
            DocumentKind::Ppt => biff::is_ppt_protected(source).await,
            _ => Ok(false),
        }
    }
}
