//! Declared-metadata classification.
//!
//! Classification never reads document bytes. The declared media type is
//! checked first; when it does not match and the mode is not strict, the
//! file name extension is used as a fallback. Both signals are supplied by
//! the uploader and neither is verified here.

use crate::common::detection::types::{DocumentKind, media_type_essence};
use crate::common::source::ByteSource;

/// Check whether a source classifies as `kind`.
///
/// With `strict` set only the declared media type is trusted.
///
/// # Examples
///
/// ```
/// use litchi_guard::{DocumentKind, MemorySource, is_kind};
///
/// let upload = MemorySource::new(Vec::new()).with_name("Report.DOCX");
/// assert!(is_kind(&upload, DocumentKind::Docx, false));
/// assert!(!is_kind(&upload, DocumentKind::Docx, true));
/// assert!(!is_kind(&upload, DocumentKind::Doc, false));
/// ```
pub fn is_kind<S: ByteSource>(source: &S, kind: DocumentKind, strict: bool) -> bool {
    let descriptor = kind.descriptor();

    let essence = media_type_essence(source.declared_media_type());
    if descriptor
        .mime_types
        .iter()
        .any(|mime| mime.eq_ignore_ascii_case(essence))
    {
        return true;
    }

    if strict {
        return false;
    }

    source
        .name()
        .is_some_and(|name| name.to_ascii_lowercase().ends_with(descriptor.extension))
}

/// Find the kind a source classifies as.
///
/// A declared media type that names a supported kind wins over the file
/// name, so `report.pdf` declared as `application/msword` is a `Doc`.
pub fn detect_kind<S: ByteSource>(source: &S, strict: bool) -> Option<DocumentKind> {
    if let Some(kind) = DocumentKind::from_media_type(source.declared_media_type()) {
        return Some(kind);
    }
    if strict {
        return None;
    }
    source.name().and_then(DocumentKind::from_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::MemorySource;

    fn named(name: &str) -> MemorySource {
        MemorySource::new(Vec::new()).with_name(name)
    }

    #[test]
    fn test_media_type_match() {
        let source = MemorySource::new(Vec::new()).with_media_type("application/x-msword");
        assert!(is_kind(&source, DocumentKind::Doc, true));
        assert!(is_kind(&source, DocumentKind::Doc, false));
        assert!(!is_kind(&source, DocumentKind::Docx, false));
    }

    #[test]
    fn test_extension_fallback() {
        assert!(is_kind(&named("scan.PDF"), DocumentKind::Pdf, false));
        assert!(!is_kind(&named("scan.PDF"), DocumentKind::Pdf, true));
        assert!(!is_kind(&named("scan.pdf.txt"), DocumentKind::Pdf, false));
        assert!(!is_kind(&MemorySource::default(), DocumentKind::Pdf, false));
    }

    #[test]
    fn test_sibling_extensions_do_not_overlap() {
        let docx = named("letter.docx");
        assert!(is_kind(&docx, DocumentKind::Docx, false));
        assert!(!is_kind(&docx, DocumentKind::Doc, false));

        let xls = named("ledger.xls");
        assert!(is_kind(&xls, DocumentKind::Xls, false));
        assert!(!is_kind(&xls, DocumentKind::Xlsx, false));
    }

    #[test]
    fn test_genuine_docx_never_strict_doc() {
        let docx = named("letter.docx").with_media_type(DocumentKind::Docx.mime_types()[0]);
        assert!(is_kind(&docx, DocumentKind::Docx, true));
        assert!(!is_kind(&docx, DocumentKind::Doc, true));
    }

    #[test]
    fn test_generic_media_type_falls_back_to_name() {
        let source = named("deck.pptx").with_media_type("application/octet-stream");
        assert!(is_kind(&source, DocumentKind::Pptx, false));
        assert!(!is_kind(&source, DocumentKind::Pptx, true));
    }

    #[test]
    fn test_detect_kind() {
        assert_eq!(detect_kind(&named("deck.pptx"), false), Some(DocumentKind::Pptx));
        assert_eq!(detect_kind(&named("deck.pptx"), true), None);
        let mislabeled = named("report.pdf").with_media_type("application/msword");
        assert_eq!(detect_kind(&mislabeled, false), Some(DocumentKind::Doc));
        assert_eq!(detect_kind(&named("notes.md"), false), None);
    }
}
