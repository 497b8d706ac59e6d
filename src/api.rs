//! Per-kind convenience functions.
//!
//! Every function here forwards to [`is_kind`] or
//! [`is_password_protected`] with a fixed [`DocumentKind`].

use crate::common::detection::{DocumentKind, is_kind};
use crate::common::error::Result;
use crate::common::source::ByteSource;
use crate::protection::is_password_protected;

macro_rules! kind_functions {
    ($($kind:ident => $is_kind:ident, $is_protected:ident;)*) => {
        $(
            #[doc = concat!("Check whether a source classifies as [`DocumentKind::", stringify!($kind), "`].")]
            #[inline]
            pub fn $is_kind<S: ByteSource>(source: &S, strict: bool) -> bool {
                is_kind(source, DocumentKind::$kind, strict)
            }

            #[doc = concat!("Check whether a [`DocumentKind::", stringify!($kind), "`] source is password protected.")]
            pub async fn $is_protected<S: ByteSource>(source: &S, strict: bool) -> Result<bool> {
                is_password_protected(source, DocumentKind::$kind, strict).await
            }
        )*
    };
}

kind_functions! {
    Doc => is_doc, is_doc_password_protected;
    Docx => is_docx, is_docx_password_protected;
    Xls => is_xls, is_xls_password_protected;
    Xlsx => is_xlsx, is_xlsx_password_protected;
    Ppt => is_ppt, is_ppt_password_protected;
    Pptx => is_pptx, is_pptx_password_protected;
    Pdf => is_pdf, is_pdf_password_protected;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::MemorySource;
    use crate::common::fixtures;

    #[tokio::test]
    async fn test_docx_functions() {
        let plain = MemorySource::new(fixtures::docx_package()).with_name("letter.docx");
        assert!(is_docx(&plain, false));
        assert!(!is_doc(&plain, false));
        assert!(!is_docx_password_protected(&plain, false).await.unwrap());

        let secret = MemorySource::new(fixtures::encrypted_envelope()).with_name("secret.docx");
        assert!(is_docx_password_protected(&secret, false).await.unwrap());
        assert!(!is_docx_password_protected(&secret, true).await.unwrap());
    }

    #[tokio::test]
    async fn test_pdf_functions() {
        let blank = MemorySource::new(Vec::new()).with_name("blank.pdf");
        assert!(is_pdf(&blank, false));
        assert!(!is_pdf(&blank, true));
        assert!(!is_pdf_password_protected(&blank, false).await.unwrap());
    }

    #[test]
    fn test_each_function_targets_its_kind() {
        let check: [(fn(&MemorySource, bool) -> bool, DocumentKind); 7] = [
            (is_doc, DocumentKind::Doc),
            (is_docx, DocumentKind::Docx),
            (is_xls, DocumentKind::Xls),
            (is_xlsx, DocumentKind::Xlsx),
            (is_ppt, DocumentKind::Ppt),
            (is_pptx, DocumentKind::Pptx),
            (is_pdf, DocumentKind::Pdf),
        ];
        for (function, kind) in check {
            for other in DocumentKind::ALL {
                let source = MemorySource::new(Vec::new()).with_media_type(other.mime_types()[0]);
                assert_eq!(function(&source, true), other == kind, "{kind} vs {other}");
            }
        }
    }
}
