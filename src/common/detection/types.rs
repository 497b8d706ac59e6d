//! Document kind enumeration.

use std::fmt;
use std::str::FromStr;

use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::common::error::Error;

/// Document kinds that can be classified and checked for protection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Microsoft Word Document (OLE2 format, .doc)
    Doc,
    /// Microsoft Word Document (OOXML format, .docx)
    Docx,
    /// Microsoft Excel Spreadsheet (OLE2 format, .xls)
    Xls,
    /// Microsoft Excel Spreadsheet (OOXML format, .xlsx)
    Xlsx,
    /// Microsoft PowerPoint Presentation (OLE2 format, .ppt)
    Ppt,
    /// Microsoft PowerPoint Presentation (OOXML format, .pptx)
    Pptx,
    /// Portable Document Format (.pdf)
    Pdf,
}

/// Static classification data for one kind.
#[derive(Debug)]
pub(crate) struct KindDescriptor {
    pub mime_types: &'static [&'static str],
    pub extension: &'static str,
}

const DOC: KindDescriptor = KindDescriptor {
    mime_types: &["application/msword", "application/x-msword"],
    extension: ".doc",
};
const DOCX: KindDescriptor = KindDescriptor {
    mime_types: &["application/vnd.openxmlformats-officedocument.wordprocessingml.document"],
    extension: ".docx",
};
const XLS: KindDescriptor = KindDescriptor {
    mime_types: &["application/vnd.ms-excel", "application/x-msexcel"],
    extension: ".xls",
};
const XLSX: KindDescriptor = KindDescriptor {
    mime_types: &["application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"],
    extension: ".xlsx",
};
const PPT: KindDescriptor = KindDescriptor {
    mime_types: &["application/vnd.ms-powerpoint", "application/mspowerpoint"],
    extension: ".ppt",
};
const PPTX: KindDescriptor = KindDescriptor {
    mime_types: &["application/vnd.openxmlformats-officedocument.presentationml.presentation"],
    extension: ".pptx",
};
const PDF: KindDescriptor = KindDescriptor {
    mime_types: &["application/pdf", "application/x-pdf"],
    extension: ".pdf",
};

// Keys are lowercase media type essences; must stay in sync with the descriptors above.
static KIND_BY_MEDIA_TYPE: phf::Map<&'static str, DocumentKind> = phf_map! {
    "application/msword" => DocumentKind::Doc,
    "application/x-msword" => DocumentKind::Doc,
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => DocumentKind::Docx,
    "application/vnd.ms-excel" => DocumentKind::Xls,
    "application/x-msexcel" => DocumentKind::Xls,
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => DocumentKind::Xlsx,
    "application/vnd.ms-powerpoint" => DocumentKind::Ppt,
    "application/mspowerpoint" => DocumentKind::Ppt,
    "application/vnd.openxmlformats-officedocument.presentationml.presentation" => DocumentKind::Pptx,
    "application/pdf" => DocumentKind::Pdf,
    "application/x-pdf" => DocumentKind::Pdf,
};

impl DocumentKind {
    /// Every kind, legacy formats before their OOXML successors.
    pub const ALL: [DocumentKind; 7] = [
        DocumentKind::Doc,
        DocumentKind::Docx,
        DocumentKind::Xls,
        DocumentKind::Xlsx,
        DocumentKind::Ppt,
        DocumentKind::Pptx,
        DocumentKind::Pdf,
    ];

    pub(crate) fn descriptor(self) -> &'static KindDescriptor {
        match self {
            DocumentKind::Doc => &DOC,
            DocumentKind::Docx => &DOCX,
            DocumentKind::Xls => &XLS,
            DocumentKind::Xlsx => &XLSX,
            DocumentKind::Ppt => &PPT,
            DocumentKind::Pptx => &PPTX,
            DocumentKind::Pdf => &PDF,
        }
    }

    /// Canonical media types registered for this kind.
    pub fn mime_types(self) -> &'static [&'static str] {
        self.descriptor().mime_types
    }

    /// Canonical file name extension, including the leading dot.
    pub fn extension(self) -> &'static str {
        self.descriptor().extension
    }

    /// Whether this kind is a ZIP-based OOXML package.
    pub fn is_ooxml(self) -> bool {
        matches!(
            self,
            DocumentKind::Docx | DocumentKind::Xlsx | DocumentKind::Pptx
        )
    }

    /// The legacy binary predecessor of an OOXML kind.
    ///
    /// A file named `.docx` may really be a renamed `.doc`; this is the kind
    /// whose scanner handles that case.
    pub fn legacy_sibling(self) -> Option<DocumentKind> {
        match self {
            DocumentKind::Docx => Some(DocumentKind::Doc),
            DocumentKind::Xlsx => Some(DocumentKind::Xls),
            DocumentKind::Pptx => Some(DocumentKind::Ppt),
            _ => None,
        }
    }

    /// Look up a kind by declared media type.
    ///
    /// Parameters such as `; charset=binary` are ignored and the comparison
    /// is ASCII case-insensitive.
    ///
    /// ```
    /// use litchi_guard::DocumentKind;
    ///
    /// assert_eq!(DocumentKind::from_media_type("Application/PDF"), Some(DocumentKind::Pdf));
    /// assert_eq!(DocumentKind::from_media_type("text/plain"), None);
    /// ```
    pub fn from_media_type(media_type: &str) -> Option<DocumentKind> {
        let essence = media_type_essence(media_type);
        if essence.is_empty() {
            return None;
        }
        KIND_BY_MEDIA_TYPE
            .get(essence.to_ascii_lowercase().as_str())
            .copied()
    }

    /// Look up a kind by the extension of a file name.
    ///
    /// ```
    /// use litchi_guard::DocumentKind;
    ///
    /// assert_eq!(DocumentKind::from_name("Budget.XLSX"), Some(DocumentKind::Xlsx));
    /// assert_eq!(DocumentKind::from_name("notes.txt"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<DocumentKind> {
        let lower = name.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| lower.ends_with(kind.extension()))
    }

    fn as_str(self) -> &'static str {
        &self.extension()[1..]
    }
}

/// Media type without parameters or surrounding whitespace.
pub(crate) fn media_type_essence(media_type: &str) -> &str {
    media_type
        .split_once(';')
        .map_or(media_type, |(essence, _)| essence)
        .trim()
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = Error;

    /// Parse `docx`, `.docx` or `DOCX`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed.strip_prefix('.').unwrap_or(trimmed);
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(bare))
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}
