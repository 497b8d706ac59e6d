//! Byte sources that detection runs against.
//!
//! A [`ByteSource`] is an immutable handle onto a document: an optional file
//! name, a declared media type supplied by whoever handed the document over,
//! and async access to its bytes. Detection never mutates or caches a source,
//! so the same handle can be checked any number of times, concurrently.
//!
//! Two implementations are provided:
//!
//! - [`MemorySource`] wraps an already-received upload buffer.
//! - [`FileSource`] reads from a path on the local filesystem.
//!
//! # Examples
//!
//! ```
//! use litchi_guard::common::{ByteSource, MemorySource};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> litchi_guard::Result<()> {
//! let source = MemorySource::new(b"%PDF-1.7\n".to_vec())
//!     .with_name("report.pdf")
//!     .with_media_type("application/pdf");
//!
//! assert_eq!(source.size(), 9);
//! assert_eq!(&source.read_prefix(4).await?[..], b"%PDF");
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::ops::Range;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::io::AsyncReadExt;

use crate::common::error::Result;

/// Read-only access to a document's metadata and bytes.
///
/// `declared_media_type` is whatever the client or transport claimed and is
/// never verified; it may be empty. Reads past the end of the source return
/// the available bytes instead of failing, so a short or empty source simply
/// yields a short buffer.
pub trait ByteSource: Send + Sync {
    /// File name, if one was supplied.
    fn name(&self) -> Option<&str>;

    /// Declared media type, possibly empty.
    fn declared_media_type(&self) -> &str;

    /// Total size in bytes.
    fn size(&self) -> u64;

    /// Read at most `len` bytes from the start of the source.
    fn read_prefix(&self, len: usize) -> impl Future<Output = Result<Bytes>> + Send;

    /// Read the entire content.
    fn read_all(&self) -> impl Future<Output = Result<Bytes>> + Send;

    /// Decode a byte range (or the whole content) as UTF-8 text.
    ///
    /// Invalid sequences are replaced with U+FFFD. ASCII bytes always survive
    /// decoding unchanged, which is what the marker scanners rely on.
    fn read_text(&self, range: Option<Range<u64>>) -> impl Future<Output = Result<String>> + Send {
        async move {
            let data = match range {
                Some(range) if range.start == 0 => {
                    let len = usize::try_from(range.end).unwrap_or(usize::MAX);
                    self.read_prefix(len).await?
                },
                Some(range) => {
                    let all = self.read_all().await?;
                    let start = clamp_offset(range.start, all.len());
                    let end = clamp_offset(range.end, all.len()).max(start);
                    all.slice(start..end)
                },
                None => self.read_all().await?,
            };
            Ok(decode_text(&data))
        }
    }
}

/// Decode bytes with the WHATWG UTF-8 decoder.
pub fn decode_text(data: &[u8]) -> String {
    let (text, _) = encoding_rs::UTF_8.decode_without_bom_handling(data);
    text.into_owned()
}

#[inline]
fn clamp_offset(offset: u64, len: usize) -> usize {
    usize::try_from(offset).map_or(len, |offset| offset.min(len))
}

/// An in-memory document, typically an upload that has already been received.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    data: Bytes,
    name: Option<String>,
    media_type: String,
}

impl MemorySource {
    /// Create a source with no name and an empty declared media type.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            name: None,
            media_type: String::new(),
        }
    }

    /// Attach a file name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a declared media type.
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    /// The underlying bytes.
    pub fn data(&self) -> &Bytes {
        &self.data
    }
}

impl ByteSource for MemorySource {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn declared_media_type(&self) -> &str {
        &self.media_type
    }

    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    async fn read_prefix(&self, len: usize) -> Result<Bytes> {
        Ok(self.data.slice(..len.min(self.data.len())))
    }

    async fn read_all(&self) -> Result<Bytes> {
        Ok(self.data.clone())
    }
}

/// A document on the local filesystem.
///
/// The size is captured when the source is opened; every read reopens the
/// file, so nothing is held between calls.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: Option<String>,
    media_type: String,
    size: u64,
}

impl FileSource {
    /// Open a file source. The name is the final component of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file's metadata cannot
    /// be read.
    pub async fn open(path: impl AsRef<Path>, media_type: impl Into<String>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let metadata = tokio::fs::metadata(&path).await?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        Ok(Self {
            path,
            name,
            media_type: media_type.into(),
            size: metadata.len(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSource for FileSource {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn declared_media_type(&self) -> &str {
        &self.media_type
    }

    fn size(&self) -> u64 {
        self.size
    }

    async fn read_prefix(&self, len: usize) -> Result<Bytes> {
        let file = tokio::fs::File::open(&self.path).await?;
        let cap = len.min(usize::try_from(self.size).unwrap_or(usize::MAX));
        let mut buffer = Vec::with_capacity(cap);
        file.take(len as u64).read_to_end(&mut buffer).await?;
        Ok(Bytes::from(buffer))
    }

    async fn read_all(&self) -> Result<Bytes> {
        Ok(Bytes::from(tokio::fs::read(&self.path).await?))
    }
}
