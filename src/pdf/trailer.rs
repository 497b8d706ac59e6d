//! PDF encryption dictionary detection.
//!
//! An encrypted PDF references its encryption dictionary from the trailer
//! (or, for cross-reference streams, from the stream dictionary) as
//! `/Encrypt <obj> <gen> R`. Only the head of the file is scanned, which
//! covers freshly exported and linearized documents whose first trailer sits
//! near the start.
//!
//! The scan is a small lexer rather than a text search: a `/Encrypt` entry
//! only counts inside a `<< … >>` dictionary that is closed within the
//! window. Comments, literal strings, hex strings and stream bodies are
//! skipped, so the marker appearing as free text never matches.

use log::{debug, trace};
use memchr::{memchr, memchr2, memmem};
use smallvec::SmallVec;

use crate::common::error::Result;
use crate::common::source::ByteSource;

/// Bytes read from the start of a PDF.
pub const PDF_SCAN_WINDOW: usize = 8192;

const ENCRYPT_KEY: &[u8] = b"Encrypt";
const STREAM_KEYWORD: &[u8] = b"stream";
const ENDSTREAM_KEYWORD: &[u8] = b"endstream";

/// Check whether a PDF references an encryption dictionary.
///
/// # Errors
///
/// Only fails if the source cannot be read.
pub async fn is_pdf_protected<S: ByteSource>(source: &S) -> Result<bool> {
    let text = source
        .read_text(Some(0..PDF_SCAN_WINDOW as u64))
        .await?;
    trace!("scanning {} bytes of PDF header", text.len());

    let found = has_encrypt_reference(text.as_bytes());
    if found {
        debug!("PDF dictionary references an /Encrypt object");
    }
    Ok(found)
}

/// Check whether `data` holds a dictionary with an `/Encrypt` indirect reference.
///
/// # Examples
///
/// ```
/// use litchi_guard::pdf::trailer::has_encrypt_reference;
///
/// assert!(has_encrypt_reference(b"trailer << /Root 1 0 R /Encrypt 5 0 R >>"));
/// assert!(!has_encrypt_reference(b"see /Encrypt 5 0 R in the manual"));
/// ```
pub fn has_encrypt_reference(data: &[u8]) -> bool {
    // One entry per open dictionary: whether it holds an /Encrypt reference.
    let mut dictionaries: SmallVec<[bool; 8]> = SmallVec::new();
    let mut pos = 0;

    while pos < data.len() {
        match data[pos] {
            b'%' => pos = skip_comment(data, pos),
            b'(' => pos = skip_literal_string(data, pos),
            b'<' if data.get(pos + 1) == Some(&b'<') => {
                dictionaries.push(false);
                pos += 2;
            },
            b'<' => pos = skip_hex_string(data, pos),
            b'>' if data.get(pos + 1) == Some(&b'>') => {
                if dictionaries.pop() == Some(true) {
                    return true;
                }
                pos += 2;
            },
            b'/' => {
                let end = token_end(data, pos + 1);
                if &data[pos + 1..end] == ENCRYPT_KEY
                    && let Some(top) = dictionaries.last_mut()
                    && let Some(after) = indirect_reference_end(data, end)
                {
                    *top = true;
                    pos = after;
                } else {
                    pos = end;
                }
            },
            b's' if is_stream_keyword(data, pos) => {
                match memmem::find(&data[pos..], ENDSTREAM_KEYWORD) {
                    Some(offset) => pos += offset + ENDSTREAM_KEYWORD.len(),
                    // The rest of the window is stream data.
                    None => return false,
                }
            },
            _ => pos += 1,
        }
    }

    false
}

#[inline]
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b'\0' | b'\t' | b'\n' | b'\x0C' | b'\r' | b' ')
}

#[inline]
fn is_delimiter(byte: u8) -> bool {
    matches!(
        byte,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

#[inline]
fn is_token_boundary(data: &[u8], pos: usize) -> bool {
    data.get(pos)
        .is_none_or(|&byte| is_whitespace(byte) || is_delimiter(byte))
}

/// End of the regular-character run starting at `pos`.
fn token_end(data: &[u8], pos: usize) -> usize {
    data[pos..]
        .iter()
        .position(|&byte| is_whitespace(byte) || is_delimiter(byte))
        .map_or(data.len(), |offset| pos + offset)
}

fn skip_whitespace(data: &[u8], pos: usize) -> usize {
    data[pos..]
        .iter()
        .position(|&byte| !is_whitespace(byte))
        .map_or(data.len(), |offset| pos + offset)
}

/// Parse `<int>+ R` after a key, returning the position past `R`.
fn indirect_reference_end(data: &[u8], pos: usize) -> Option<usize> {
    let mut pos = skip_whitespace(data, pos);
    let mut integers = 0;

    loop {
        let digits = data[pos..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 || !is_token_boundary(data, pos + digits) {
            break;
        }
        integers += 1;
        pos = skip_whitespace(data, pos + digits);
    }

    (integers > 0 && data.get(pos) == Some(&b'R') && is_token_boundary(data, pos + 1))
        .then_some(pos + 1)
}

fn skip_comment(data: &[u8], pos: usize) -> usize {
    memchr2(b'\r', b'\n', &data[pos..]).map_or(data.len(), |offset| pos + offset)
}

fn skip_hex_string(data: &[u8], pos: usize) -> usize {
    memchr(b'>', &data[pos + 1..]).map_or(data.len(), |offset| pos + offset + 2)
}

/// Skip a literal string, honoring nested parentheses and backslash escapes.
fn skip_literal_string(data: &[u8], pos: usize) -> usize {
    let mut depth = 0usize;
    let mut i = pos;

    while i < data.len() {
        match data[i] {
            b'\\' => i += 1,
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return i + 1;
                }
            },
            _ => {},
        }
        i += 1;
    }

    data.len()
}

/// `stream` as a keyword: a standalone token followed by an end of line.
fn is_stream_keyword(data: &[u8], pos: usize) -> bool {
    data[pos..].starts_with(STREAM_KEYWORD)
        && (pos == 0 || is_token_boundary(data, pos - 1))
        && matches!(data.get(pos + STREAM_KEYWORD.len()), Some(b'\r' | b'\n'))
}
