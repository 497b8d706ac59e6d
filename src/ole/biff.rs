//! BIFF FilePass marker scanning for legacy `.xls` and `.ppt` files.
//!
//! A workbook that is password protected carries a FilePass record right
//! after its BOF record, near the start of the file. Rather than walking the
//! record stream, the first bytes of the file are searched for the record
//! identifier. This is a heuristic: the two bytes may also occur by chance
//! in crafted input.

use log::{debug, trace};

use crate::common::detection::utils::find_in_buffer;
use crate::common::error::Result;
use crate::common::source::ByteSource;
use crate::ole::consts::{FILE_PASS_RECORD, PPT_SCAN_WINDOW, XLS_SCAN_WINDOW};

/// Check whether `data` contains the FilePass record identifier at any offset.
///
/// # Examples
///
/// ```
/// use litchi_guard::ole::biff::contains_file_pass_marker;
///
/// assert!(contains_file_pass_marker(&[0x09, 0x08, 0x2F, 0x00, 0x36, 0x00]));
/// assert!(!contains_file_pass_marker(&[0x00, 0x2F]));
/// ```
#[inline]
pub fn contains_file_pass_marker(data: &[u8]) -> bool {
    find_in_buffer(data, &FILE_PASS_RECORD)
}

/// Scan the first `window` bytes of a source for a FilePass record.
///
/// # Errors
///
/// Only fails if the source cannot be read.
pub async fn scan_window<S: ByteSource>(source: &S, window: usize) -> Result<bool> {
    let head = source.read_prefix(window).await?;
    trace!("scanning {} of {} bytes for FilePass", head.len(), window);

    // Sources may hand back more than asked for; only the window counts.
    let head = &head[..head.len().min(window)];
    let found = contains_file_pass_marker(head);
    if found {
        debug!("FilePass record identifier found in header window");
    }
    Ok(found)
}

/// Check whether a legacy `.xls` workbook is password protected.
pub async fn is_xls_protected<S: ByteSource>(source: &S) -> Result<bool> {
    scan_window(source, XLS_SCAN_WINDOW).await
}

/// Check whether a legacy `.ppt` presentation is password protected.
pub async fn is_ppt_protected<S: ByteSource>(source: &S) -> Result<bool> {
    scan_window(source, PPT_SCAN_WINDOW).await
}
