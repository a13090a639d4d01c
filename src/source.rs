//! Reading record files from disk.
//!
//! REP exports are frequently Windows-1252 (labelled ISO-8859-1) rather
//! than UTF-8. Bytes that are not valid UTF-8 are decoded as Windows-1252,
//! one character per byte, so field widths measured in characters stay
//! correct.

use std::fs;
use std::path::Path;

use encoding_rs::WINDOWS_1252;
use tracing::debug;

use crate::error::{ReaderError, ReaderResult};

/// Reads a file into lines, stripping `\n` and `\r\n` terminators.
pub fn read_lines<P: AsRef<Path>>(path: P) -> ReaderResult<Vec<String>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|_| ReaderError::SourceNotFound {
        path: path.display().to_string(),
    })?;
    Ok(split_lines(&decode_text(bytes)))
}

/// Decodes bytes as UTF-8, falling back to Windows-1252.
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            let bytes = err.into_bytes();
            debug!(encoding = WINDOWS_1252.name(), "Source is not UTF-8");
            WINDOWS_1252
                .decode_without_bom_handling(&bytes)
                .0
                .into_owned()
        }
    }
}

/// Splits text into lines the way [`str::lines`] does.
///
/// A final terminator does not produce an empty trailing line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
