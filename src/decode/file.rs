//! Whole-file decoding.

use tracing::{debug, warn};

use crate::error::ReaderResult;
use crate::models::{Dialect, Record};

use super::detection::detect;
use super::line::{decode_line, type_code};

/// Decodes every line of a file with one resolved dialect.
///
/// # Example
///
/// ```
/// use afd_reader::decode::FileDecoder;
/// use afd_reader::models::Dialect;
///
/// let lines = ["0000000053010120210800000000000001", "999999999000000000"];
/// let records = FileDecoder::new(Dialect::Standard).decode(&lines).unwrap();
/// assert_eq!(records.len(), 2);
/// assert!(records[1].is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FileDecoder {
    dialect: Dialect,
    warn_on_unknown_type: bool,
}

impl FileDecoder {
    /// Creates a decoder for `dialect` that skips unknown type codes quietly.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            warn_on_unknown_type: false,
        }
    }

    /// Logs skipped lines at warn level instead of debug.
    pub fn warn_on_unknown_type(mut self, warn: bool) -> Self {
        self.warn_on_unknown_type = warn;
        self
    }

    /// The dialect every line is decoded with.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Decodes `lines` in order, one record per line.
    ///
    /// Lines with unknown type codes yield empty records. The first
    /// formatter failure aborts decoding and is returned with its 1-based
    /// line number.
    pub fn decode<S: AsRef<str>>(&self, lines: &[S]) -> ReaderResult<Vec<Record>> {
        let mut records = Vec::with_capacity(lines.len());
        let mut skipped = 0usize;

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let record = decode_line(line, self.dialect).map_err(|e| {
                warn!(dialect = %self.dialect, line = index + 1, error = %e, "Line failed to decode");
                e.at_line(index + 1)
            })?;

            if record.is_empty() && !line.trim().is_empty() {
                skipped += 1;
                let code = type_code(line).map(String::from).unwrap_or_default();
                if self.warn_on_unknown_type {
                    warn!(dialect = %self.dialect, line = index + 1, type_code = %code, "Skipping line with unknown type code");
                } else {
                    debug!(dialect = %self.dialect, line = index + 1, type_code = %code, "Skipping line with unknown type code");
                }
            }
            records.push(record);
        }

        debug!(
            dialect = %self.dialect,
            lines = lines.len(),
            skipped,
            "Decoded file"
        );
        Ok(records)
    }
}

/// Decodes a file, detecting the dialect when none is given.
///
/// # Example
///
/// ```
/// use afd_reader::decode::decode_file;
///
/// let lines = [
///     "0000000053010120210800000000000001",
///     "0000000063010120211200000000000001",
///     "999999999000000000000000002000000000000000000009",
/// ];
/// let records = decode_file(&lines, None).unwrap();
/// assert_eq!(records.len(), 3);
/// ```
pub fn decode_file<S: AsRef<str>>(
    lines: &[S],
    dialect: Option<Dialect>,
) -> ReaderResult<Vec<Record>> {
    let dialect = match dialect {
        Some(dialect) => dialect,
        None => detect(lines)?,
    };
    FileDecoder::new(dialect).decode(lines)
}
