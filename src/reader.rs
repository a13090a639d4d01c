//! The [`AfdReader`] entry point.

use std::path::Path;

use tracing::{info, warn};

use crate::aggregation::aggregate;
use crate::config::ReaderConfig;
use crate::decode::{FileDecoder, detect};
use crate::error::ReaderResult;
use crate::models::{ByUser, Dialect, Record};
use crate::source::read_lines;

/// A decoded time-clock record file.
///
/// Construction resolves the dialect and decodes every line eagerly; it
/// either succeeds completely or fails without a partial reader.
///
/// # Example
///
/// ```
/// use afd_reader::AfdReader;
/// use afd_reader::models::{Dialect, Direction};
///
/// let lines = [
///     "0000000013010120210800000000000001",
///     "0000000023010120211200000000000001",
///     "999999999000000000000000002000000000000000000009",
/// ];
/// let reader = AfdReader::from_lines(&lines, None).unwrap();
/// assert_eq!(reader.dialect(), Dialect::Standard);
/// assert_eq!(reader.decoded_records().len(), 3);
///
/// let by_user = reader.by_user().unwrap();
/// let days = &by_user.as_standard().unwrap()["000000000001"];
/// let punches: Vec<_> = days.values().flat_map(|p| p[&1].iter()).collect();
/// assert_eq!(punches[0].direction, Direction::In);
/// assert_eq!(punches[1].direction, Direction::Out);
/// ```
#[derive(Debug, Clone)]
pub struct AfdReader {
    dialect: Dialect,
    records: Vec<Record>,
}

impl AfdReader {
    /// Opens and decodes a file, detecting the dialect when none is given.
    pub fn open<P: AsRef<Path>>(path: P, dialect: Option<Dialect>) -> ReaderResult<Self> {
        let config = ReaderConfig {
            dialect,
            ..ReaderConfig::default()
        };
        Self::with_config(path, &config)
    }

    /// Opens and decodes a file using a loaded configuration.
    pub fn with_config<P: AsRef<Path>>(path: P, config: &ReaderConfig) -> ReaderResult<Self> {
        let path = path.as_ref();
        let lines = read_lines(path).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "Failed to read source");
        })?;
        info!(path = %path.display(), lines = lines.len(), "Read record file");
        Self::from_lines_with_config(&lines, config)
    }

    /// Decodes an in-memory line sequence.
    pub fn from_lines<S: AsRef<str>>(lines: &[S], dialect: Option<Dialect>) -> ReaderResult<Self> {
        let config = ReaderConfig {
            dialect,
            ..ReaderConfig::default()
        };
        Self::from_lines_with_config(lines, &config)
    }

    /// Decodes an in-memory line sequence using a loaded configuration.
    pub fn from_lines_with_config<S: AsRef<str>>(
        lines: &[S],
        config: &ReaderConfig,
    ) -> ReaderResult<Self> {
        let dialect = match config.dialect {
            Some(dialect) => dialect,
            None => {
                let detected = detect(lines).inspect_err(|e| {
                    warn!(lines = lines.len(), error = %e, "Dialect detection failed");
                })?;
                info!(dialect = %detected, "Detected file dialect");
                detected
            }
        };

        let records = FileDecoder::new(dialect)
            .warn_on_unknown_type(config.warn_on_unknown_type)
            .decode(lines)?;

        Ok(Self { dialect, records })
    }

    /// The dialect the file was decoded with.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// One record per input line, in line order.
    ///
    /// Lines with an unknown type code appear as empty records.
    pub fn decoded_records(&self) -> &[Record] {
        &self.records
    }

    /// Groups the decoded punches per employee, shaped by the dialect.
    pub fn by_user(&self) -> ReaderResult<ByUser> {
        aggregate(self.dialect, &self.records)
    }
}
