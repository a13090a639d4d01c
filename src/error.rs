//! Error types for the AFD reader.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while reading, decoding and
//! aggregating time-clock record files.

use thiserror::Error;

/// The main error type for the AFD reader.
///
/// Every fallible operation in the crate returns this error type. Note that
/// an unknown record type code is *not* an error: such lines decode to an
/// empty [`Record`](crate::models::Record).
///
/// # Example
///
/// ```
/// use afd_reader::error::ReaderError;
///
/// let error = ReaderError::UnrecognizedDialect { length: 12 };
/// assert_eq!(
///     error.to_string(),
///     "Unrecognized file dialect: trailer line has 12 characters"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ReaderError {
    /// The record source could not be opened or read.
    #[error("Source not found: {path}")]
    SourceNotFound {
        /// The path that could not be read.
        path: String,
    },

    /// The trailer line length matched none of the known dialects.
    #[error("Unrecognized file dialect: trailer line has {length} characters")]
    UnrecognizedDialect {
        /// The trimmed character length of the trailer line.
        length: usize,
    },

    /// A vocabulary field received a code outside its fixed table.
    #[error("Unknown field value: '{value}'")]
    UnknownFieldValue {
        /// The rejected raw value.
        value: String,
    },

    /// A numeric, date, time or hours field could not be parsed.
    #[error("Invalid field value '{value}': expected {expected}")]
    InvalidFieldValue {
        /// The rejected raw value.
        value: String,
        /// A description of the expected shape.
        expected: &'static str,
    },

    /// A field failed to format.
    #[error("field '{field}': {source}")]
    Field {
        /// The field name from the layout.
        field: &'static str,
        /// The underlying formatter error.
        #[source]
        source: Box<ReaderError>,
    },

    /// A line of the source failed to decode.
    #[error("line {line}: {source}")]
    Line {
        /// The 1-based line number.
        line: usize,
        /// The underlying decode error.
        #[source]
        source: Box<ReaderError>,
    },

    /// A punch record lacked a field the aggregator requires.
    #[error("Missing or mistyped field '{field}' in punch record")]
    MissingField {
        /// The field name that was expected.
        field: &'static str,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl ReaderError {
    /// Wraps a formatter error with the field it came from.
    pub fn at_field(self, field: &'static str) -> Self {
        ReaderError::Field {
            field,
            source: Box::new(self),
        }
    }

    /// Wraps a decode error with the 1-based line number it came from.
    pub fn at_line(self, line: usize) -> Self {
        ReaderError::Line {
            line,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping field and line context.
    pub fn root_cause(&self) -> &ReaderError {
        match self {
            ReaderError::Field { source, .. } | ReaderError::Line { source, .. } => {
                source.root_cause()
            }
            other => other,
        }
    }
}

/// A type alias for Results that return ReaderError.
pub type ReaderResult<T> = Result<T, ReaderError>;
