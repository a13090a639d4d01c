//! Reader for Brazilian time-clock (REP) record files
//!
//! This crate decodes the fixed-width AFD, AFDT and ACJEF files exported by
//! electronic time clocks into typed records, and groups the punch records
//! per employee and day.
//!
//! ```
//! use afd_reader::AfdReader;
//!
//! let lines = [
//!     "0000000013010120210800000000000001",
//!     "0000000023010120211200000000000001",
//!     "999999999000000000000000002000000000000000000009",
//! ];
//! let reader = AfdReader::from_lines(&lines, None)?;
//! let json = serde_json::to_string(&reader.by_user()?).unwrap();
//! assert!(json.contains("\"01012021\""));
//! # Ok::<(), afd_reader::error::ReaderError>(())
//! ```

#![warn(missing_docs)]

pub mod aggregation;
pub mod config;
pub mod decode;
pub mod error;
pub mod format;
pub mod layout;
pub mod models;
pub mod reader;
pub mod source;

pub use reader::AfdReader;
