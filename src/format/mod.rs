//! Field formatters.
//!
//! A formatter turns the raw fixed-width slice of one field into a typed
//! [`FieldValue`]. Formatters are unit structs composed into the static
//! layout tables by reference, so every implementation must be `Sync`.

mod numeric;
mod temporal;

use crate::error::{ReaderError, ReaderResult};
use crate::models::{FieldValue, RegistryKind};

pub use numeric::{Hours, Numeric};
pub use temporal::{Date, Time};

/// Converts a raw fixed-width slice into a typed value.
pub trait FieldFormatter: std::fmt::Debug + Send + Sync {
    /// Formats `raw`, failing when it is outside the field's domain.
    fn format(&self, raw: &str) -> ReaderResult<FieldValue>;
}

/// Free text; trims surrounding whitespace and never fails.
///
/// # Example
///
/// ```
/// use afd_reader::format::{Alphanumeric, FieldFormatter};
/// use afd_reader::models::FieldValue;
///
/// let value = Alphanumeric.format("  ACME LTDA   ").unwrap();
/// assert_eq!(value, FieldValue::Text("ACME LTDA".to_string()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Alphanumeric;

impl FieldFormatter for Alphanumeric {
    fn format(&self, raw: &str) -> ReaderResult<FieldValue> {
        Ok(FieldValue::Text(raw.trim().to_string()))
    }
}

/// Registry-type code: `O`, `I` or `P`.
///
/// Any other input, including the empty string, is rejected with
/// [`ReaderError::UnknownFieldValue`].
///
/// # Example
///
/// ```
/// use afd_reader::format::{FieldFormatter, RegistryType};
/// use afd_reader::models::{FieldValue, RegistryKind};
///
/// let value = RegistryType.format("O").unwrap();
/// assert_eq!(value, FieldValue::Registry(RegistryKind::Original));
/// assert!(RegistryType.format("X").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryType;

impl FieldFormatter for RegistryType {
    fn format(&self, raw: &str) -> ReaderResult<FieldValue> {
        let kind = match raw {
            "O" => RegistryKind::Original,
            "I" => RegistryKind::InsertedByTyping,
            "P" => RegistryKind::PreMarked,
            _ => {
                return Err(ReaderError::UnknownFieldValue {
                    value: raw.to_string(),
                });
            }
        };
        Ok(FieldValue::Registry(kind))
    }
}
