//! Numeric field formatters.

use rust_decimal::Decimal;

use crate::error::{ReaderError, ReaderResult};
use crate::models::FieldValue;

use super::FieldFormatter;

/// Zero-padded unsigned integer, such as a sequence number or a table code.
#[derive(Debug, Clone, Copy, Default)]
pub struct Numeric;

impl FieldFormatter for Numeric {
    fn format(&self, raw: &str) -> ReaderResult<FieldValue> {
        parse_digits(raw, "an unsigned number").map(FieldValue::Number)
    }
}

/// Hour quantity written as `hhmm`, converted to decimal hours.
///
/// # Example
///
/// ```
/// use afd_reader::format::{FieldFormatter, Hours};
/// use afd_reader::models::FieldValue;
/// use rust_decimal::Decimal;
///
/// assert_eq!(Hours.format("0830").unwrap(), FieldValue::Hours(Decimal::new(85, 1)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Hours;

const HOURS_SHAPE: &str = "an hhmm hour quantity";

impl FieldFormatter for Hours {
    fn format(&self, raw: &str) -> ReaderResult<FieldValue> {
        if raw.len() != 4 || !raw.is_ascii() {
            return Err(invalid(raw, HOURS_SHAPE));
        }
        let hours = parse_digits(&raw[..2], HOURS_SHAPE).map_err(|_| invalid(raw, HOURS_SHAPE))?;
        let minutes = parse_digits(&raw[2..], HOURS_SHAPE).map_err(|_| invalid(raw, HOURS_SHAPE))?;
        if minutes >= 60 {
            return Err(invalid(raw, HOURS_SHAPE));
        }

        let total_minutes = Decimal::from(hours * 60 + minutes);
        Ok(FieldValue::Hours(total_minutes / Decimal::from(60)))
    }
}

/// Parses a non-empty run of ASCII digits.
pub(super) fn parse_digits(raw: &str, expected: &'static str) -> ReaderResult<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(raw, expected));
    }
    raw.parse().map_err(|_| invalid(raw, expected))
}

pub(super) fn invalid(raw: &str, expected: &'static str) -> ReaderError {
    ReaderError::InvalidFieldValue {
        value: raw.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_parses_zero_padded_digits() {
        assert_eq!(Numeric.format("000000042").unwrap(), FieldValue::Number(42));
        assert_eq!(Numeric.format("0").unwrap(), FieldValue::Number(0));
    }

    #[test]
    fn test_numeric_rejects_non_digits() {
        assert!(Numeric.format("").is_err());
        assert!(Numeric.format(" 42").is_err());
        assert!(Numeric.format("-1").is_err());
        assert!(Numeric.format("4a").is_err());
    }

    #[test]
    fn test_numeric_rejects_overflow() {
        assert!(Numeric.format("99999999999999999999999").is_err());
    }

    #[test]
    fn test_hours_converts_to_decimal() {
        assert_eq!(Hours.format("0000").unwrap(), FieldValue::Hours(Decimal::ZERO));
        assert_eq!(Hours.format("0800").unwrap(), FieldValue::Hours(Decimal::from(8)));
        assert_eq!(
            Hours.format("0115").unwrap(),
            FieldValue::Hours(Decimal::new(125, 2))
        );
        assert_eq!(
            Hours.format("2430").unwrap(),
            FieldValue::Hours(Decimal::new(245, 1))
        );
    }

    #[test]
    fn test_hours_rejects_invalid_minutes_and_shape() {
        match Hours.format("0175") {
            Err(ReaderError::InvalidFieldValue { value, expected }) => {
                assert_eq!(value, "0175");
                assert_eq!(expected, HOURS_SHAPE);
            }
            other => panic!("Expected InvalidFieldValue error, got {:?}", other),
        }
        assert!(Hours.format("800").is_err());
        assert!(Hours.format("08:0").is_err());
        assert!(Hours.format("    ").is_err());
    }
}
