//! Date and time-of-day formatters.

use chrono::{NaiveDate, NaiveTime};

use crate::error::ReaderResult;
use crate::models::FieldValue;

use super::FieldFormatter;
use super::numeric::invalid;

const DATE_SHAPE: &str = "a ddmmyyyy date";
const TIME_SHAPE: &str = "an hhmm time of day";

/// Calendar date written as `ddmmyyyy`.
///
/// # Example
///
/// ```
/// use afd_reader::format::{Date, FieldFormatter};
/// use afd_reader::models::FieldValue;
/// use chrono::NaiveDate;
///
/// let value = Date.format("31012021").unwrap();
/// assert_eq!(value, FieldValue::Date(NaiveDate::from_ymd_opt(2021, 1, 31).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Date;

impl FieldFormatter for Date {
    fn format(&self, raw: &str) -> ReaderResult<FieldValue> {
        if !is_digits_of_len(raw, 8) {
            return Err(invalid(raw, DATE_SHAPE));
        }
        NaiveDate::parse_from_str(raw, "%d%m%Y")
            .map(FieldValue::Date)
            .map_err(|_| invalid(raw, DATE_SHAPE))
    }
}

/// Time of day written as `hhmm`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time;

impl FieldFormatter for Time {
    fn format(&self, raw: &str) -> ReaderResult<FieldValue> {
        if !is_digits_of_len(raw, 4) {
            return Err(invalid(raw, TIME_SHAPE));
        }
        NaiveTime::parse_from_str(raw, "%H%M")
            .map(FieldValue::Time)
            .map_err(|_| invalid(raw, TIME_SHAPE))
    }
}

fn is_digits_of_len(raw: &str, len: usize) -> bool {
    raw.len() == len && raw.bytes().all(|b| b.is_ascii_digit())
}
