//! Typed field values produced by the field formatters.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// How a punch entered the clock, as carried by the AFDT registry-type field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryKind {
    /// `O`: recorded by the clock itself.
    Original,
    /// `I`: typed in by an operator.
    InsertedByTyping,
    /// `P`: pre-marked.
    PreMarked,
}

impl RegistryKind {
    /// The human-readable label for this registry kind.
    pub fn label(self) -> &'static str {
        match self {
            RegistryKind::Original => "Original",
            RegistryKind::InsertedByTyping => "Inserted by typing",
            RegistryKind::PreMarked => "Pre-marked",
        }
    }
}

impl std::fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for RegistryKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A decoded field value.
///
/// Fields without a formatter keep their raw slice as [`FieldValue::Text`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free text, either trimmed or the untouched raw slice.
    Text(String),
    /// An unsigned integer.
    Number(u64),
    /// A calendar date.
    Date(NaiveDate),
    /// A time of day.
    Time(NaiveTime),
    /// A quantity of hours (e.g. `0830` is 8.5 hours).
    Hours(Decimal),
    /// A registry-type code.
    Registry(RegistryKind),
}

impl FieldValue {
    /// Returns the text if this is a [`FieldValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the number if this is a [`FieldValue::Number`].
    pub fn as_number(&self) -> Option<u64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the date if this is a [`FieldValue::Date`].
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(date) => Some(*date),
            _ => None,
        }
    }

    /// Returns the time if this is a [`FieldValue::Time`].
    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            FieldValue::Time(time) => Some(*time),
            _ => None,
        }
    }

    /// Returns the hour quantity if this is a [`FieldValue::Hours`].
    pub fn as_hours(&self) -> Option<Decimal> {
        match self {
            FieldValue::Hours(hours) => Some(*hours),
            _ => None,
        }
    }

    /// Returns the registry kind if this is a [`FieldValue::Registry`].
    pub fn as_registry(&self) -> Option<RegistryKind> {
        match self {
            FieldValue::Registry(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

/// A calendar date used as a grouping key, rendered as `ddmmyyyy`.
///
/// Keys order chronologically.
///
/// # Example
///
/// ```
/// use afd_reader::models::DateKey;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// let key = DateKey::from(date);
/// assert_eq!(key.to_string(), "01012021");
/// assert_eq!(key.date(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Returns the underlying date.
    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey(date)
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%d%m%Y"))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_key_is_zero_padded() {
        assert_eq!(DateKey::from(date(2021, 2, 3)).to_string(), "03022021");
        assert_eq!(DateKey::from(date(2020, 12, 31)).to_string(), "31122020");
    }

    #[test]
    fn test_date_keys_order_chronologically() {
        // "01022021" sorts before "31012021" as text, but not as a date
        let january = DateKey::from(date(2021, 1, 31));
        let february = DateKey::from(date(2021, 2, 1));
        assert!(january < february);
    }

    #[test]
    fn test_registry_kind_labels() {
        assert_eq!(RegistryKind::Original.to_string(), "Original");
        assert_eq!(RegistryKind::InsertedByTyping.to_string(), "Inserted by typing");
        assert_eq!(RegistryKind::PreMarked.to_string(), "Pre-marked");
    }

    #[test]
    fn test_field_value_accessors() {
        assert_eq!(FieldValue::Number(7).as_number(), Some(7));
        assert_eq!(FieldValue::Number(7).as_text(), None);
        assert_eq!(FieldValue::from("abc").as_text(), Some("abc"));
        assert_eq!(
            FieldValue::Date(date(2021, 1, 1)).as_date(),
            Some(date(2021, 1, 1))
        );
        assert_eq!(
            FieldValue::Registry(RegistryKind::PreMarked).as_registry(),
            Some(RegistryKind::PreMarked)
        );
    }

    #[test]
    fn test_field_value_serializes_untagged() {
        let json = serde_json::to_string(&FieldValue::Number(12)).unwrap();
        assert_eq!(json, "12");

        let json = serde_json::to_string(&FieldValue::Date(date(2021, 1, 1))).unwrap();
        assert_eq!(json, "\"2021-01-01\"");

        let json = serde_json::to_string(&FieldValue::Registry(RegistryKind::Original)).unwrap();
        assert_eq!(json, "\"Original\"");
    }

    #[test]
    fn test_date_key_orders_by_calendar_date() {
        let december = DateKey::from(date(2020, 12, 31));
        let january = DateKey::from(date(2021, 1, 1));
        // "31122020" sorts after "01012021" as text, but not as a date
        assert!(december < january);
        assert_eq!(january.date(), date(2021, 1, 1));
    }

    #[test]
    fn test_date_key_serializes_as_string() {
        let json = serde_json::to_string(&DateKey::from(date(2021, 1, 1))).unwrap();
        assert_eq!(json, "\"01012021\"");
    }
}
