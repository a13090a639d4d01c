//! Decoded record model.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{ReaderError, ReaderResult};

use super::{FieldValue, RecordKind, RegistryKind};

/// Name of the field that holds the one-character type code in every layout.
pub const TYPE_FIELD: &str = "type";

/// One decoded line: a mapping from field name to typed value.
///
/// A record is *empty* when its line carried a type code with no layout in
/// the active dialect. Empty records are kept so that record indices match
/// input line indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<RecordKind>,
    #[serde(flatten)]
    fields: BTreeMap<&'static str, FieldValue>,
}

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a record of the given kind with no fields yet.
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind: Some(kind),
            fields: BTreeMap::new(),
        }
    }

    /// Assigns a field value.
    pub fn insert(&mut self, name: &'static str, value: FieldValue) {
        self.fields.insert(name, value);
    }

    /// Returns true if the line had no registered layout.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The record kind, if the line had a registered layout.
    pub fn kind(&self) -> Option<RecordKind> {
        self.kind
    }

    /// The type code carried in the `type` field, if any.
    pub fn type_code(&self) -> Option<char> {
        self.fields
            .get(TYPE_FIELD)
            .and_then(FieldValue::as_text)
            .and_then(|text| text.chars().next())
    }

    /// Returns the raw value of a field.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Iterates over fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    /// Returns a text field or a `MissingField` error.
    pub fn text(&self, name: &'static str) -> ReaderResult<&str> {
        self.require(name, FieldValue::as_text)
    }

    /// Returns a numeric field or a `MissingField` error.
    pub fn number(&self, name: &'static str) -> ReaderResult<u64> {
        self.require(name, FieldValue::as_number)
    }

    /// Returns a date field or a `MissingField` error.
    pub fn date(&self, name: &'static str) -> ReaderResult<NaiveDate> {
        self.require(name, FieldValue::as_date)
    }

    /// Returns a time field or a `MissingField` error.
    pub fn time(&self, name: &'static str) -> ReaderResult<NaiveTime> {
        self.require(name, FieldValue::as_time)
    }

    /// Returns an hours field or a `MissingField` error.
    pub fn hours(&self, name: &'static str) -> ReaderResult<Decimal> {
        self.require(name, FieldValue::as_hours)
    }

    /// Returns a registry-type field or a `MissingField` error.
    pub fn registry(&self, name: &'static str) -> ReaderResult<RegistryKind> {
        self.require(name, FieldValue::as_registry)
    }

    fn require<'a, T>(
        &'a self,
        name: &'static str,
        extract: impl FnOnce(&'a FieldValue) -> Option<T>,
    ) -> ReaderResult<T> {
        self.fields
            .get(name)
            .and_then(extract)
            .ok_or(ReaderError::MissingField { field: name })
    }
}
