//! File dialects and their record-kind vocabularies.
//!
//! Portaria 1.510/2009 defines three record files that share the same
//! fixed-width mechanism: the AFD (here [`Dialect::Standard`]), the AFDT
//! ([`Dialect::Extended`]) and the ACJEF ([`Dialect::ContractualHours`]).

use serde::{Deserialize, Serialize};

/// One of the three supported record-file families.
///
/// # Example
///
/// ```
/// use afd_reader::models::Dialect;
///
/// assert_eq!(Dialect::Standard.punch_type_code(), '3');
/// assert_eq!(Dialect::Extended.punch_type_code(), '2');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// AFD: raw punch marks as recorded by the clock.
    Standard,
    /// AFDT: treated punches with explicit direction and registry type.
    Extended,
    /// ACJEF: contractual hours and per-day hour summaries.
    ContractualHours,
}

impl Dialect {
    /// All dialects, in detection order.
    pub const ALL: [Dialect; 3] = [
        Dialect::Standard,
        Dialect::Extended,
        Dialect::ContractualHours,
    ];

    /// The type code of the records that carry punches for this dialect.
    pub fn punch_type_code(self) -> char {
        match self {
            Dialect::Standard => '3',
            Dialect::Extended => '2',
            Dialect::ContractualHours => '3',
        }
    }

    /// The trimmed trailer-line length that identifies this dialect.
    pub fn trailer_length(self) -> usize {
        match self {
            Dialect::Standard => 34,
            Dialect::Extended => 55,
            Dialect::ContractualHours => 91,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Standard => write!(f, "AFD"),
            Dialect::Extended => write!(f, "AFDT"),
            Dialect::ContractualHours => write!(f, "ACJEF"),
        }
    }
}

/// The kind of record a type code selects within a dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// File header (all dialects, code `1`).
    Header,
    /// Employer data change (Standard, code `2`).
    CompanyChange,
    /// Punch mark (Standard, code `3`).
    Mark,
    /// Clock time adjustment (Standard, code `4`).
    MarkAdjust,
    /// Employee inclusion/change/removal (Standard, code `5`).
    Employee,
    /// Treated punch (Extended, code `2`) or hour summary (ContractualHours, code `3`).
    Detail,
    /// File trailer (Extended, code `9`).
    Trailer,
    /// Contractual working-hours table (ContractualHours, code `2`).
    ContractualHours,
}

/// Looks up the record kind registered for a type code in a dialect.
///
/// Returns `None` when the dialect has no record of that type; this is
/// the signal to skip structured decoding for the line.
///
/// # Example
///
/// ```
/// use afd_reader::models::{record_kind, Dialect, RecordKind};
///
/// assert_eq!(record_kind(Dialect::Standard, '3'), Some(RecordKind::Mark));
/// assert_eq!(record_kind(Dialect::Extended, '9'), Some(RecordKind::Trailer));
/// assert_eq!(record_kind(Dialect::Standard, '7'), None);
/// ```
pub fn record_kind(dialect: Dialect, type_code: char) -> Option<RecordKind> {
    match (dialect, type_code) {
        (Dialect::Standard, '1') => Some(RecordKind::Header),
        (Dialect::Standard, '2') => Some(RecordKind::CompanyChange),
        (Dialect::Standard, '3') => Some(RecordKind::Mark),
        (Dialect::Standard, '4') => Some(RecordKind::MarkAdjust),
        (Dialect::Standard, '5') => Some(RecordKind::Employee),
        (Dialect::Extended, '1') => Some(RecordKind::Header),
        (Dialect::Extended, '2') => Some(RecordKind::Detail),
        (Dialect::Extended, '9') => Some(RecordKind::Trailer),
        (Dialect::ContractualHours, '1') => Some(RecordKind::Header),
        (Dialect::ContractualHours, '2') => Some(RecordKind::ContractualHours),
        (Dialect::ContractualHours, '3') => Some(RecordKind::Detail),
        _ => None,
    }
}
