//! Punch events produced by the per-dialect aggregators.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{DateKey, RegistryKind};

/// Direction assigned to an AFD punch by the alternating state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Entry (`Entrada`).
    In,
    /// Exit (`Saída`).
    Out,
}

impl Direction {
    /// The label written to aggregated output.
    pub fn label(self) -> &'static str {
        match self {
            Direction::In => "Entrada",
            Direction::Out => "Saída",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Direction {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A punch mark from an AFD file, with its inferred direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandardPunch {
    /// The record's sequence number (NSR).
    pub sequence: u64,
    /// Punch date combined with the time of day.
    pub date_time: NaiveDateTime,
    /// Inferred entry/exit direction.
    pub direction: Direction,
}

/// A treated punch from an AFDT file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtendedPunch {
    /// The record's sequence number (NSR).
    pub sequence: u64,
    /// Clock date combined with the clock time.
    pub date_time: NaiveDateTime,
    /// Free-text reason for an inserted or pre-marked punch.
    pub reason: String,
    /// Direction code as written in the file (`E` or `S`).
    pub direction: String,
    /// How the punch entered the clock.
    pub registry_type: RegistryKind,
}

/// One overtime band of an ACJEF hour summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OvertimeBand {
    /// Overtime quantity in hours.
    pub hours: Decimal,
    /// Overtime premium percentage.
    pub percentage: u64,
    /// Overtime modality code.
    pub modality: String,
}

/// A per-day hour summary from an ACJEF file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractualHoursEntry {
    /// The record's sequence number (NSR).
    pub sequence: u64,
    /// The record's type code.
    pub record_type: char,
    /// The day the journey started.
    pub start_date: DateKey,
    /// Time of the first punch.
    pub first_hour: chrono::NaiveTime,
    /// Contractual hours table code.
    pub hour_code: u64,
    /// Daytime hours worked.
    pub day_time: Decimal,
    /// Night hours worked.
    pub night_time: Decimal,
    /// Overtime bands 1 to 4.
    pub overtime: [OvertimeBand; 4],
    /// Hours of absence or lateness.
    pub hour_absences_late: Decimal,
    /// Sign of the compensated hours (`+` or `-`).
    pub hour_sign_compensate: String,
    /// Compensated hours balance.
    pub hour_balance_compensate: Decimal,
}
