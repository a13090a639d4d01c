//! Core data models for the AFD reader.
//!
//! This module contains the dialect vocabulary, decoded records and the
//! punch events and per-employee maps produced by aggregation.

mod by_user;
mod dialect;
mod punch;
mod record;
mod value;

pub use by_user::{ByUser, ContractualHoursByUser, ExtendedByUser, StandardByUser};
pub use dialect::{Dialect, RecordKind, record_kind};
pub use punch::{ContractualHoursEntry, Direction, ExtendedPunch, OvertimeBand, StandardPunch};
pub use record::{Record, TYPE_FIELD};
pub use value::{DateKey, FieldValue, RegistryKind};
