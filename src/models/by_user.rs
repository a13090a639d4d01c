//! Per-employee aggregation maps.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{ContractualHoursEntry, DateKey, Dialect, ExtendedPunch, StandardPunch};

/// AFD punches: employee → date → period → punches.
pub type StandardByUser = BTreeMap<String, BTreeMap<DateKey, BTreeMap<u32, Vec<StandardPunch>>>>;

/// AFDT punches: employee → clock date → direction order → punches.
pub type ExtendedByUser = BTreeMap<String, BTreeMap<DateKey, BTreeMap<u64, Vec<ExtendedPunch>>>>;

/// ACJEF summaries: employee → entries in line order.
pub type ContractualHoursByUser = BTreeMap<String, Vec<ContractualHoursEntry>>;

/// The aggregated view of a file, shaped by its dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ByUser {
    /// AFD aggregation.
    Standard(StandardByUser),
    /// AFDT aggregation.
    Extended(ExtendedByUser),
    /// ACJEF aggregation.
    ContractualHours(ContractualHoursByUser),
}

impl ByUser {
    /// The dialect this aggregation was built for.
    pub fn dialect(&self) -> Dialect {
        match self {
            ByUser::Standard(_) => Dialect::Standard,
            ByUser::Extended(_) => Dialect::Extended,
            ByUser::ContractualHours(_) => Dialect::ContractualHours,
        }
    }

    /// Number of distinct employees.
    pub fn employee_count(&self) -> usize {
        match self {
            ByUser::Standard(map) => map.len(),
            ByUser::Extended(map) => map.len(),
            ByUser::ContractualHours(map) => map.len(),
        }
    }

    /// Returns the AFD map if this is a Standard aggregation.
    pub fn as_standard(&self) -> Option<&StandardByUser> {
        match self {
            ByUser::Standard(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the AFDT map if this is an Extended aggregation.
    pub fn as_extended(&self) -> Option<&ExtendedByUser> {
        match self {
            ByUser::Extended(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the ACJEF map if this is a ContractualHours aggregation.
    pub fn as_contractual_hours(&self) -> Option<&ContractualHoursByUser> {
        match self {
            ByUser::ContractualHours(map) => Some(map),
            _ => None,
        }
    }
}
