//! AFDT aggregation.

use tracing::debug;

use crate::error::ReaderResult;
use crate::models::{DateKey, Dialect, ExtendedByUser, ExtendedPunch, Record};

use super::is_punch;

/// Groups AFDT details by employee, clock date and direction order.
///
/// AFDT records already carry their direction and ordering, so nothing is
/// inferred; records sharing a bucket keep their file order.
pub fn aggregate_extended(records: &[Record]) -> ReaderResult<ExtendedByUser> {
    let mut by_user = ExtendedByUser::new();
    let mut punches = 0usize;

    for record in records.iter().filter(|r| is_punch(r, Dialect::Extended)) {
        let clock_date = record.date("clock_date")?;
        let punch = ExtendedPunch {
            sequence: record.number("sequence")?,
            date_time: clock_date.and_time(record.time("clock_time")?),
            reason: record.text("reason")?.to_string(),
            direction: record.text("direction")?.to_string(),
            registry_type: record.registry("registry_type")?,
        };

        by_user
            .entry(record.text("identity_number")?.to_string())
            .or_default()
            .entry(DateKey::from(clock_date))
            .or_default()
            .entry(record.number("direction_order")?)
            .or_default()
            .push(punch);
        punches += 1;
    }

    debug!(employees = by_user.len(), punches, "Aggregated AFDT details");
    Ok(by_user)
}
