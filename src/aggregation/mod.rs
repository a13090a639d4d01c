//! Per-employee aggregation of decoded records.
//!
//! Each dialect has its own aggregator. All of them consider only the
//! records whose type code is the dialect's punch type (see
//! [`Dialect::punch_type_code`]) and process them in file order.

mod contractual_hours;
mod extended;
mod standard;

use crate::error::ReaderResult;
use crate::models::{ByUser, Dialect, Record};

pub use contractual_hours::aggregate_contractual_hours;
pub use extended::aggregate_extended;
pub use standard::aggregate_standard;

/// Returns true if `record` takes part in aggregation for `dialect`.
pub fn is_punch(record: &Record, dialect: Dialect) -> bool {
    record.type_code() == Some(dialect.punch_type_code())
}

/// Runs the aggregator that matches `dialect`.
pub fn aggregate(dialect: Dialect, records: &[Record]) -> ReaderResult<ByUser> {
    Ok(match dialect {
        Dialect::Standard => ByUser::Standard(aggregate_standard(records)?),
        Dialect::Extended => ByUser::Extended(aggregate_extended(records)?),
        Dialect::ContractualHours => {
            ByUser::ContractualHours(aggregate_contractual_hours(records)?)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_line;

    #[test]
    fn test_empty_record_is_never_a_punch() {
        for dialect in Dialect::ALL {
            assert!(!is_punch(&Record::empty(), dialect));
        }
    }

    #[test]
    fn test_punch_filter_uses_dialect_code() {
        let mark = decode_line("0000000053010120210800000000000001", Dialect::Standard).unwrap();
        assert!(is_punch(&mark, Dialect::Standard));
        assert!(!is_punch(&mark, Dialect::Extended));
    }

    #[test]
    fn test_aggregate_dispatches_on_dialect() {
        for dialect in Dialect::ALL {
            let by_user = aggregate(dialect, &[]).unwrap();
            assert_eq!(by_user.dialect(), dialect);
            assert_eq!(by_user.employee_count(), 0);
        }
    }
}
