//! ACJEF aggregation.

use tracing::debug;

use crate::error::{ReaderError, ReaderResult};
use crate::models::{
    ContractualHoursByUser, ContractualHoursEntry, DateKey, Dialect, OvertimeBand, Record,
    TYPE_FIELD,
};

use super::is_punch;

const OVERTIME_FIELDS: [(&str, &str, &str); 4] = [
    ("overtime_1", "overtime_percentage_1", "overtime_modality_1"),
    ("overtime_2", "overtime_percentage_2", "overtime_modality_2"),
    ("overtime_3", "overtime_percentage_3", "overtime_modality_3"),
    ("overtime_4", "overtime_percentage_4", "overtime_modality_4"),
];

fn overtime_band(record: &Record, index: usize) -> ReaderResult<OvertimeBand> {
    let (hours, percentage, modality) = OVERTIME_FIELDS[index];
    Ok(OvertimeBand {
        hours: record.hours(hours)?,
        percentage: record.number(percentage)?,
        modality: record.text(modality)?.to_string(),
    })
}

fn summary(record: &Record) -> ReaderResult<ContractualHoursEntry> {
    Ok(ContractualHoursEntry {
        sequence: record.number("sequence")?,
        record_type: record
            .type_code()
            .ok_or(ReaderError::MissingField { field: TYPE_FIELD })?,
        start_date: DateKey::from(record.date("start_date")?),
        first_hour: record.time("first_hour")?,
        hour_code: record.number("hour_code")?,
        day_time: record.hours("day_time")?,
        night_time: record.hours("night_time")?,
        overtime: [
            overtime_band(record, 0)?,
            overtime_band(record, 1)?,
            overtime_band(record, 2)?,
            overtime_band(record, 3)?,
        ],
        hour_absences_late: record.hours("hour_absences_late")?,
        hour_sign_compensate: record.text("hour_sign_compensate")?.to_string(),
        hour_balance_compensate: record.hours("hour_balance_compensate")?,
    })
}

/// Lists ACJEF hour summaries per employee, in file order.
pub fn aggregate_contractual_hours(records: &[Record]) -> ReaderResult<ContractualHoursByUser> {
    let mut by_user = ContractualHoursByUser::new();

    for record in records
        .iter()
        .filter(|r| is_punch(r, Dialect::ContractualHours))
    {
        let entry = summary(record)?;
        by_user
            .entry(record.text("identity_number")?.to_string())
            .or_default()
            .push(entry);
    }

    debug!(employees = by_user.len(), "Aggregated ACJEF summaries");
    Ok(by_user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_file;
    use chrono::NaiveTime;
    use rust_decimal::Decimal;

    fn detail(sequence: u32, employee: &str, date: &str, day_time: &str, overtime: &str) -> String {
        format!(
            "{:09}3{:>12}{}0800{:04}{}0000{}0050D{}0000 {}0000 {}0000 0000+0000",
            sequence, employee, date, 1, day_time, overtime, "0000", "0000", "0000"
        )
    }

    fn contractual_hours() -> String {
        "000000001200010800120013001700".to_string()
    }

    #[test]
    fn test_detail_line_is_ninety_one_characters() {
        assert_eq!(detail(1, "1", "01012021", "0800", "0130").len(), 91);
    }

    #[test]
    fn test_summaries_are_listed_per_employee_in_order() {
        let lines = vec![
            contractual_hours(),
            detail(2, "00000000003", "01012021", "0800", "0130"),
            detail(3, "00000000004", "01012021", "0400", "0000"),
            detail(4, "00000000003", "02012021", "0745", "0000"),
        ];
        let records = decode_file(&lines, Some(Dialect::ContractualHours)).unwrap();
        let by_user = aggregate_contractual_hours(&records).unwrap();

        assert_eq!(by_user.len(), 2);
        let entries = &by_user["00000000003"];
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].sequence, 2);
        assert_eq!(entries[1].sequence, 4);
        assert_eq!(entries[1].start_date.to_string(), "02012021");
        assert_eq!(entries[1].day_time, Decimal::new(775, 2));
    }

    #[test]
    fn test_summary_fields() {
        let lines = vec![detail(2, "9", "01012021", "0800", "0130")];
        let records = decode_file(&lines, Some(Dialect::ContractualHours)).unwrap();
        let by_user = aggregate_contractual_hours(&records).unwrap();
        let entry = &by_user["9"][0];

        assert_eq!(entry.record_type, '3');
        assert_eq!(entry.first_hour, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(entry.hour_code, 1);
        assert_eq!(entry.day_time, Decimal::from(8));
        assert_eq!(entry.night_time, Decimal::ZERO);
        assert_eq!(entry.overtime[0].hours, Decimal::new(15, 1));
        assert_eq!(entry.overtime[0].percentage, 50);
        assert_eq!(entry.overtime[0].modality, "D");
        assert_eq!(entry.overtime[1].modality, "");
        assert_eq!(entry.hour_sign_compensate, "+");
        assert_eq!(entry.hour_balance_compensate, Decimal::ZERO);
    }

    #[test]
    fn test_contractual_hours_table_is_ignored() {
        let records =
            decode_file(&[contractual_hours()], Some(Dialect::ContractualHours)).unwrap();
        assert!(aggregate_contractual_hours(&records).unwrap().is_empty());
    }
}
