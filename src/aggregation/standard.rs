//! AFD aggregation with alternating entry/exit inference.
//!
//! AFD marks carry no direction. Within one employee's day the first mark
//! is an entry, the next an exit, and so on; each completed entry/exit
//! pair closes a period.

use std::collections::HashMap;

use tracing::debug;

use crate::error::ReaderResult;
use crate::models::{DateKey, Dialect, Direction, Record, StandardByUser, StandardPunch};

use super::is_punch;

/// Direction state for one employee on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PunchState {
    ExpectingIn,
    ExpectingOut,
}

#[derive(Debug, Clone, Copy)]
struct DayCursor {
    state: PunchState,
    period: u32,
}

impl DayCursor {
    fn new() -> Self {
        Self {
            state: PunchState::ExpectingIn,
            period: 1,
        }
    }

    /// Returns the period and direction of the next punch and advances.
    fn advance(&mut self) -> (u32, Direction) {
        let period = self.period;
        match self.state {
            PunchState::ExpectingIn => {
                self.state = PunchState::ExpectingOut;
                (period, Direction::In)
            }
            PunchState::ExpectingOut => {
                self.state = PunchState::ExpectingIn;
                self.period += 1;
                (period, Direction::Out)
            }
        }
    }
}

/// Groups AFD marks by employee, day and period.
///
/// Only type `3` records participate. Records must be supplied in file
/// order since directions are inferred from encounter order.
///
/// # Example
///
/// ```
/// use afd_reader::aggregation::aggregate_standard;
/// use afd_reader::decode::decode_file;
/// use afd_reader::models::{DateKey, Direction, Dialect};
/// use chrono::NaiveDate;
///
/// let lines = [
///     "0000000013010120210800000000000001",
///     "0000000023010120211200000000000001",
/// ];
/// let records = decode_file(&lines, Some(Dialect::Standard)).unwrap();
/// let by_user = aggregate_standard(&records).unwrap();
///
/// let day = DateKey::from(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
/// let period = &by_user["000000000001"][&day][&1];
/// assert_eq!(period[0].direction, Direction::In);
/// assert_eq!(period[1].direction, Direction::Out);
/// ```
pub fn aggregate_standard(records: &[Record]) -> ReaderResult<StandardByUser> {
    let mut by_user = StandardByUser::new();
    let mut cursors: HashMap<(String, DateKey), DayCursor> = HashMap::new();

    for record in records
        .iter()
        .filter(|r| is_punch(r, Dialect::Standard))
    {
        let employee = record.text("identity_number")?;
        let date = record.date("date")?;
        let time = record.time("time")?;
        let day = DateKey::from(date);

        let (period, direction) = cursors
            .entry((employee.to_string(), day))
            .or_insert_with(DayCursor::new)
            .advance();

        by_user
            .entry(employee.to_string())
            .or_default()
            .entry(day)
            .or_default()
            .entry(period)
            .or_default()
            .push(StandardPunch {
                sequence: record.number("sequence")?,
                date_time: date.and_time(time),
                direction,
            });
    }

    debug!(
        employees = by_user.len(),
        days = cursors.len(),
        "Aggregated AFD marks"
    );
    Ok(by_user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_file;
    use chrono::{NaiveDate, NaiveDateTime};
    use proptest::prelude::*;

    fn mark(sequence: u32, date: &str, time: &str, employee: &str) -> String {
        format!("{:09}3{}{}{:>12}", sequence, date, time, employee)
    }

    fn aggregate(lines: &[String]) -> StandardByUser {
        let records = decode_file(lines, Some(Dialect::Standard)).unwrap();
        aggregate_standard(&records).unwrap()
    }

    fn day(d: u32, m: u32, y: i32) -> DateKey {
        DateKey::from(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn at(d: u32, m: u32, y: i32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_three_punches_open_a_second_period() {
        let lines = vec![
            mark(1, "01012021", "0800", "00000000001"),
            mark(2, "01012021", "1200", "00000000001"),
            mark(3, "01012021", "1300", "00000000001"),
        ];
        let by_user = aggregate(&lines);
        let periods = &by_user["00000000001"][&day(1, 1, 2021)];

        assert_eq!(periods.len(), 2);
        assert_eq!(
            periods[&1],
            vec![
                StandardPunch {
                    sequence: 1,
                    date_time: at(1, 1, 2021, 8, 0),
                    direction: Direction::In,
                },
                StandardPunch {
                    sequence: 2,
                    date_time: at(1, 1, 2021, 12, 0),
                    direction: Direction::Out,
                },
            ]
        );
        assert_eq!(
            periods[&2],
            vec![StandardPunch {
                sequence: 3,
                date_time: at(1, 1, 2021, 13, 0),
                direction: Direction::In,
            }]
        );
    }

    #[test]
    fn test_state_is_tracked_per_employee_and_day() {
        let lines = vec![
            mark(1, "01012021", "0800", "1"),
            mark(2, "01012021", "0805", "2"),
            mark(3, "02012021", "0800", "1"),
            mark(4, "01012021", "1700", "1"),
        ];
        let by_user = aggregate(&lines);

        let first_day = &by_user["1"][&day(1, 1, 2021)][&1];
        assert_eq!(first_day.len(), 2);
        assert_eq!(first_day[1].sequence, 4);
        assert_eq!(first_day[1].direction, Direction::Out);

        let second_day = &by_user["1"][&day(2, 1, 2021)][&1];
        assert_eq!(second_day[0].direction, Direction::In);

        let other = &by_user["2"][&day(1, 1, 2021)][&1];
        assert_eq!(other[0].direction, Direction::In);
    }

    fn header() -> String {
        format!(
            "0000000001112345678000199{:12}{:<150}{:017}010120213101202101022021{}",
            "", "EMPRESA TESTE LTDA", 1, "1030"
        )
    }

    #[test]
    fn test_non_mark_records_are_ignored() {
        let lines = vec![
            header(),
            "0000000044010120210800010120210805".to_string(),
            mark(5, "01012021", "0800", "1"),
            "999999999000000000000000001000000000000000000009".to_string(),
        ];
        let by_user = aggregate(&lines);

        assert_eq!(by_user.len(), 1);
        assert_eq!(by_user["1"][&day(1, 1, 2021)][&1].len(), 1);
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        assert!(aggregate_standard(&[]).unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn prop_directions_alternate_and_periods_advance(
            punches in prop::collection::vec((0u8..3, 0u8..2), 0..40),
        ) {
            let lines: Vec<String> = punches
                .iter()
                .enumerate()
                .map(|(i, (employee, d))| {
                    mark(i as u32 + 1, &format!("0{}012021", d + 1), "0800", &employee.to_string())
                })
                .collect();
            let by_user = aggregate(&lines);

            let mut total = 0;
            for days in by_user.values() {
                for periods in days.values() {
                    let count = periods.len() as u32;
                    for (expected, (period, events)) in (1..).zip(periods) {
                        prop_assert_eq!(*period, expected);
                        total += events.len();
                        if *period < count {
                            prop_assert_eq!(events.len(), 2);
                        }
                        prop_assert_eq!(events[0].direction, Direction::In);
                        if let Some(second) = events.get(1) {
                            prop_assert_eq!(second.direction, Direction::Out);
                        }
                        prop_assert!(events.windows(2).all(|w| w[0].sequence < w[1].sequence));
                    }
                }
            }
            prop_assert_eq!(total, punches.len());
        }
    }
}
