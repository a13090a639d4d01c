//! ACJEF record layouts.

use crate::format::{Alphanumeric, Date, Hours, Numeric, Time};

use super::FieldDescriptor;

pub(super) static HEADER: &[FieldDescriptor] = &[
    FieldDescriptor::formatted("sequence", 9, &Numeric),
    FieldDescriptor::raw("type", 1),
    FieldDescriptor::formatted("employer_id_type", 1, &Numeric),
    FieldDescriptor::formatted("employer_id", 14, &Alphanumeric),
    FieldDescriptor::formatted("cei", 12, &Alphanumeric),
    FieldDescriptor::formatted("company_name", 150, &Alphanumeric),
    FieldDescriptor::formatted("start_date", 8, &Date),
    FieldDescriptor::formatted("end_date", 8, &Date),
    FieldDescriptor::formatted("generation_date", 8, &Date),
    FieldDescriptor::formatted("generation_time", 4, &Time),
];

pub(super) static CONTRACTUAL_HOURS: &[FieldDescriptor] = &[
    FieldDescriptor::formatted("sequence", 9, &Numeric),
    FieldDescriptor::raw("type", 1),
    FieldDescriptor::formatted("hour_code", 4, &Numeric),
    FieldDescriptor::formatted("entry_1", 4, &Time),
    FieldDescriptor::formatted("exit_1", 4, &Time),
    FieldDescriptor::formatted("entry_2", 4, &Time),
    FieldDescriptor::formatted("exit_2", 4, &Time),
];

pub(super) static DETAIL: &[FieldDescriptor] = &[
    FieldDescriptor::formatted("sequence", 9, &Numeric),
    FieldDescriptor::raw("type", 1),
    FieldDescriptor::formatted("identity_number", 12, &Alphanumeric),
    FieldDescriptor::formatted("start_date", 8, &Date),
    FieldDescriptor::formatted("first_hour", 4, &Time),
    FieldDescriptor::formatted("hour_code", 4, &Numeric),
    FieldDescriptor::formatted("day_time", 4, &Hours),
    FieldDescriptor::formatted("night_time", 4, &Hours),
    FieldDescriptor::formatted("overtime_1", 4, &Hours),
    FieldDescriptor::formatted("overtime_percentage_1", 4, &Numeric),
    FieldDescriptor::formatted("overtime_modality_1", 1, &Alphanumeric),
    FieldDescriptor::formatted("overtime_2", 4, &Hours),
    FieldDescriptor::formatted("overtime_percentage_2", 4, &Numeric),
    FieldDescriptor::formatted("overtime_modality_2", 1, &Alphanumeric),
    FieldDescriptor::formatted("overtime_3", 4, &Hours),
    FieldDescriptor::formatted("overtime_percentage_3", 4, &Numeric),
    FieldDescriptor::formatted("overtime_modality_3", 1, &Alphanumeric),
    FieldDescriptor::formatted("overtime_4", 4, &Hours),
    FieldDescriptor::formatted("overtime_percentage_4", 4, &Numeric),
    FieldDescriptor::formatted("overtime_modality_4", 1, &Alphanumeric),
    FieldDescriptor::formatted("hour_absences_late", 4, &Hours),
    FieldDescriptor::formatted("hour_sign_compensate", 1, &Alphanumeric),
    FieldDescriptor::formatted("hour_balance_compensate", 4, &Hours),
];
