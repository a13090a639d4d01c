//! AFD record layouts.

use crate::format::{Alphanumeric, Date, Numeric, Time};

use super::FieldDescriptor;

pub(super) static HEADER: &[FieldDescriptor] = &[
    FieldDescriptor::formatted("sequence", 9, &Numeric),
    FieldDescriptor::raw("type", 1),
    FieldDescriptor::formatted("employer_id_type", 1, &Numeric),
    FieldDescriptor::formatted("employer_id", 14, &Alphanumeric),
    FieldDescriptor::formatted("cei", 12, &Alphanumeric),
    FieldDescriptor::formatted("company_name", 150, &Alphanumeric),
    FieldDescriptor::formatted("rep_number", 17, &Alphanumeric),
    FieldDescriptor::formatted("start_date", 8, &Date),
    FieldDescriptor::formatted("end_date", 8, &Date),
    FieldDescriptor::formatted("generation_date", 8, &Date),
    FieldDescriptor::formatted("generation_time", 4, &Time),
];

pub(super) static COMPANY_CHANGE: &[FieldDescriptor] = &[
    FieldDescriptor::formatted("sequence", 9, &Numeric),
    FieldDescriptor::raw("type", 1),
    FieldDescriptor::formatted("recorded_date", 8, &Date),
    FieldDescriptor::formatted("recorded_time", 4, &Time),
    FieldDescriptor::formatted("employer_id_type", 1, &Numeric),
    FieldDescriptor::formatted("employer_id", 14, &Alphanumeric),
    FieldDescriptor::formatted("cei", 12, &Alphanumeric),
    FieldDescriptor::formatted("company_name", 150, &Alphanumeric),
    FieldDescriptor::formatted("location", 100, &Alphanumeric),
];

pub(super) static MARK: &[FieldDescriptor] = &[
    FieldDescriptor::formatted("sequence", 9, &Numeric),
    FieldDescriptor::raw("type", 1),
    FieldDescriptor::formatted("date", 8, &Date),
    FieldDescriptor::formatted("time", 4, &Time),
    FieldDescriptor::formatted("identity_number", 12, &Alphanumeric),
];

pub(super) static MARK_ADJUST: &[FieldDescriptor] = &[
    FieldDescriptor::formatted("sequence", 9, &Numeric),
    FieldDescriptor::raw("type", 1),
    FieldDescriptor::formatted("date_before", 8, &Date),
    FieldDescriptor::formatted("time_before", 4, &Time),
    FieldDescriptor::formatted("date_adjusted", 8, &Date),
    FieldDescriptor::formatted("time_adjusted", 4, &Time),
];

// Operation is I (inclusion), A (change) or E (removal).
pub(super) static EMPLOYEE: &[FieldDescriptor] = &[
    FieldDescriptor::formatted("sequence", 9, &Numeric),
    FieldDescriptor::raw("type", 1),
    FieldDescriptor::formatted("recorded_date", 8, &Date),
    FieldDescriptor::formatted("recorded_time", 4, &Time),
    FieldDescriptor::formatted("operation", 1, &Alphanumeric),
    FieldDescriptor::formatted("identity_number", 12, &Alphanumeric),
    FieldDescriptor::formatted("employee_name", 52, &Alphanumeric),
];
