//! AFDT record layouts.

use crate::format::{Alphanumeric, Date, Numeric, RegistryType, Time};

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

pub(super) static DETAIL: &[FieldDescriptor] = &[
    FieldDescriptor::formatted("sequence", 9, &Numeric),
    FieldDescriptor::raw("type", 1),
    FieldDescriptor::formatted("clock_date", 8, &Date),
    FieldDescriptor::formatted("clock_time", 4, &Time),
    FieldDescriptor::formatted("identity_number", 12, &Alphanumeric),
    FieldDescriptor::formatted("rep_number", 17, &Alphanumeric),
    FieldDescriptor::formatted("direction", 1, &Alphanumeric),
    FieldDescriptor::formatted("direction_order", 2, &Numeric),
    FieldDescriptor::formatted("registry_type", 1, &RegistryType),
    FieldDescriptor::formatted("reason", 100, &Alphanumeric),
];

pub(super) static TRAILER: &[FieldDescriptor] = &[
    FieldDescriptor::formatted("sequence", 9, &Numeric),
    FieldDescriptor::raw("type", 1),
];
