//! Static field layouts for every registered record type.
//!
//! A layout is an ordered list of [`FieldDescriptor`]s. Field offsets are
//! never stored: each field starts where the previous one ends, so field
//! *i* begins at the sum of the widths of fields `0..i`.

mod contractual_hours;
mod extended;
mod standard;

use crate::format::FieldFormatter;
use crate::models::{Dialect, RecordKind, record_kind};

/// Describes one positional field of a record.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// The field name used as the record key.
    pub name: &'static str,
    /// The field width in characters.
    pub width: usize,
    /// The formatter applied to the raw slice, if any.
    pub formatter: Option<&'static dyn FieldFormatter>,
}

impl FieldDescriptor {
    /// A field kept as its untouched raw slice.
    pub const fn raw(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            formatter: None,
        }
    }

    /// A field passed through `formatter`.
    pub const fn formatted(
        name: &'static str,
        width: usize,
        formatter: &'static dyn FieldFormatter,
    ) -> Self {
        Self {
            name,
            width,
            formatter: Some(formatter),
        }
    }
}

/// The resolved layout of one record type.
#[derive(Debug, Clone, Copy)]
pub struct LineLayout {
    kind: RecordKind,
    fields: &'static [FieldDescriptor],
}

impl LineLayout {
    /// The record kind this layout decodes.
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// The field descriptors in positional order.
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    /// Total record width in characters.
    pub fn width(&self) -> usize {
        self.fields.iter().map(|f| f.width).sum()
    }
}

/// Resolves the layout for a type code in a dialect.
///
/// Returns `None` when the dialect has no record of that type. Absence is
/// not an error; it tells the decoder to skip the line.
///
/// # Example
///
/// ```
/// use afd_reader::layout::resolve;
/// use afd_reader::models::{Dialect, RecordKind};
///
/// let layout = resolve(Dialect::Standard, '3').unwrap();
/// assert_eq!(layout.kind(), RecordKind::Mark);
/// assert_eq!(layout.width(), 34);
///
/// assert!(resolve(Dialect::Standard, '7').is_none());
/// ```
pub fn resolve(dialect: Dialect, type_code: char) -> Option<LineLayout> {
    let kind = record_kind(dialect, type_code)?;
    let fields = match (dialect, kind) {
        (Dialect::Standard, RecordKind::Header) => standard::HEADER,
        (Dialect::Standard, RecordKind::CompanyChange) => standard::COMPANY_CHANGE,
        (Dialect::Standard, RecordKind::Mark) => standard::MARK,
        (Dialect::Standard, RecordKind::MarkAdjust) => standard::MARK_ADJUST,
        (Dialect::Standard, RecordKind::Employee) => standard::EMPLOYEE,
        (Dialect::Extended, RecordKind::Header) => extended::HEADER,
        (Dialect::Extended, RecordKind::Detail) => extended::DETAIL,
        (Dialect::Extended, RecordKind::Trailer) => extended::TRAILER,
        (Dialect::ContractualHours, RecordKind::Header) => contractual_hours::HEADER,
        (Dialect::ContractualHours, RecordKind::ContractualHours) => {
            contractual_hours::CONTRACTUAL_HOURS
        }
        (Dialect::ContractualHours, RecordKind::Detail) => contractual_hours::DETAIL,
        _ => return None,
    };
    Some(LineLayout { kind, fields })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TYPE_FIELD;

    const ALL_CODES: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

    fn registered() -> Vec<(Dialect, char, LineLayout)> {
        Dialect::ALL
            .iter()
            .flat_map(|&d| {
                ALL_CODES
                    .into_iter()
                    .filter_map(move |c| resolve(d, c).map(|layout| (d, c, layout)))
            })
            .collect()
    }

    #[test]
    fn test_every_registered_kind_has_a_layout() {
        for dialect in Dialect::ALL {
            for code in ALL_CODES {
                assert_eq!(
                    record_kind(dialect, code).is_some(),
                    resolve(dialect, code).is_some(),
                    "{:?} type {}",
                    dialect,
                    code
                );
            }
        }
    }

    #[test]
    fn test_type_field_sits_at_offset_nine() {
        for (dialect, code, layout) in registered() {
            let mut offset = 0;
            let mut found = false;
            for field in layout.fields() {
                if field.name == TYPE_FIELD {
                    assert_eq!(offset, 9, "{:?} type {}", dialect, code);
                    assert_eq!(field.width, 1);
                    assert!(field.formatter.is_none());
                    found = true;
                }
                offset += field.width;
            }
            assert!(found, "{:?} type {} has no type field", dialect, code);
        }
    }

    #[test]
    fn test_field_widths_are_positive_and_names_unique() {
        for (dialect, code, layout) in registered() {
            let mut names: Vec<_> = layout.fields().iter().map(|f| f.name).collect();
            assert!(layout.fields().iter().all(|f| f.width > 0));
            names.sort_unstable();
            names.dedup();
            assert_eq!(
                names.len(),
                layout.fields().len(),
                "{:?} type {} repeats a field name",
                dialect,
                code
            );
        }
    }

    #[test]
    fn test_record_widths() {
        let width = |d, c| resolve(d, c).unwrap().width();

        assert_eq!(width(Dialect::Standard, '1'), 232);
        assert_eq!(width(Dialect::Standard, '2'), 299);
        assert_eq!(width(Dialect::Standard, '3'), 34);
        assert_eq!(width(Dialect::Standard, '4'), 34);
        assert_eq!(width(Dialect::Standard, '5'), 87);
        assert_eq!(width(Dialect::Extended, '1'), 215);
        assert_eq!(width(Dialect::Extended, '2'), 155);
        assert_eq!(width(Dialect::Extended, '9'), 10);
        assert_eq!(width(Dialect::ContractualHours, '1'), 215);
        assert_eq!(width(Dialect::ContractualHours, '2'), 30);
        assert_eq!(width(Dialect::ContractualHours, '3'), 91);
    }

    #[test]
    fn test_punch_records_match_trailer_lengths() {
        // Detection measures the last punch line, so its width is the dialect marker
        assert_eq!(
            resolve(Dialect::Standard, '3').unwrap().width(),
            Dialect::Standard.trailer_length()
        );
        assert_eq!(
            resolve(Dialect::ContractualHours, '3').unwrap().width(),
            Dialect::ContractualHours.trailer_length()
        );
        // AFDT details end with a 100-character reason that is blank on clock punches
        assert_eq!(
            resolve(Dialect::Extended, '2').unwrap().width() - 100,
            Dialect::Extended.trailer_length()
        );
    }
}
