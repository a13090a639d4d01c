//! Single-line positional decoding.

use crate::error::ReaderResult;
use crate::layout::{LineLayout, resolve};
use crate::models::{Dialect, FieldValue, Record};

/// Character offset of the type code in every record of every dialect.
pub const TYPE_CODE_OFFSET: usize = 9;

/// Reads the type code at [`TYPE_CODE_OFFSET`], if the line is long enough.
pub fn type_code(line: &str) -> Option<char> {
    line.chars().nth(TYPE_CODE_OFFSET)
}

/// Slices a line into the raw substrings of each layout field.
///
/// Offsets are cumulative character counts. A line shorter than the
/// layout yields shorter, possibly empty, trailing slices; nothing is
/// padded.
///
/// # Example
///
/// ```
/// use afd_reader::decode::slice_line;
/// use afd_reader::layout::resolve;
/// use afd_reader::models::Dialect;
///
/// let layout = resolve(Dialect::Standard, '3').unwrap();
/// let slices = slice_line("0000000053010120210800000000000001", &layout);
/// assert_eq!(slices, vec!["000000005", "3", "01012021", "0800", "000000000001"]);
/// ```
pub fn slice_line<'a>(line: &'a str, layout: &LineLayout) -> Vec<&'a str> {
    let mut rest = line;
    layout
        .fields()
        .iter()
        .map(|field| {
            let end = rest
                .char_indices()
                .nth(field.width)
                .map(|(index, _)| index)
                .unwrap_or(rest.len());
            let (slice, tail) = rest.split_at(end);
            rest = tail;
            slice
        })
        .collect()
}

/// Decodes one line into a [`Record`].
///
/// A line whose type code has no layout in `dialect` decodes to an empty
/// record. Formatter failures are returned with the failing field name.
///
/// # Example
///
/// ```
/// use afd_reader::decode::decode_line;
/// use afd_reader::models::Dialect;
///
/// let record = decode_line("0000000053010120210800000000000001", Dialect::Standard).unwrap();
/// assert_eq!(record.number("sequence").unwrap(), 5);
/// assert_eq!(record.text("identity_number").unwrap(), "000000000001");
///
/// let skipped = decode_line("0000000017", Dialect::Standard).unwrap();
/// assert!(skipped.is_empty());
/// ```
pub fn decode_line(line: &str, dialect: Dialect) -> ReaderResult<Record> {
    let Some(layout) = type_code(line).and_then(|code| resolve(dialect, code)) else {
        return Ok(Record::empty());
    };

    let mut record = Record::new(layout.kind());
    for (field, raw) in layout.fields().iter().zip(slice_line(line, &layout)) {
        let value = match field.formatter {
            Some(formatter) => formatter.format(raw).map_err(|e| e.at_field(field.name))?,
            None => FieldValue::from(raw),
        };
        record.insert(field.name, value);
    }

    Ok(record)
}
