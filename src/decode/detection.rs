//! Dialect detection from the trailer line.

use crate::error::{ReaderError, ReaderResult};
use crate::models::Dialect;

/// Detects the dialect of a file from its second-to-last line.
///
/// The line at index `count - 2` is trimmed and its character length
/// matched exactly: 34 is [`Dialect::Standard`], 55 is
/// [`Dialect::Extended`] and 91 is [`Dialect::ContractualHours`]. Any
/// other length, or a sequence shorter than two lines, is an
/// [`ReaderError::UnrecognizedDialect`].
///
/// # Example
///
/// ```
/// use afd_reader::decode::detect;
/// use afd_reader::models::Dialect;
///
/// let lines = ["000000001300000000001", "0000000023010120210800000000000001", "999999999"];
/// assert_eq!(detect(&lines).unwrap(), Dialect::Standard);
/// ```
pub fn detect<S: AsRef<str>>(lines: &[S]) -> ReaderResult<Dialect> {
    let length = lines
        .len()
        .checked_sub(2)
        .map(|index| lines[index].as_ref().trim().chars().count())
        .unwrap_or(0);

    Dialect::ALL
        .into_iter()
        .find(|dialect| dialect.trailer_length() == length)
        .ok_or(ReaderError::UnrecognizedDialect { length })
}
