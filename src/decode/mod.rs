//! Layout-driven decoding of raw record lines.
//!
//! Decoding happens in three steps: the dialect is resolved once for the
//! whole file (see [`detect`]), then every line is decoded on its own by
//! reading its type code, resolving a layout and slicing the fields.

mod detection;
mod file;
mod line;

pub use detection::detect;
pub use file::{FileDecoder, decode_file};
pub use line::{TYPE_CODE_OFFSET, decode_line, slice_line, type_code};
