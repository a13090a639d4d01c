//! Configuration types for the AFD reader.

use serde::Deserialize;

use crate::models::Dialect;

/// Reader configuration, deserialized from YAML.
///
/// Every field is optional; an empty document yields the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderConfig {
    /// Dialect to decode with. `None` detects it from the trailer line.
    pub dialect: Option<Dialect>,
    /// Log lines with unknown type codes at warn level instead of debug.
    pub warn_on_unknown_type: bool,
}

impl ReaderConfig {
    /// A configuration pinned to `dialect`.
    pub fn with_dialect(dialect: Dialect) -> Self {
        Self {
            dialect: Some(dialect),
            ..Self::default()
        }
    }
}
