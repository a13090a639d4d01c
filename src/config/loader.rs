//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading reader
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{ReaderError, ReaderResult};

use super::types::ReaderConfig;

/// Loads and provides access to reader configuration.
///
/// # Example
///
/// ```no_run
/// use afd_reader::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/reader.yaml")?;
/// let config = loader.config();
/// # Ok::<(), afd_reader::error::ReaderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ReaderConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML or has unknown keys (`ConfigParseError`)
    ///
    /// A file holding only comments or whitespace yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> ReaderResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReaderError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = if is_blank(&content) {
            ReaderConfig::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| ReaderError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?
        };

        info!(path = %path_str, dialect = ?config.dialect, "Loaded reader configuration");
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ReaderConfig {
        self.config
    }
}

/// True if the document holds nothing but comments and whitespace.
fn is_blank(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}
