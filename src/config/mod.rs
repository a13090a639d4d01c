//! Configuration loading for the AFD reader.
//!
//! The reader can be configured from a YAML file that pins the file
//! dialect and chooses how loudly unknown record types are reported.
//!
//! # Example
//!
//! ```no_run
//! use afd_reader::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/reader.yaml").unwrap();
//! println!("Dialect: {:?}", loader.config().dialect);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::ReaderConfig;
