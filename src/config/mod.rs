//! Providers file loading.
//!
//! Handles reading and parsing the JSON providers list into typed
//! records, with one error variant per failure category.

pub mod loader;

pub use loader::{ConfigError, duplicate_names, load_providers, parse_providers};
