//! Provider records and the JSON loading logic.
//!
//! The file is a JSON array of provider objects. Records keep their file
//! order, which decides which entry wins when names collide.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::ProviderRecord;

/// Errors while reading the providers file.
///
/// The underlying I/O or JSON error is kept as the `source`, so render
/// with `{:#}` to get the full message.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File '{}' not found.", .path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid JSON in '{}'", .path.display())]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Error reading file '{}'", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Load provider records from a JSON file, preserving their order.
pub fn load_providers(path: &Path) -> Result<Vec<ProviderRecord>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let providers = parse_providers(&content).map_err(|e| ConfigError::InvalidJson {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), count = providers.len(), "loaded providers");
    for name in duplicate_names(&providers) {
        tracing::warn!(provider = %name, "duplicate provider name; the first entry wins");
    }
    Ok(providers)
}

/// Names that appear more than once (ignoring case), reported once each
/// using the spelling of their first occurrence.
pub fn duplicate_names(providers: &[ProviderRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for record in providers {
        let key = record.name.to_lowercase();
        if !seen.insert(key.clone()) && reported.insert(key.clone()) {
            let first = providers
                .iter()
                .find(|r| r.name.to_lowercase() == key)
                .map_or(record.name.as_str(), |r| r.name.as_str());
            duplicates.push(first);
        }
    }
    duplicates
}

/// Parse provider records from a JSON string.
pub fn parse_providers(content: &str) -> Result<Vec<ProviderRecord>, serde_json::Error> {
    serde_json::from_str(content)
}
