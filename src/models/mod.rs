//! Shared types used across all modules.
//!
//! Defines the provider records read from the providers file and the
//! resolved view produced from them. Other modules import from here
//! rather than reaching into each other's internals.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// A single entry of the providers file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderRecord {
    /// Display name, matched case-insensitively on lookup.
    pub name: String,
    /// Endpoint URL as configured.
    pub base_url: String,
    /// Name of the environment variable holding the token, if any.
    ///
    /// Absent, `null` and `""` all deserialize to `None`.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub token_env_key: Option<String>,
}

impl ProviderRecord {
    /// Returns `true` if this record's name equals `name`, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Outcome of looking up a provider's token in the environment.
#[derive(Clone, PartialEq, Eq)]
pub enum TokenStatus {
    /// The variable is set; holds its exact value.
    Value(String),
    /// The provider has no `token_env_key`.
    NotRequired,
    /// The variable named by the key is unset or empty.
    NotFound(String),
}

impl TokenStatus {
    /// The token itself, when one was found.
    pub fn value(&self) -> Option<&str> {
        match self {
            TokenStatus::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Short machine-readable label used by the JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            TokenStatus::Value(_) => "set",
            TokenStatus::NotRequired => "not_required",
            TokenStatus::NotFound(_) => "not_found",
        }
    }
}

impl fmt::Display for TokenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenStatus::Value(v) => write!(f, "{v}"),
            TokenStatus::NotRequired => write!(f, "No token required"),
            TokenStatus::NotFound(key) => write!(f, "Environment variable '{key}' not found"),
        }
    }
}

impl fmt::Debug for TokenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenStatus::Value(_) => f.write_str("Value([REDACTED])"),
            TokenStatus::NotRequired => f.write_str("NotRequired"),
            TokenStatus::NotFound(key) => f.debug_tuple("NotFound").field(key).finish(),
        }
    }
}

/// A provider with its base URL and token resolved against the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    pub name: String,
    pub base_url: String,
    pub token_env_key: Option<String>,
    pub token: TokenStatus,
}
