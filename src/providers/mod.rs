//! Provider resolution.
//!
//! Looks a provider up by name and resolves its base URL and token
//! against the environment. All environment reads go through [`Env`]
//! so the resolver can be exercised without touching process state.

use thiserror::Error;

use crate::constants::{ENV_OPENAI_BASE_URL, OPENAI_PROVIDER};
use crate::env::Env;
use crate::models::{ProviderRecord, ResolvedProvider, TokenStatus};

/// Errors from provider resolution.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider '{name}' not found.\n\nAvailable providers:{}", list_names(.available))]
    NotFound {
        name: String,
        /// Every known provider name, in file order.
        available: Vec<String>,
    },
}

fn list_names(names: &[String]) -> String {
    names.iter().map(|n| format!("\n  - {n}")).collect()
}

/// Find the first record whose name matches `name`, ignoring case.
pub fn find_provider<'a>(records: &'a [ProviderRecord], name: &str) -> Option<&'a ProviderRecord> {
    records.iter().find(|r| r.matches(name))
}

/// Resolve the token named by `env_key`.
///
/// A missing key means the provider needs no token. A key whose variable
/// is unset or empty yields [`TokenStatus::NotFound`].
pub fn resolve_token(env_key: Option<&str>, env: &Env) -> TokenStatus {
    match env_key.filter(|k| !k.is_empty()) {
        None => TokenStatus::NotRequired,
        Some(key) => match env.non_empty(key) {
            Some(value) => TokenStatus::Value(value),
            None => TokenStatus::NotFound(key.to_string()),
        },
    }
}

/// Resolve the base URL for `record`.
///
/// For the OpenAI provider a non-empty `OPENAI_BASE_URL` replaces the
/// configured value.
pub fn resolve_base_url(record: &ProviderRecord, env: &Env) -> String {
    if record.matches(OPENAI_PROVIDER) {
        if let Some(url) = env.non_empty(ENV_OPENAI_BASE_URL) {
            tracing::debug!(var = ENV_OPENAI_BASE_URL, url = %url, "base URL overridden from environment");
            return url;
        }
    }
    record.base_url.clone()
}

/// Look up `name` in `records` and resolve it against `env`.
pub fn resolve(
    records: &[ProviderRecord],
    name: &str,
    env: &Env,
) -> Result<ResolvedProvider, ProviderError> {
    let record = find_provider(records, name).ok_or_else(|| ProviderError::NotFound {
        name: name.to_string(),
        available: records.iter().map(|r| r.name.clone()).collect(),
    })?;
    tracing::debug!(requested = name, matched = %record.name, "provider found");

    Ok(ResolvedProvider {
        name: record.name.clone(),
        base_url: resolve_base_url(record, env),
        token_env_key: record.token_env_key.clone(),
        token: resolve_token(record.token_env_key.as_deref(), env),
    })
}
