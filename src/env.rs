//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`] which delegates to [`std::env::var_os`].
//! Tests use [`Env::mock()`] backed by a `HashMap`, so provider lookups can
//! be checked without `unsafe` calls to [`std::env::set_var`].

use std::collections::HashMap;
use std::ffi::OsString;

/// Environment variable reader.
///
/// Values are kept as `OsString` so a variable holding non-UTF-8 bytes
/// still counts as set.
#[derive(Clone, Debug)]
pub struct Env {
    overrides: Option<HashMap<String, OsString>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<OsString>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Raw value of a variable, if present.
    pub fn var_os(&self, name: &str) -> Option<OsString> {
        match &self.overrides {
            Some(map) => map.get(name).cloned(),
            None => std::env::var_os(name),
        }
    }

    /// Look up a variable, treating an empty value the same as an unset one.
    ///
    /// Non-UTF-8 bytes are replaced with `U+FFFD`.
    pub fn non_empty(&self, name: &str) -> Option<String> {
        self.var_os(name)
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string_lossy().into_owned())
    }
}
