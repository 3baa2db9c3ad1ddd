//! App-wide constants.
//!
//! Centralises the tool name, default paths, and environment variable
//! names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "provider-info";

/// Crate version, as reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Provider looked up when no name is given on the command line.
pub const DEFAULT_PROVIDER: &str = "OpenAI";

/// Providers file read when `--json-file` is not given.
pub const DEFAULT_JSON_FILE: &str = "providers.json";

/// Provider name (compared case-insensitively) whose base URL can be
/// overridden from the environment.
pub const OPENAI_PROVIDER: &str = "openai";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_JSON_FILE: &str = "PROVIDER_INFO_JSON_FILE";
pub const ENV_LOG: &str = "RUST_LOG";
