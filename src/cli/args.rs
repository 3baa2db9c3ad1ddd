//! Clap argument types.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use provider_info::constants::{DEFAULT_JSON_FILE, DEFAULT_PROVIDER, ENV_JSON_FILE};
use provider_info::models::ResolvedProvider;

/// Print the base URL and token for a provider listed in a providers file.
///
/// For the OpenAI provider, a non-empty OPENAI_BASE_URL replaces the
/// configured base URL.
#[derive(Parser, Debug)]
#[command(
    name = provider_info::constants::APP_NAME,
    version = provider_info::constants::VERSION,
    after_help = "Examples:\n  provider-info                  # Uses OpenAI by default\n  provider-info Anthropic\n  provider-info --json-file custom_providers.json OpenAI",
)]
pub struct Cli {
    /// Name of the provider to look up (case-insensitive).
    #[arg(default_value = DEFAULT_PROVIDER)]
    pub provider_name: String,

    /// Path to the providers JSON file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_JSON_FILE, env = ENV_JSON_FILE)]
    pub json_file: PathBuf,

    /// Output format.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// List the provider names in the file instead of resolving one.
    #[arg(long, default_value_t = false)]
    pub list: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Render a resolved provider using the renderer for this format.
    pub fn render(&self, resolved: &ResolvedProvider) -> String {
        use provider_info::output::OutputRenderer;
        match self {
            OutputFormat::Text => provider_info::output::text::TextRenderer.render(resolved),
            OutputFormat::Json => provider_info::output::json::JsonRenderer.render(resolved),
        }
    }
}
