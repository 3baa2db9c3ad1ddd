//! Plain text renderer.
//!
//! Four `Label: value` lines, meant to be read by people or picked
//! apart with `cut`/`sed` in shell scripts.

use crate::models::ResolvedProvider;
use crate::output::OutputRenderer;

/// Plain text output renderer.
pub struct TextRenderer;

impl OutputRenderer for TextRenderer {
    fn render(&self, resolved: &ResolvedProvider) -> String {
        format!(
            "Provider: {}\nBase URL: {}\nToken Environment Key: {}\nToken: {}\n",
            resolved.name,
            resolved.base_url,
            resolved.token_env_key.as_deref().unwrap_or("None"),
            resolved.token,
        )
    }
}
