//! JSON output renderer.
//!
//! Outputs `{"provider", "base_url", "token_env_key", "token", "token_status"}`.
//! `token` is `null` unless the variable was found.

use crate::models::ResolvedProvider;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, resolved: &ResolvedProvider) -> String {
        let output = serde_json::json!({
            "provider": resolved.name,
            "base_url": resolved.base_url,
            "token_env_key": resolved.token_env_key,
            "token": resolved.token.value(),
            "token_status": resolved.token.kind(),
        });

        let mut rendered = serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string());
        rendered.push('\n');
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TokenStatus;

    #[test]
    fn render_json_with_value() {
        let resolved = ResolvedProvider {
            name: "Anthropic".into(),
            base_url: "https://api.anthropic.com".into(),
            token_env_key: Some("ANTHROPIC_API_KEY".into()),
            token: TokenStatus::Value("sk-ant".into()),
        };

        let output = JsonRenderer.render(&resolved);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["provider"], "Anthropic");
        assert_eq!(parsed["base_url"], "https://api.anthropic.com");
        assert_eq!(parsed["token_env_key"], "ANTHROPIC_API_KEY");
        assert_eq!(parsed["token"], "sk-ant");
        assert_eq!(parsed["token_status"], "set");
    }

    #[test]
    fn render_json_without_token() {
        let resolved = ResolvedProvider {
            name: "Ollama".into(),
            base_url: "http://localhost:11434/v1".into(),
            token_env_key: None,
            token: TokenStatus::NotRequired,
        };

        let output = JsonRenderer.render(&resolved);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert!(parsed["token_env_key"].is_null());
        assert!(parsed["token"].is_null());
        assert_eq!(parsed["token_status"], "not_required");
    }
}
