//! Output renderers: plain text (default) and JSON.

pub mod json;
pub mod text;

use crate::models::ResolvedProvider;

/// Trait for rendering a resolved provider to an output format.
pub trait OutputRenderer {
    /// Render the provider to a string, including the trailing newline.
    fn render(&self, resolved: &ResolvedProvider) -> String;
}
