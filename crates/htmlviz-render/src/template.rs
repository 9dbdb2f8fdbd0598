//! Loaded-template value objects.
//!
//! A [`Template`] is plain HTML with `$TOKEN$` placeholders. Renderers
//! receive their template at construction time; there is no process-wide
//! template registry, so two renderers of the same kind can use different
//! markup side by side.

use crate::error::RenderError;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Reads a template file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        Ok(Self::new(fs::read_to_string(path)?))
    }

    /// Bundled D3 force-layout page used by
    /// [`ForceGraph2D`](crate::ForceGraph2D).
    pub fn force_graph_2d() -> Self {
        Self::new(include_str!("../templates/force_graph_2d.html"))
    }

    /// Bundled Google Charts page shared by the categorical chart kinds.
    pub fn google_chart() -> Self {
        Self::new(include_str!("../templates/google_chart.html"))
    }

    /// Bundled Plotly page shared by the trace-based chart kinds.
    pub fn plotly_chart() -> Self {
        Self::new(include_str!("../templates/plotly_chart.html"))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Substitutes every `$KEY$` occurrence with its value. Tokens not named
    /// in `tokens` pass through untouched.
    pub fn render(&self, tokens: &[(&str, String)]) -> String {
        let mut out = self.source.clone();
        for (key, value) in tokens {
            out = out.replace(&format!("${key}$"), value);
        }
        out
    }
}
