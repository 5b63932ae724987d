//! JSON renderer: the full report as pretty-printed JSON.

use super::Renderer;
use crate::errors::VennError;
use crate::report::Report;

/// Pretty JSON renderer.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, report: &Report) -> Result<String, VennError> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
