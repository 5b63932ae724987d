//! Renderers: output formats for assembled reports.
//!
//! 3 formats: plain text, JSON, and SVG diagrams.

pub mod json;
pub mod svg;
pub mod text;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::RenderOptions;
use crate::errors::VennError;
use crate::report::Report;
use crate::utils::slugify;

pub use json::JsonRenderer;
pub use svg::SvgRenderer;
pub use text::TextRenderer;

/// Trait for report rendering.
pub trait Renderer: Send + Sync {
    /// Format name used on the command line.
    fn name(&self) -> &'static str;
    /// Render the whole report into one document.
    fn render(&self, report: &Report) -> Result<String, VennError>;
}

/// Create a renderer by format name.
pub fn create_renderer(format: &str, options: RenderOptions) -> Option<Box<dyn Renderer>> {
    match format {
        "text" => Some(Box::new(TextRenderer)),
        "json" => Some(Box::new(JsonRenderer)),
        "svg" => Some(Box::new(SvgRenderer::new(options))),
        _ => None,
    }
}

/// List all available renderer format names.
pub fn available_formats() -> &'static [&'static str] {
    &["text", "json", "svg"]
}

/// Write one SVG file per partition into `dir` and return the written paths.
///
/// File names are slugs of the partition labels. Labels that slug to the
/// same name get a numeric suffix so no diagram is overwritten.
pub fn write_partition_svgs(
    dir: &Path,
    report: &Report,
    options: RenderOptions,
) -> Result<Vec<PathBuf>, VennError> {
    options.validate()?;
    fs::create_dir_all(dir)?;
    let renderer = SvgRenderer::new(options);
    let mut written: Vec<PathBuf> = Vec::with_capacity(report.partitions.len());
    for entry in &report.partitions {
        let slug = slugify(&entry.label);
        let mut path = dir.join(format!("{slug}.svg"));
        let mut suffix = 2;
        while written.contains(&path) {
            path = dir.join(format!("{slug}_{suffix}.svg"));
            suffix += 1;
        }
        fs::write(&path, renderer.render_partition(entry))?;
        info!(partition = %entry.label, path = %path.display(), "wrote diagram");
        written.push(path);
    }
    Ok(written)
}
