use crate::constants::report::{
    DEFAULT_FONT_SIZE, DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_TITLE_FONT_SIZE, DEFAULT_WIDTH,
};
use crate::data::PartitionSelector;
use crate::errors::VennError;
use crate::utils::normalize_inline_whitespace;

/// Which partitions a report covers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ReportScope {
    /// `Overall` followed by every commodity in sorted order.
    #[default]
    All,
    /// Exactly one partition.
    Single(PartitionSelector),
}

impl ReportScope {
    /// Resolve the interactive controls: `render_all` wins over a selection.
    pub fn from_controls(selection: Option<&str>, render_all: bool) -> Self {
        if render_all {
            Self::All
        } else {
            Self::Single(PartitionSelector::from_option(selection))
        }
    }
}

/// Report assembly configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    /// Heading shown above the diagrams.
    pub title: String,
    /// Partitions to include.
    pub scope: ReportScope,
}

impl ReportConfig {
    /// Override the title; whitespace runs collapse and an empty title keeps the default.
    pub fn with_title(mut self, title: &str) -> Self {
        let title = normalize_inline_whitespace(title);
        if !title.is_empty() {
            self.title = title;
        }
        self
    }

    /// Override the scope.
    pub fn with_scope(mut self, scope: ReportScope) -> Self {
        self.scope = scope;
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            scope: ReportScope::All,
        }
    }
}

/// Rendering-only options; they never affect which records are counted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Diagram width in pixels.
    pub width: u32,
    /// Diagram height in pixels.
    pub height: u32,
    /// Font size of set labels and region counts.
    pub font_size: u32,
    /// Font size of diagram titles.
    pub title_font_size: u32,
}

impl RenderOptions {
    /// Reject zero dimensions and font sizes.
    pub fn validate(&self) -> Result<(), VennError> {
        if self.width == 0 || self.height == 0 {
            return Err(VennError::Configuration(format!(
                "diagram size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.font_size == 0 || self.title_font_size == 0 {
            return Err(VennError::Configuration(
                "font sizes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            font_size: DEFAULT_FONT_SIZE,
            title_font_size: DEFAULT_TITLE_FONT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_all_overrides_selection() {
        assert_eq!(ReportScope::from_controls(Some("Rice"), true), ReportScope::All);
        assert_eq!(
            ReportScope::from_controls(Some("Rice"), false),
            ReportScope::Single(PartitionSelector::commodity("Rice"))
        );
        assert_eq!(
            ReportScope::from_controls(None, false),
            ReportScope::Single(PartitionSelector::Overall)
        );
    }

    #[test]
    fn blank_title_keeps_default() {
        let config = ReportConfig::default().with_title("   ");
        assert_eq!(config.title, DEFAULT_TITLE);
        let config = ReportConfig::default().with_title("  Q3\n review ");
        assert_eq!(config.title, "Q3 review");
    }

    #[test]
    fn zero_sizes_are_rejected() {
        assert!(RenderOptions::default().validate().is_ok());
        let options = RenderOptions {
            width: 0,
            ..RenderOptions::default()
        };
        assert!(matches!(options.validate(), Err(VennError::Configuration(_))));
    }
}
