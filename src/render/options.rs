//! Rendering options and configuration.

use crate::model::MAX_HEADING_LEVEL;

/// Options for rendering document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Maximum heading level (1-9); deeper headings are rendered at this level
    pub max_heading_level: u8,

    /// Emit spacer blocks as empty lines (or `<br>` in HTML)
    pub include_blank_blocks: bool,

    /// Escape special Markdown characters in run text
    pub escape_special_chars: bool,

    /// Use inline CSS in the HTML preview instead of class names
    pub preview_styles: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, MAX_HEADING_LEVEL);
        self
    }

    /// Enable or disable spacer output.
    pub fn with_blank_blocks(mut self, include: bool) -> Self {
        self.include_blank_blocks = include;
        self
    }

    /// Enable or disable Markdown escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Enable or disable inline CSS in the HTML preview.
    pub fn with_preview_styles(mut self, inline: bool) -> Self {
        self.preview_styles = inline;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_heading_level: MAX_HEADING_LEVEL,
            include_blank_blocks: true,
            escape_special_chars: false,
            preview_styles: true,
        }
    }
}
