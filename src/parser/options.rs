//! Layout reconstruction options.
//!
//! The default thresholds are tuned for scans of roughly letter-sized pages
//! at typical OCR resolutions. All distances are in page pixels.

use crate::error::{Error, Result};
use crate::model::MAX_HEADING_LEVEL;

/// Options controlling line clustering and layout classification.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Words whose top edges differ by less than this join the same line
    pub line_tolerance: u32,

    /// A line whose leftmost word starts right of this is centered
    pub left_margin: u32,

    /// A line is a heading when its average word height exceeds this
    /// multiple of the median word height
    pub heading_ratio: f64,

    /// A spacer is inserted when the gap above a line exceeds this
    /// multiple of the median word height
    pub paragraph_gap_ratio: f64,

    /// Median height used when the document has no words
    pub fallback_height: u32,

    /// Level assigned to every heading found from geometry
    pub heading_level: u8,

    /// Highest heading level accepted from markdown input
    pub max_heading_level: u8,

    /// Reconstruct each `ocr_page` of multi-page hOCR separately
    pub split_pages: bool,

    /// Whether to use parallel processing across pages
    pub parallel: bool,
}

impl LayoutOptions {
    /// Create new layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vertical line-clustering tolerance.
    pub fn with_line_tolerance(mut self, pixels: u32) -> Self {
        self.line_tolerance = pixels;
        self
    }

    /// Set the left-margin threshold for centered lines.
    pub fn with_left_margin(mut self, pixels: u32) -> Self {
        self.left_margin = pixels;
        self
    }

    /// Set the heading height ratio.
    pub fn with_heading_ratio(mut self, ratio: f64) -> Self {
        self.heading_ratio = ratio;
        self
    }

    /// Set the paragraph gap ratio.
    pub fn with_paragraph_gap_ratio(mut self, ratio: f64) -> Self {
        self.paragraph_gap_ratio = ratio;
        self
    }

    /// Set the fallback median height.
    pub fn with_fallback_height(mut self, pixels: u32) -> Self {
        self.fallback_height = pixels;
        self
    }

    /// Set the level used for geometric headings.
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.heading_level = level;
        self
    }

    /// Set the maximum markdown heading level.
    pub fn with_max_heading_level(mut self, level: u8) -> Self {
        self.max_heading_level = level;
        self
    }

    /// Enable or disable per-page reconstruction.
    pub fn with_split_pages(mut self, split: bool) -> Self {
        self.split_pages = split;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check that every option is within its valid range.
    pub fn validate(&self) -> Result<()> {
        if self.line_tolerance == 0 {
            return Err(Error::InvalidOption(
                "line_tolerance must be at least 1".to_string(),
            ));
        }
        if self.fallback_height == 0 {
            return Err(Error::InvalidOption(
                "fallback_height must be at least 1".to_string(),
            ));
        }
        check_ratio("heading_ratio", self.heading_ratio)?;
        check_ratio("paragraph_gap_ratio", self.paragraph_gap_ratio)?;
        check_level("heading_level", self.heading_level)?;
        check_level("max_heading_level", self.max_heading_level)?;
        Ok(())
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            line_tolerance: 12,
            left_margin: 90,
            heading_ratio: 1.3,
            paragraph_gap_ratio: 1.5,
            fallback_height: 20,
            heading_level: 1,
            max_heading_level: MAX_HEADING_LEVEL,
            split_pages: true,
            parallel: true,
        }
    }
}

fn check_ratio(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidOption(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}

fn check_level(name: &str, level: u8) -> Result<()> {
    if (1..=MAX_HEADING_LEVEL).contains(&level) {
        Ok(())
    } else {
        Err(Error::InvalidOption(format!(
            "{} must be between 1 and {}, got {}",
            name, MAX_HEADING_LEVEL, level
        )))
    }
}
