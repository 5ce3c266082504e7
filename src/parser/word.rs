//! Recognized word boxes.

use serde::{Deserialize, Serialize};

/// A recognized word with its pixel bounding box and inline emphasis.
///
/// Coordinates use the page origin at the top-left; `y` is the top edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordBox {
    /// The word text (trimmed, never empty when produced by the extractor)
    pub text: String,
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Height of the bounding box (bottom - top)
    pub height: u32,
    /// Whether the word was marked bold
    pub bold: bool,
    /// Whether the word was marked italic
    pub italic: bool,
}

impl WordBox {
    /// Create an unstyled word box.
    pub fn new(text: impl Into<String>, x: u32, y: u32, height: u32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            height,
            bold: false,
            italic: false,
        }
    }

    /// Create a word box from bounding-box corners `(x1, y1, x2, y2)`.
    ///
    /// Returns `None` when the box has no height.
    pub fn from_bbox(text: impl Into<String>, x1: u32, y1: u32, _x2: u32, y2: u32) -> Option<Self> {
        let height = y2.checked_sub(y1).filter(|h| *h > 0)?;
        Some(Self::new(text, x1, y1, height))
    }

    /// Set the bold flag.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set the italic flag.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Bottom edge of the box.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }
}
