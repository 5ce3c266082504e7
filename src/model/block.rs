//! Block-level types.

use super::run::runs_text;
use super::{Alignment, TextRun};
use serde::{Deserialize, Serialize};

/// Highest heading level a renderer is expected to support.
pub const MAX_HEADING_LEVEL: u8 = 9;

/// A structural unit of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of text
    Paragraph(Paragraph),

    /// A heading
    Heading(Heading),

    /// An empty spacer inferred from vertical whitespace
    Blank,
}

impl Block {
    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph(p) => p.plain_text(),
            Block::Heading(h) => h.plain_text(),
            Block::Blank => String::new(),
        }
    }

    /// Runs carried by this block (empty for spacers).
    pub fn runs(&self) -> &[TextRun] {
        match self {
            Block::Paragraph(p) => &p.runs,
            Block::Heading(h) => &h.runs,
            Block::Blank => &[],
        }
    }

    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading(_))
    }

    /// Check if this block is a spacer.
    pub fn is_blank(&self) -> bool {
        matches!(self, Block::Blank)
    }
}

impl From<Paragraph> for Block {
    fn from(p: Paragraph) -> Self {
        Block::Paragraph(p)
    }
}

impl From<Heading> for Block {
    fn from(h: Heading) -> Self {
        Block::Heading(h)
    }
}

/// A paragraph of styled runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    pub runs: Vec<TextRun>,

    /// Text alignment
    pub alignment: Alignment,
}

impl Paragraph {
    /// Create a new empty, left-aligned paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_run(TextRun::new(text));
        p
    }

    /// Set the alignment.
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        runs_text(&self.runs)
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(TextRun::is_empty)
    }
}

/// A heading with a level from 1 (largest) to [`MAX_HEADING_LEVEL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Text runs in the heading
    pub runs: Vec<TextRun>,

    /// Heading level (1-9)
    pub level: u8,
}

impl Heading {
    /// Create a heading from runs; the level is clamped to 1..=9.
    pub fn new(runs: Vec<TextRun>, level: u8) -> Self {
        Self {
            runs,
            level: level.clamp(1, MAX_HEADING_LEVEL),
        }
    }

    /// Create a heading holding a single unstyled run.
    pub fn with_text(text: impl Into<String>, level: u8) -> Self {
        Self::new(vec![TextRun::new(text)], level)
    }

    /// Get plain text content of the heading.
    pub fn plain_text(&self) -> String {
        runs_text(&self.runs)
    }
}
