//! # unscan
//!
//! Layout reconstruction for OCR output.
//!
//! Given the words an OCR engine recognized on a page, each with a pixel
//! bounding box and optional bold/italic hints, this library rebuilds a
//! structured document: ordered lines, paragraph breaks, headings and text
//! alignment. A second entry point turns a restricted markdown dialect
//! (`#` headings, `**bold**` spans) into the same document model, so one
//! renderer can serve both.
//!
//! ## Quick Start
//!
//! ```
//! use unscan::{reconstruct_hocr, render};
//!
//! fn main() -> unscan::Result<()> {
//!     let hocr = "<span class='ocrx_word' title='bbox 20 10 120 40'>Title</span>\
//!                 <span class='ocrx_word' title='bbox 10 60 55 74'>Hello</span>\
//!                 <span class='ocrx_word' title='bbox 60 62 110 76'>World</span>";
//!     let doc = reconstruct_hocr(hocr)?;
//!
//!     let markdown = render::to_markdown(&doc, &render::RenderOptions::default())?;
//!     assert_eq!(markdown, "# Title\nHello World");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Lenient extraction**: malformed word elements are skipped, not fatal
//! - **Tunable thresholds**: every pixel and ratio constant is a [`LayoutOptions`] field
//! - **Multi-page hOCR**: pages are reconstructed independently, in parallel
//! - **Reference renderers**: Markdown, plain text, HTML preview, JSON
//! - **Async**: optional tokio wrappers behind the `async` feature

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

#[cfg(feature = "async")]
pub mod nonblocking;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Alignment, Block, Document, DocumentBuilder, Heading, Paragraph, TextRun, TextStyle,
    MAX_HEADING_LEVEL,
};
pub use parser::{
    classify_lines, cluster_lines, extract_words, median_height, parse_markdown,
    parse_markdown_with_options, reconstruct_hocr, reconstruct_hocr_with_options,
    reconstruct_words, HocrParser, LayoutOptions, Line, MarkdownParser, WordBox,
};
pub use render::{JsonFormat, RenderOptions};

/// Builder for reconstructing and rendering documents.
///
/// # Example
///
/// ```
/// use unscan::Unscan;
///
/// let markdown = Unscan::new()
///     .with_left_margin(120)
///     .sequential()
///     .markdown("# Notes\nRemember **this**.")?
///     .to_markdown()?;
/// assert_eq!(markdown, "# Notes\nRemember **this**.");
/// # Ok::<(), unscan::Error>(())
/// ```
pub struct Unscan {
    layout_options: LayoutOptions,
    render_options: RenderOptions,
}

impl Unscan {
    /// Create a new Unscan builder.
    pub fn new() -> Self {
        Self {
            layout_options: LayoutOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Replace all layout options.
    pub fn with_layout_options(mut self, options: LayoutOptions) -> Self {
        self.layout_options = options;
        self
    }

    /// Replace all render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Set the vertical line-clustering tolerance in pixels.
    pub fn with_line_tolerance(mut self, pixels: u32) -> Self {
        self.layout_options = self.layout_options.with_line_tolerance(pixels);
        self
    }

    /// Set the left-margin threshold for centered lines in pixels.
    pub fn with_left_margin(mut self, pixels: u32) -> Self {
        self.layout_options = self.layout_options.with_left_margin(pixels);
        self
    }

    /// Set the heading height ratio.
    pub fn with_heading_ratio(mut self, ratio: f64) -> Self {
        self.layout_options = self.layout_options.with_heading_ratio(ratio);
        self
    }

    /// Set the paragraph gap ratio.
    pub fn with_paragraph_gap_ratio(mut self, ratio: f64) -> Self {
        self.layout_options = self.layout_options.with_paragraph_gap_ratio(ratio);
        self
    }

    /// Disable parallel page processing.
    pub fn sequential(mut self) -> Self {
        self.layout_options = self.layout_options.sequential();
        self
    }

    /// Omit spacer blocks from rendered output.
    pub fn without_blank_blocks(mut self) -> Self {
        self.render_options = self.render_options.with_blank_blocks(false);
        self
    }

    /// Reconstruct a document from hOCR-like markup.
    pub fn hocr(self, markup: &str) -> Result<UnscanResult> {
        let document = reconstruct_hocr_with_options(markup, &self.layout_options)?;
        Ok(UnscanResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Reconstruct a document from word boxes in extraction order.
    pub fn words(self, words: &[WordBox]) -> Result<UnscanResult> {
        let document = reconstruct_words(words, &self.layout_options)?;
        Ok(UnscanResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a document from constrained markdown.
    pub fn markdown(self, text: &str) -> Result<UnscanResult> {
        let document = parse_markdown_with_options(text, &self.layout_options)?;
        Ok(UnscanResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Unscan {
    fn default() -> Self {
        Self::new()
    }
}

/// A reconstructed document together with its render options.
pub struct UnscanResult {
    /// The reconstructed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl UnscanResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to an HTML preview fragment.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Take ownership of the document.
    pub fn into_document(self) -> Document {
        self.document
    }
}
