//! Markdown rendering.
//!
//! Output is line-based: one block per line, spacers as empty lines. It is
//! the inverse of the markdown parser for documents that came from markdown.

use crate::error::Result;
use crate::model::{Block, Document, Heading, Paragraph, TextRun, TextStyle};

use super::RenderOptions;

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();
        for block in doc {
            self.render_block(&mut output, block);
        }
        Ok(output.trim().to_string())
    }

    fn render_block(&self, output: &mut String, block: &Block) {
        match block {
            Block::Heading(h) => self.render_heading(output, h),
            Block::Paragraph(p) => self.render_paragraph(output, p),
            Block::Blank => {
                if self.options.include_blank_blocks {
                    output.push('\n');
                }
            }
        }
    }

    fn render_heading(&self, output: &mut String, heading: &Heading) {
        let level = heading.level.min(self.options.max_heading_level);
        output.push_str(&"#".repeat(level as usize));
        output.push(' ');
        // Heading text is bold by definition; run emphasis is not repeated.
        for run in &heading.runs {
            output.push_str(&self.escape(&run.text));
        }
        output.push('\n');
    }

    fn render_paragraph(&self, output: &mut String, para: &Paragraph) {
        if para.runs.is_empty() {
            return;
        }
        for run in &para.runs {
            self.render_text_run(output, run);
        }
        output.push('\n');
    }

    fn render_text_run(&self, output: &mut String, run: &TextRun) {
        let text = self.escape(&run.text);
        output.push_str(&apply_text_style(&text, &run.style));
    }

    fn escape(&self, text: &str) -> String {
        if self.options.escape_special_chars {
            escape_markdown(text)
        } else {
            text.to_string()
        }
    }
}

/// Wrap text in emphasis markers, keeping surrounding whitespace outside
/// the markers so they stay valid Markdown.
fn apply_text_style(text: &str, style: &TextStyle) -> String {
    let marker = match (style.bold, style.italic) {
        (true, true) => "***",
        (true, false) => "**",
        (false, true) => "*",
        (false, false) => return text.to_string(),
    };

    let inner = text.trim();
    if inner.is_empty() {
        if text.is_empty() && style.bold && !style.italic {
            return "****".to_string();
        }
        return text.to_string();
    }
    let start = text.len() - text.trim_start().len();
    let end = start + inner.len();
    format!(
        "{}{}{}{}{}",
        &text[..start],
        marker,
        inner,
        marker,
        &text[end..]
    )
}

/// Escape special Markdown characters.
/// Only characters that could start emphasis, code or links are escaped.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '#' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
