//! Parsing of a constrained markdown dialect into the document model.
//!
//! Only two constructs are recognized: `#` heading lines and `**bold**`
//! spans. Everything else is plain paragraph text. Blank lines are dropped
//! rather than turned into spacers.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{Block, Document, DocumentBuilder, Heading, Paragraph, TextRun};

use super::LayoutOptions;

fn bold_regex() -> &'static Regex {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    BOLD.get_or_init(|| Regex::new(r"\*\*.*?\*\*").expect("bold span pattern is valid"))
}

/// Markdown block parser.
pub struct MarkdownParser {
    max_heading_level: u8,
}

impl MarkdownParser {
    /// Create a parser that clamps heading levels to `max_heading_level`.
    pub fn new(max_heading_level: u8) -> Self {
        Self { max_heading_level }
    }

    /// Create a parser configured from layout options.
    pub fn from_options(options: &LayoutOptions) -> Self {
        Self::new(options.max_heading_level)
    }

    /// Parse text into a document.
    ///
    /// Returns [`Error::EmptyInput`] when the text has no non-blank lines.
    pub fn parse(&self, text: &str) -> Result<Document> {
        let builder: DocumentBuilder = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| self.parse_line(line))
            .collect();

        if builder.is_empty() {
            return Err(Error::EmptyInput);
        }
        log::debug!("Parsed {} markdown blocks", builder.len());
        Ok(builder.build())
    }

    /// Parse one trimmed, non-blank line.
    pub fn parse_line(&self, line: &str) -> Block {
        if line.starts_with('#') {
            let level = line.chars().take_while(|c| *c == '#').count();
            let level = level.min(usize::from(self.max_heading_level)) as u8;
            let text = line.replace('#', "");
            return Heading::with_text(text.trim(), level).into();
        }

        Paragraph {
            runs: bold_runs(line),
            ..Paragraph::default()
        }
        .into()
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::from_options(&LayoutOptions::default())
    }
}

/// Split a line into runs at `**bold**` spans, leftmost shortest match first.
///
/// An unmatched `**` stays literal text and `****` is an empty bold run.
/// Whitespace just inside the markers belongs to the surrounding plain
/// text, so bold runs never start or end with whitespace and the renderer
/// writes back a line that parses to the same runs.
fn bold_runs(line: &str) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut last = 0;

    for m in bold_regex().find_iter(line) {
        push_plain(&mut runs, &line[last..m.start()]);

        let inner = &line[m.start() + 2..m.end() - 2];
        let trimmed = inner.trim();
        let lead = inner.len() - inner.trim_start().len();
        push_plain(&mut runs, &inner[..lead]);
        runs.push(TextRun::bold(trimmed));
        if !trimmed.is_empty() {
            push_plain(&mut runs, &inner[lead + trimmed.len()..]);
        }

        last = m.end();
    }
    push_plain(&mut runs, &line[last..]);

    // The line itself is trimmed; whitespace moved out of a span at either
    // end of it is dropped the same way.
    if let Some(first) = runs.first_mut().filter(|r| !r.style.has_styling()) {
        first.text = first.text.trim_start().to_string();
    }
    if let Some(end) = runs.last_mut().filter(|r| !r.style.has_styling()) {
        end.text = end.text.trim_end().to_string();
    }
    runs.retain(|r| r.style.has_styling() || !r.text.is_empty());

    runs
}

/// Append plain text, merging it into a preceding plain run.
fn push_plain(runs: &mut Vec<TextRun>, text: &str) {
    if text.is_empty() {
        return;
    }
    match runs.last_mut() {
        Some(run) if !run.style.has_styling() => run.text.push_str(text),
        _ => runs.push(TextRun::new(text)),
    }
}

/// Parse markdown text with default options.
pub fn parse_markdown(text: &str) -> Result<Document> {
    MarkdownParser::default().parse(text)
}

/// Parse markdown text with custom options.
pub fn parse_markdown_with_options(text: &str, options: &LayoutOptions) -> Result<Document> {
    options.validate()?;
    MarkdownParser::from_options(options).parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Alignment;

    #[test]
    fn test_parse_heading_and_bold() {
        let doc = parse_markdown("# Title\nThis is **bold** text.").unwrap();

        assert_eq!(
            doc.blocks,
            vec![
                Block::Heading(Heading::with_text("Title", 1)),
                Block::Paragraph(Paragraph {
                    runs: vec![
                        TextRun::new("This is "),
                        TextRun::bold("bold"),
                        TextRun::new(" text."),
                    ],
                    alignment: Alignment::Left,
                }),
            ]
        );
    }

    #[test]
    fn test_heading_levels() {
        let doc = parse_markdown("### Third\n############ Deep").unwrap();
        match (&doc.blocks[0], &doc.blocks[1]) {
            (Block::Heading(a), Block::Heading(b)) => {
                assert_eq!(a.level, 3);
                assert_eq!(a.plain_text(), "Third");
                assert_eq!(b.level, 9);
                assert_eq!(b.plain_text(), "Deep");
            }
            other => panic!("expected headings, got {:?}", other),
        }
    }

    #[test]
    fn test_heading_level_clamp_option() {
        let options = LayoutOptions::new().with_max_heading_level(3);
        let doc = parse_markdown_with_options("##### Five", &options).unwrap();
        match &doc.blocks[0] {
            Block::Heading(h) => assert_eq!(h.level, 3),
            other => panic!("expected heading, got {:?}", other),
        }
    }

    #[test]
    fn test_heading_strips_every_hash() {
        let doc = parse_markdown("## Issue #42").unwrap();
        assert_eq!(doc.blocks[0].plain_text(), "Issue 42");
        assert_eq!(doc.blocks[0].runs().len(), 1);
        assert!(!doc.blocks[0].runs()[0].style.has_styling());
    }

    #[test]
    fn test_blank_lines_dropped() {
        let doc = parse_markdown("\n  first  \n\n   \n second\n").unwrap();
        assert_eq!(doc.block_count(), 2);
        assert!(doc.iter().all(|b| !b.is_blank()));
        assert_eq!(doc.blocks[0].plain_text(), "first");
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_markdown(""), Err(Error::EmptyInput)));
        assert!(matches!(parse_markdown("\n  \n\t\n"), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_bold_split_is_non_greedy() {
        let runs = bold_runs("**a** and **b**");
        assert_eq!(
            runs,
            vec![TextRun::bold("a"), TextRun::new(" and "), TextRun::bold("b")]
        );
    }

    #[test]
    fn test_unmatched_marker_is_literal() {
        assert_eq!(bold_runs("5 ** 2"), vec![TextRun::new("5 ** 2")]);
        assert_eq!(
            bold_runs("**open **closed** tail"),
            vec![TextRun::bold("open"), TextRun::new(" closed** tail")]
        );
    }

    #[test]
    fn test_bold_padding_moves_to_plain_text() {
        assert_eq!(
            bold_runs("a ** x ** b"),
            vec![TextRun::new("a  "), TextRun::bold("x"), TextRun::new("  b")]
        );
        assert_eq!(bold_runs("** x **"), vec![TextRun::bold("x")]);
        assert_eq!(
            bold_runs("a **  ** b"),
            vec![TextRun::new("a   "), TextRun::bold(""), TextRun::new(" b")]
        );
    }

    #[test]
    fn test_empty_bold_span_is_kept() {
        assert_eq!(bold_runs("****"), vec![TextRun::bold("")]);
        assert_eq!(
            bold_runs("a****b"),
            vec![TextRun::new("a"), TextRun::bold(""), TextRun::new("b")]
        );

        let doc = parse_markdown("a\n****\nb").unwrap();
        assert_eq!(doc.block_count(), 3);
        assert_eq!(doc.blocks[1].runs(), &[TextRun::bold("")][..]);
    }

    #[test]
    fn test_italics_not_interpreted() {
        assert_eq!(bold_runs("*just* text"), vec![TextRun::new("*just* text")]);
    }

    #[test]
    fn test_crlf_input() {
        let doc = parse_markdown("# Title\r\nBody\r\n").unwrap();
        assert_eq!(doc.block_count(), 2);
        assert_eq!(doc.blocks[1].plain_text(), "Body");
    }
}
