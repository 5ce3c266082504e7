//! Layout classification for clustered lines.
//!
//! Each line becomes one paragraph or heading. Decisions are made against a
//! single document statistic, the median word height, and a running bottom
//! edge threaded from one line to the next:
//!
//! 1. a spacer block is emitted when the gap above the line is large,
//! 2. a line starting right of the left margin is centered,
//! 3. a line whose words are tall compared to the median is a heading,
//! 4. words become runs, with a single space before every word but the first.

use crate::error::{Error, Result};
use crate::model::{
    Alignment, Block, Document, DocumentBuilder, Heading, Paragraph, TextRun, TextStyle,
};

use super::lines::{cluster_lines, median_height, Line};
use super::{LayoutOptions, WordBox};

/// Classifies lines into blocks for one document.
pub struct LayoutClassifier<'a> {
    options: &'a LayoutOptions,
    median_height: u32,
}

impl<'a> LayoutClassifier<'a> {
    /// Create a classifier for a document with the given median word height.
    pub fn new(options: &'a LayoutOptions, median_height: u32) -> Self {
        Self {
            options,
            median_height,
        }
    }

    /// Median word height the thresholds are scaled by.
    pub fn median_height(&self) -> u32 {
        self.median_height
    }

    /// Classify lines, visited in the order given, into blocks.
    pub fn classify(&self, lines: &[Line]) -> Vec<Block> {
        let mut builder = DocumentBuilder::with_capacity(lines.len());
        lines.iter().fold(0, |last_bottom, line| {
            self.classify_line(line, last_bottom, &mut builder)
        });
        builder.build().into_blocks()
    }

    /// Emit the blocks for one line and return its bottom edge.
    fn classify_line(&self, line: &Line, last_bottom: u32, out: &mut DocumentBuilder) -> u32 {
        if self.is_paragraph_break(line.top_y, last_bottom) {
            log::trace!("Spacer before line at y={}", line.top_y);
            out.push(Block::Blank);
        }

        let alignment = self.alignment(line);
        if self.is_heading(line) {
            log::trace!("Heading at y={}: {:?}", line.top_y, line.text());
            out.push(Heading::new(line_runs(line, true), self.options.heading_level));
        } else {
            out.push(Paragraph {
                runs: line_runs(line, false),
                alignment,
            });
        }

        line.bottom()
    }

    /// Whether a spacer goes above a line starting at `top_y`.
    ///
    /// The first line never gets one. The gap is measured from the previous
    /// line's bottom edge and may be negative for overlapping lines.
    pub fn is_paragraph_break(&self, top_y: u32, last_bottom: u32) -> bool {
        if last_bottom == 0 {
            return false;
        }
        let gap = i64::from(top_y) - i64::from(last_bottom);
        gap as f64 > self.options.paragraph_gap_ratio * f64::from(self.median_height)
    }

    /// Horizontal alignment of a line.
    pub fn alignment(&self, line: &Line) -> Alignment {
        if line.left() > self.options.left_margin {
            Alignment::Center
        } else {
            Alignment::Left
        }
    }

    /// Whether a line is set in heading-sized type.
    pub fn is_heading(&self, line: &Line) -> bool {
        line.average_height() > self.options.heading_ratio * f64::from(self.median_height)
    }
}

/// Build the runs of a line. Heading lines are bold and heading-sized
/// regardless of per-word emphasis.
fn line_runs(line: &Line, heading: bool) -> Vec<TextRun> {
    line.words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let text = if i == 0 {
                word.text.clone()
            } else {
                format!(" {}", word.text)
            };
            if heading {
                TextRun::heading(text)
            } else {
                TextRun::styled(
                    text,
                    TextStyle {
                        bold: word.bold,
                        italic: word.italic,
                        heading_size: false,
                    },
                )
            }
        })
        .collect()
}

/// Classify lines already sorted by `top_y` into blocks.
pub fn classify_lines(lines: &[Line], median_height: u32, options: &LayoutOptions) -> Vec<Block> {
    LayoutClassifier::new(options, median_height).classify(lines)
}

/// Reconstruct a document from word boxes given in extraction order.
///
/// Returns [`Error::EmptyInput`] when there are no words.
pub fn reconstruct_words(words: &[WordBox], options: &LayoutOptions) -> Result<Document> {
    options.validate()?;
    if words.is_empty() {
        return Err(Error::EmptyInput);
    }

    let median = median_height(words, options.fallback_height);
    let lines = cluster_lines(words, options.line_tolerance);
    log::debug!(
        "Classifying {} lines (median word height {})",
        lines.len(),
        median
    );

    let blocks = classify_lines(&lines, median, options);
    Ok(Document::from_blocks(blocks))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(top_y: u32, words: Vec<WordBox>) -> Line {
        Line { top_y, words }
    }

    #[test]
    fn test_reconstruct_title_and_body() {
        let words = vec![
            WordBox::new("Title", 20, 10, 30),
            WordBox::new("Hello", 10, 60, 14),
            WordBox::new("World", 60, 62, 14),
        ];
        let doc = reconstruct_words(&words, &LayoutOptions::default()).unwrap();

        assert_eq!(
            doc.blocks,
            vec![
                Block::Heading(Heading::new(vec![TextRun::heading("Title")], 1)),
                Block::Paragraph(Paragraph {
                    runs: vec![TextRun::new("Hello"), TextRun::new(" World")],
                    alignment: Alignment::Left,
                }),
            ]
        );
    }

    #[test]
    fn test_reconstruct_empty() {
        let result = reconstruct_words(&[], &LayoutOptions::default());
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn test_reconstruct_rejects_invalid_options() {
        let words = vec![WordBox::new("x", 0, 0, 10)];
        let options = LayoutOptions::new().with_heading_ratio(0.0);
        assert!(matches!(
            reconstruct_words(&words, &options),
            Err(Error::InvalidOption(_))
        ));
    }

    #[test]
    fn test_heading_threshold_boundary() {
        let options = LayoutOptions::default();
        let classifier = LayoutClassifier::new(&options, 10);

        // 1.3 * 10 = 13: exactly at the threshold is body text.
        let at = line(0, vec![WordBox::new("a", 0, 0, 13)]);
        assert!(!classifier.is_heading(&at));

        let above = line(0, vec![WordBox::new("a", 0, 0, 13), WordBox::new("b", 20, 0, 14)]);
        assert!(classifier.is_heading(&above));
    }

    #[test]
    fn test_paragraph_break_boundary() {
        let options = LayoutOptions::default();
        let classifier = LayoutClassifier::new(&options, 10);

        // 1.5 * 10 = 15
        assert!(!classifier.is_paragraph_break(115, 100));
        assert!(classifier.is_paragraph_break(116, 100));
        assert!(!classifier.is_paragraph_break(500, 0));
        assert!(!classifier.is_paragraph_break(90, 100));
    }

    #[test]
    fn test_alignment_boundary() {
        let options = LayoutOptions::default();
        let classifier = LayoutClassifier::new(&options, 10);

        let at_margin = line(0, vec![WordBox::new("a", 90, 0, 10)]);
        assert_eq!(classifier.alignment(&at_margin), Alignment::Left);

        let past_margin = line(0, vec![WordBox::new("a", 91, 0, 10)]);
        assert_eq!(classifier.alignment(&past_margin), Alignment::Center);
    }

    #[test]
    fn test_blank_inserted_between_distant_lines() {
        let words = vec![
            WordBox::new("one", 10, 10, 10),
            WordBox::new("two", 10, 36, 10),
        ];
        // median 10, bottom of first line 20, gap 16 > 15
        let doc = reconstruct_words(&words, &LayoutOptions::default()).unwrap();
        assert_eq!(doc.block_count(), 3);
        assert!(doc.blocks[1].is_blank());

        let words = vec![
            WordBox::new("one", 10, 10, 10),
            WordBox::new("two", 10, 35, 10),
        ];
        let doc = reconstruct_words(&words, &LayoutOptions::default()).unwrap();
        assert_eq!(doc.block_count(), 2);
    }

    #[test]
    fn test_heading_overrides_word_emphasis() {
        let words = vec![
            WordBox::new("Big", 10, 10, 40).with_italic(true),
            WordBox::new("Words", 60, 10, 40),
            WordBox::new("body", 10, 80, 10),
            WordBox::new("text", 60, 80, 10),
            WordBox::new("here", 110, 80, 10),
        ];
        let doc = reconstruct_words(&words, &LayoutOptions::default()).unwrap();

        let runs = doc.blocks[0].runs();
        assert!(doc.blocks[0].is_heading());
        assert!(runs
            .iter()
            .all(|r| r.style.bold && r.style.heading_size && !r.style.italic));
    }

    #[test]
    fn test_body_runs_keep_word_emphasis() {
        let words = vec![
            WordBox::new("plain", 10, 10, 10),
            WordBox::new("strong", 60, 10, 10).with_bold(true),
            WordBox::new("slanted", 120, 10, 10).with_italic(true),
        ];
        let doc = reconstruct_words(&words, &LayoutOptions::default()).unwrap();
        let runs = doc.blocks[0].runs();

        assert_eq!(runs.len(), 3);
        assert_eq!(runs[1].text, " strong");
        assert!(runs[1].style.bold && !runs[1].style.italic);
        assert!(runs[2].style.italic && !runs[2].style.bold);
        assert!(!runs[0].style.has_styling());
    }

    #[test]
    fn test_heading_level_option() {
        let words = vec![
            WordBox::new("Title", 10, 10, 40),
            WordBox::new("body", 10, 100, 10),
            WordBox::new("text", 60, 100, 10),
        ];
        let options = LayoutOptions::new().with_heading_level(3);
        let doc = reconstruct_words(&words, &options).unwrap();

        match &doc.blocks[0] {
            Block::Heading(h) => assert_eq!(h.level, 3),
            other => panic!("expected heading, got {:?}", other),
        }
    }
}
