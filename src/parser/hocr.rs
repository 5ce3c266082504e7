//! Word extraction from hOCR-like markup.
//!
//! OCR engines describe each recognized word as an element carrying a
//! `bbox x1 y1 x2 y2` title and, optionally, nested emphasis tags:
//!
//! ```text
//! <span class='ocrx_word' title='bbox 36 92 96 116; x_wconf 95'><strong>The</strong></span>
//! ```
//!
//! Extraction is lenient. Elements that do not parse, or whose text is
//! empty once markup is stripped, are skipped without raising an error.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use super::WordBox;

/// Compiled patterns for word extraction.
pub struct HocrExtractor {
    word_regex: Regex,
    bold_regex: Regex,
    italic_regex: Regex,
    tag_regex: Regex,
    page_regex: Regex,
}

impl HocrExtractor {
    /// Compile the extraction patterns.
    pub fn new() -> Self {
        Self {
            word_regex: Regex::new(
                r#"(?s)<span class=['"]ocrx_word['"].*?title=['"]bbox (\d+) (\d+) (\d+) (\d+).*?>(.*?)</span>"#,
            )
            .expect("word pattern is valid"),
            bold_regex: Regex::new(r"(?i)<(?:strong|b)(?:\s[^>]*)?>")
                .expect("bold pattern is valid"),
            italic_regex: Regex::new(r"(?i)<(?:em|i)(?:\s[^>]*)?>")
                .expect("italic pattern is valid"),
            tag_regex: Regex::new(r"<[^<]+?>").expect("tag pattern is valid"),
            page_regex: Regex::new(r#"(?i)<div[^>]*class=['"]ocr_page['"]"#)
                .expect("page pattern is valid"),
        }
    }

    /// Shared extractor, compiled on first use.
    pub fn shared() -> &'static HocrExtractor {
        static EXTRACTOR: OnceLock<HocrExtractor> = OnceLock::new();
        EXTRACTOR.get_or_init(HocrExtractor::new)
    }

    /// Extract word boxes in the order they appear in the markup.
    pub fn extract(&self, markup: &str) -> Vec<WordBox> {
        let mut words = Vec::new();
        let mut skipped = 0usize;

        for caps in self.word_regex.captures_iter(markup) {
            match self.word_from_captures(&caps) {
                Some(word) => words.push(word),
                None => {
                    skipped += 1;
                    log::trace!("Skipping word element: {:?}", &caps[0]);
                }
            }
        }

        log::debug!("Extracted {} words ({} skipped)", words.len(), skipped);
        words
    }

    /// Split multi-page markup into one slice per `ocr_page` element.
    ///
    /// Markup with fewer than two pages is returned whole. Anything before
    /// the first page stays attached to it.
    pub fn split_pages<'a>(&self, markup: &'a str) -> Vec<&'a str> {
        let starts: Vec<usize> = self.page_regex.find_iter(markup).map(|m| m.start()).collect();
        if starts.len() < 2 {
            return vec![markup];
        }

        let mut pages = Vec::with_capacity(starts.len());
        let mut from = 0;
        for &start in &starts[1..] {
            pages.push(&markup[from..start]);
            from = start;
        }
        pages.push(&markup[from..]);

        log::debug!("Split markup into {} pages", pages.len());
        pages
    }

    fn word_from_captures(&self, caps: &regex::Captures<'_>) -> Option<WordBox> {
        let x1 = caps[1].parse::<u32>().ok()?;
        let y1 = caps[2].parse::<u32>().ok()?;
        let x2 = caps[3].parse::<u32>().ok()?;
        let y2 = caps[4].parse::<u32>().ok()?;
        let content = &caps[5];

        let bold = self.bold_regex.is_match(content);
        let italic = self.italic_regex.is_match(content);
        let stripped = self.tag_regex.replace_all(content, "");
        let text = decode_entities(stripped.trim());
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        Some(
            WordBox::from_bbox(text, x1, y1, x2, y2)?
                .with_bold(bold)
                .with_italic(italic),
        )
    }
}

impl Default for HocrExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode character references; text with unknown entities is kept verbatim.
fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    match quick_xml::escape::unescape(text) {
        Ok(decoded) => decoded,
        Err(e) => {
            log::trace!("Keeping undecodable word text {:?}: {}", text, e);
            Cow::Borrowed(text)
        }
    }
}

/// Extract word boxes from hOCR-like markup using the shared extractor.
pub fn extract_words(markup: &str) -> Vec<WordBox> {
    HocrExtractor::shared().extract(markup)
}
