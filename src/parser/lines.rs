//! Grouping of word boxes into text lines.

use super::WordBox;

/// A text line: words sharing one inferred baseline, ordered left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Clustering key: the top edge of the first word assigned to the line
    pub top_y: u32,
    /// Words in the line, sorted by `x` once clustering is finished
    pub words: Vec<WordBox>,
}

impl Line {
    /// Start a line keyed by its first word.
    fn start(word: WordBox) -> Self {
        Self {
            top_y: word.y,
            words: vec![word],
        }
    }

    /// Leftmost word's `x`.
    pub fn left(&self) -> u32 {
        self.words.iter().map(|w| w.x).min().unwrap_or(0)
    }

    /// Tallest word's height.
    pub fn max_height(&self) -> u32 {
        self.words.iter().map(|w| w.height).max().unwrap_or(0)
    }

    /// Bottom edge: `top_y` plus the tallest word's height.
    pub fn bottom(&self) -> u32 {
        self.top_y.saturating_add(self.max_height())
    }

    /// Mean word height.
    pub fn average_height(&self) -> f64 {
        if self.words.is_empty() {
            return 0.0;
        }
        let total: u64 = self.words.iter().map(|w| u64::from(w.height)).sum();
        total as f64 / self.words.len() as f64
    }

    /// Words joined by single spaces.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Cluster words into lines, returned in ascending `top_y` order.
///
/// Words are visited in input order. Each joins the first existing line,
/// in creation order, whose key is closer than `tolerance` to the word's
/// top edge; otherwise it starts a new line keyed by its own top edge.
/// The first match wins even when a later line is nearer, so the result
/// depends on input order. Words in each line are then sorted by `x`.
pub fn cluster_lines(words: &[WordBox], tolerance: u32) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();

    for word in words {
        match lines
            .iter_mut()
            .find(|line| line.top_y.abs_diff(word.y) < tolerance)
        {
            Some(line) => line.words.push(word.clone()),
            None => lines.push(Line::start(word.clone())),
        }
    }

    for line in &mut lines {
        line.words.sort_by_key(|w| w.x);
    }
    lines.sort_by_key(|line| line.top_y);

    log::debug!("Clustered {} words into {} lines", words.len(), lines.len());
    lines
}

/// Median word height: the upper middle element of the sorted heights.
///
/// Returns `fallback` for an empty slice.
pub fn median_height(words: &[WordBox], fallback: u32) -> u32 {
    if words.is_empty() {
        return fallback;
    }
    let mut heights: Vec<u32> = words.iter().map(|w| w.height).collect();
    heights.sort_unstable();
    heights[heights.len() / 2]
}
