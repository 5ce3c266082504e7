//! Layout reconstruction module.
//!
//! The hOCR path runs word extraction, line clustering and layout
//! classification in sequence. The markdown path parses text straight into
//! the same document model.

mod hocr;
mod layout;
mod lines;
mod markdown;
mod options;
mod reconstruct;
mod word;

pub use hocr::{extract_words, HocrExtractor};
pub use layout::{classify_lines, reconstruct_words, LayoutClassifier};
pub use lines::{cluster_lines, median_height, Line};
pub use markdown::{parse_markdown, parse_markdown_with_options, MarkdownParser};
pub use options::LayoutOptions;
pub use reconstruct::{reconstruct_hocr, reconstruct_hocr_with_options, HocrParser};
pub use word::WordBox;
