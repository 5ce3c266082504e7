//! Reference renderers for previewing and exporting document models.

mod html;
mod json;
mod markdown;
mod options;
mod text;

pub use html::{to_html, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::RenderOptions;
pub use text::to_text;
