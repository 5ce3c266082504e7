//! Document model types.
//!
//! This module defines the output of layout reconstruction: an ordered
//! sequence of blocks (paragraphs, headings, spacers) made of styled runs.
//! Both the hOCR layout path and the markdown path target this model, so a
//! renderer only has to understand one shape.

mod block;
mod builder;
mod document;
mod run;

pub use block::{Block, Heading, Paragraph, MAX_HEADING_LEVEL};
pub use builder::DocumentBuilder;
pub use document::Document;
pub use run::{Alignment, TextRun, TextStyle};
