//! Plain text rendering.

use crate::error::Result;
use crate::model::{Block, Document};

use super::RenderOptions;

/// Convert a document to plain text, one block per line.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let output = doc
        .iter()
        .filter(|block| options.include_blank_blocks || !block.is_blank())
        .map(Block::plain_text)
        .collect::<Vec<_>>()
        .join("\n");

    Ok(output.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Heading, Paragraph, TextRun};

    #[test]
    fn test_to_text() {
        let mut para = Paragraph::new();
        para.add_run(TextRun::bold("Hello,"));
        para.add_run(TextRun::new(" world!"));

        let doc = Document::from_blocks(vec![
            Heading::with_text("Title", 1).into(),
            Block::Blank,
            para.into(),
        ]);

        let result = to_text(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(result, "Title\n\nHello, world!");

        let options = RenderOptions::new().with_blank_blocks(false);
        assert_eq!(to_text(&doc, &options).unwrap(), "Title\nHello, world!");
    }
}
