//! Assembly of classified blocks into a [`Document`].

use super::{Block, Document};

/// Collects blocks in emission order and hands them off as one [`Document`].
///
/// The builder performs no inference of its own; callers push blocks in
/// reading order and call [`DocumentBuilder::build`] once.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    blocks: Vec<Block>,
}

impl DocumentBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with room for `capacity` blocks.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            blocks: Vec::with_capacity(capacity),
        }
    }

    /// Append a block.
    pub fn push(&mut self, block: impl Into<Block>) {
        self.blocks.push(block.into());
    }

    /// Append every block of an already-built document, keeping its order.
    pub fn append(&mut self, doc: Document) {
        self.blocks.extend(doc.into_blocks());
    }

    /// Number of blocks collected so far.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if no blocks were collected.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Finish assembly.
    pub fn build(self) -> Document {
        Document::from_blocks(self.blocks)
    }
}

impl Extend<Block> for DocumentBuilder {
    fn extend<I: IntoIterator<Item = Block>>(&mut self, iter: I) {
        self.blocks.extend(iter);
    }
}

impl FromIterator<Block> for DocumentBuilder {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Heading, Paragraph};

    #[test]
    fn test_builder_preserves_order() {
        let mut builder = DocumentBuilder::new();
        builder.push(Heading::with_text("A", 1));
        builder.push(Block::Blank);
        builder.push(Paragraph::with_text("B"));
        assert_eq!(builder.len(), 3);

        let doc = builder.build();
        assert!(doc.blocks[0].is_heading());
        assert!(doc.blocks[1].is_blank());
        assert_eq!(doc.blocks[2].plain_text(), "B");
    }

    #[test]
    fn test_builder_append() {
        let first = Document::from_blocks(vec![Paragraph::with_text("1").into()]);
        let second = Document::from_blocks(vec![Paragraph::with_text("2").into()]);

        let mut builder = DocumentBuilder::new();
        builder.append(first);
        builder.append(second);

        assert_eq!(builder.build().plain_text(), "1\n2");
    }

    #[test]
    fn test_builder_empty() {
        let builder: DocumentBuilder = std::iter::empty().collect();
        assert!(builder.is_empty());
        assert!(builder.build().is_empty());
    }
}
