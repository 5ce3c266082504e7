//! hOCR-to-document pipeline: extraction, clustering, classification.

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{Document, DocumentBuilder};

use super::hocr::HocrExtractor;
use super::layout::reconstruct_words;
use super::LayoutOptions;

/// Reconstructs documents from hOCR-like markup.
pub struct HocrParser {
    options: LayoutOptions,
}

impl HocrParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self {
            options: LayoutOptions::default(),
        }
    }

    /// Create a parser with custom options.
    pub fn with_options(options: LayoutOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Reconstruct a document from markup.
    ///
    /// Multi-page markup is reconstructed page by page when `split_pages`
    /// is set, and the pages are concatenated in order. Returns
    /// [`Error::EmptyInput`] when no page yields a word.
    pub fn parse(&self, markup: &str) -> Result<Document> {
        self.options.validate()?;
        let extractor = HocrExtractor::shared();

        let pages = if self.options.split_pages {
            extractor.split_pages(markup)
        } else {
            vec![markup]
        };

        if pages.len() == 1 {
            let words = extractor.extract(pages[0]);
            return reconstruct_words(&words, &self.options);
        }

        let results: Vec<Result<Document>> = if self.options.parallel {
            pages
                .par_iter()
                .map(|page| self.parse_page(extractor, page))
                .collect()
        } else {
            pages
                .iter()
                .map(|page| self.parse_page(extractor, page))
                .collect()
        };

        let mut builder = DocumentBuilder::new();
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(page) => builder.append(page),
                Err(Error::EmptyInput) => log::debug!("Page {} has no words", index + 1),
                Err(e) => return Err(e),
            }
        }

        if builder.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(builder.build())
    }

    fn parse_page(&self, extractor: &HocrExtractor, page: &str) -> Result<Document> {
        let words = extractor.extract(page);
        reconstruct_words(&words, &self.options)
    }
}

impl Default for HocrParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Reconstruct a document from hOCR-like markup with default options.
pub fn reconstruct_hocr(markup: &str) -> Result<Document> {
    HocrParser::new().parse(markup)
}

/// Reconstruct a document from hOCR-like markup with custom options.
pub fn reconstruct_hocr_with_options(markup: &str, options: &LayoutOptions) -> Result<Document> {
    HocrParser::with_options(options.clone()).parse(markup)
}
