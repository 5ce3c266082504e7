//! Async wrappers for use inside a tokio runtime.
//!
//! The engine itself never yields. Each call here runs one whole
//! reconstruction on the blocking pool; dropping the future discards the
//! result but does not interrupt the work already started.

use crate::error::{Error, Result};
use crate::model::Document;
use crate::parser::{parse_markdown_with_options, reconstruct_hocr_with_options, LayoutOptions};

/// Reconstruct a document from hOCR-like markup on the blocking pool.
pub async fn reconstruct_hocr_async(markup: String, options: LayoutOptions) -> Result<Document> {
    run_blocking(move || reconstruct_hocr_with_options(&markup, &options)).await
}

/// Parse markdown text on the blocking pool.
pub async fn parse_markdown_async(text: String, options: LayoutOptions) -> Result<Document> {
    run_blocking(move || parse_markdown_with_options(&text, &options)).await
}

async fn run_blocking<F>(job: F) -> Result<Document>
where
    F: FnOnce() -> Result<Document> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| Error::Task(e.to_string()))?
}
