//! Error types for unscan library.

use thiserror::Error;

/// Result type alias for unscan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during layout reconstruction.
///
/// Malformed word elements in OCR markup are not errors: the extractor
/// skips them and carries on.
#[derive(Error, Debug)]
pub enum Error {
    /// The input produced no words (hOCR) or no non-blank lines (markdown).
    #[error("no text detected")]
    EmptyInput,

    /// A layout option is outside its valid range.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Error during rendering (Markdown, text, HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// A background reconstruction task panicked or was cancelled.
    #[cfg(feature = "async")]
    #[error("Background task failed: {0}")]
    Task(String),
}

impl Error {
    /// Check whether this error means the source had no recognizable text.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Error::EmptyInput)
    }
}
