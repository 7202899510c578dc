//! Error types for the multa-core library.

use thiserror::Error;

/// Main error type for the multa library.
#[derive(Error, Debug)]
pub enum MultaError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to PDF processing.
///
/// Any of these is fatal for the document being processed: the extraction
/// pipeline has no partial-output mode below the text-provider stage.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF byte stream.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from the first page.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Result type for the multa library.
pub type Result<T> = std::result::Result<T, MultaError>;
