//! PDF processing module.
//!
//! The notice pipeline only ever looks at the first page: every field the
//! recognition rules know about is printed there. The provider hands back the
//! linearized text of that page plus any tabular regions it can detect;
//! tables are surfaced for forward compatibility but no rule consumes them.

mod extractor;

pub use extractor::{PageContent, PdfExtractor, TableGrid};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF text providers.
pub trait PdfProcessor {
    /// Load a PDF from bytes. Fails on undecodable byte streams, encrypted
    /// documents that cannot be opened, and documents with no pages.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract the content of the first page.
    fn first_page(&self) -> Result<PageContent>;
}
