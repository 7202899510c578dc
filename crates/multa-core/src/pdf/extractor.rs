//! First-page text and table extraction using lopdf and pdf-extract.

use lazy_static::lazy_static;
use lopdf::Document;
use regex::Regex;
use tracing::debug;

use super::{PdfProcessor, Result};
use crate::error::PdfError;

lazy_static! {
    // Column boundary inside a text line: a tab, or a run of two or more
    // spaces left behind by the text linearization.
    static ref CELL_SEPARATOR: Regex = Regex::new(r"\t|\s{2,}").unwrap();
}

/// PDF content extractor for infraction notices.
///
/// Owns the parsed document for the duration of one extraction; dropping the
/// extractor releases every handle on the byte stream, on success and failure
/// alike.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

/// Content of the first page of a notice.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// Linearized text of the page.
    pub text: String,
    /// Tabular regions detected on the page. Currently unused by the
    /// recognition rules.
    pub tables: Vec<TableGrid>,
}

/// A grid of table cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGrid {
    pub rows: Vec<Vec<String>>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    fn document(&self) -> Result<&Document> {
        self.document
            .as_ref()
            .ok_or_else(|| PdfError::Parse("no document loaded".to_string()))
    }

    fn first_page_text(&self) -> Result<String> {
        let doc = self.document()?;
        let pages = doc.get_pages();
        let first = pages.keys().next().copied().ok_or(PdfError::NoPages)?;

        let text = doc
            .extract_text(&[first])
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        // lopdf cannot decode every content-stream encoding. For single-page
        // documents the whole-document extractor is an equivalent fallback.
        if text.trim().is_empty() && pages.len() == 1 {
            debug!("first page yielded no text via lopdf, retrying with pdf-extract");
            return pdf_extract::extract_text_from_mem(&self.raw_data)
                .map_err(|e| PdfError::TextExtraction(e.to_string()));
        }

        Ok(text)
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty-password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("decrypted PDF with empty password");

            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn first_page(&self) -> Result<PageContent> {
        let text = self.first_page_text()?;
        let tables = detect_tables(&text);

        debug!(
            "extracted {} chars and {} table grids from first page",
            text.len(),
            tables.len()
        );

        Ok(PageContent { text, tables })
    }
}

/// Detect tabular regions in linearized page text.
///
/// A candidate row is a line that splits into two or more cells at column
/// boundaries; two or more consecutive rows with the same cell count form a
/// grid.
fn detect_tables(text: &str) -> Vec<TableGrid> {
    let mut grids = Vec::new();
    let mut current: Vec<Vec<String>> = Vec::new();

    for line in text.lines() {
        let cells = split_cells(line);
        if cells.len() >= 2 {
            if current.last().is_some_and(|prev| prev.len() != cells.len()) {
                flush_grid(&mut grids, &mut current);
            }
            current.push(cells);
        } else {
            flush_grid(&mut grids, &mut current);
        }
    }
    flush_grid(&mut grids, &mut current);

    grids
}

fn split_cells(line: &str) -> Vec<String> {
    CELL_SEPARATOR
        .split(line.trim())
        .filter(|cell| !cell.is_empty())
        .map(|cell| cell.to_string())
        .collect()
}

fn flush_grid(grids: &mut Vec<TableGrid>, current: &mut Vec<Vec<String>>) {
    if current.len() >= 2 {
        grids.push(TableGrid {
            rows: std::mem::take(current),
        });
    } else {
        current.clear();
    }
}
