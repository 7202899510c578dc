//! Core library for Brazilian transit infraction notice processing.
//!
//! This crate provides:
//! - PDF first-page text and table extraction (lopdf + pdf-extract)
//! - Rule-based field extraction for infraction notices (20 recognition
//!   rules with first-pattern-wins priority and Brazilian currency/date
//!   normalization)
//! - The flat `NoticeRecord` output model

pub mod error;
pub mod models;
pub mod notice;
pub mod pdf;

pub use error::{MultaError, PdfError, Result};
pub use models::notice::{NoticeRecord, StatusExtracao};
pub use notice::{NoticeParser, RuleBasedParser};
pub use pdf::{PageContent, PdfExtractor, PdfProcessor, TableGrid};

/// Extract a notice record from raw PDF bytes.
///
/// Runs the full pipeline: load and validate the document, linearize the
/// first page, apply the recognition rules. Provider faults (undecodable
/// bytes, encryption, no pages) are fatal; field-level non-matches are not.
pub fn extract_from_bytes(data: &[u8]) -> Result<NoticeRecord> {
    let mut extractor = PdfExtractor::new();
    extractor.load(data)?;
    let page = extractor.first_page()?;

    Ok(RuleBasedParser::new().parse(&page.text))
}
