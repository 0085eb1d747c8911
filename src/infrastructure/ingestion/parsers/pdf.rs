//! PDF text extractor

use crate::domain::DomainError;
use crate::domain::ingestion::TextExtractor;

/// Extracts the plain-text rendering of a PDF with `pdf-extract`
#[derive(Debug, Clone, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Create a new PDF extractor
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, DomainError> {
        // pdf-extract panics on some malformed inputs instead of returning an error
        match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(DomainError::malformed_document(format!(
                "Unreadable PDF: {}",
                e
            ))),
            Err(_) => Err(DomainError::malformed_document(
                "Unreadable PDF: extraction aborted",
            )),
        }
    }
}
