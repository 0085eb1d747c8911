//! Statement ingestion: content-type dispatch over the document readers

use std::sync::Arc;

use tracing::debug;

use crate::domain::DomainError;
use crate::domain::customer::CustomerRecord;
use crate::domain::ingestion::{
    DocumentKind, RequestDocument, StructuredDecoder, TextExtractor, extract_statement_fields,
};

use super::parsers::{JsonRecordDecoder, PdfTextExtractor};

/// Turns an uploaded statement into a customer record
///
/// JSON statements are decoded strictly. PDF statements are rendered to text
/// and scanned for labelled fields, so a PDF never fails just because a field
/// is missing.
#[derive(Debug, Clone)]
pub struct DocumentIngestor {
    decoder: Arc<dyn StructuredDecoder>,
    extractor: Arc<dyn TextExtractor>,
}

impl DocumentIngestor {
    /// Create an ingestor with custom readers
    pub fn new(decoder: Arc<dyn StructuredDecoder>, extractor: Arc<dyn TextExtractor>) -> Self {
        Self { decoder, extractor }
    }

    /// Ingest a payload according to its declared content type
    pub fn ingest(
        &self,
        bytes: &[u8],
        declared_content_type: &str,
    ) -> Result<CustomerRecord, DomainError> {
        let kind = DocumentKind::from_content_type(declared_content_type)
            .ok_or_else(|| DomainError::unsupported_document_type(declared_content_type))?;

        debug!(kind = %kind, size = bytes.len(), "Ingesting statement");

        match kind {
            DocumentKind::Structured => self.decoder.decode(bytes),
            DocumentKind::Rendered => {
                let text = self.extractor.extract_text(bytes)?;
                let record = extract_statement_fields(&text);

                let missing = record.missing_fields();
                if !missing.is_empty() {
                    debug!(missing = ?missing, "Statement fields not found in text");
                }

                Ok(record)
            }
        }
    }

    /// Ingest an uploaded document
    pub fn ingest_document(&self, document: &RequestDocument) -> Result<CustomerRecord, DomainError> {
        self.ingest(&document.content, document.declared_content_type())
    }
}

impl Default for DocumentIngestor {
    fn default() -> Self {
        Self::new(
            Arc::new(JsonRecordDecoder::new()),
            Arc::new(PdfTextExtractor::new()),
        )
    }
}
