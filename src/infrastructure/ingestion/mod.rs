//! Document ingestion infrastructure
//!
//! This module provides the concrete decoders behind the ingestion traits and
//! the `DocumentIngestor` that dispatches between them.

pub mod ingestor;
pub mod parsers;

// Re-export parsers
pub use parsers::{JsonRecordDecoder, PdfTextExtractor};

// Re-export ingestor
pub use ingestor::DocumentIngestor;
