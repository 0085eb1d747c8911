//! Document ingestion domain types and traits
//!
//! This module provides:
//! - `DocumentKind` dispatch from a declared content type
//! - `StructuredDecoder` and `TextExtractor` traits for reading documents
//! - A field matcher table for pulling customer details out of free text

pub mod decoder;
pub mod document;
pub mod fields;

// Re-export main types
pub use decoder::{StructuredDecoder, TextExtractor};
pub use document::{DocumentKind, JSON_MIME, PDF_MIME, RequestDocument};
pub use fields::{
    CaptureRule, FieldMatcher, RecordField, extract_fields, extract_statement_fields,
    statement_matchers,
};

// Re-export mocks for testing
#[cfg(test)]
pub use decoder::mock::{MockStructuredDecoder, MockTextExtractor};
