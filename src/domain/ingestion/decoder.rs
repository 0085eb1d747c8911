//! Collaborator traits used to read uploaded documents

use std::fmt::Debug;

use crate::domain::DomainError;
use crate::domain::customer::CustomerRecord;

/// Decodes a structured payload straight into a customer record
pub trait StructuredDecoder: Send + Sync + Debug {
    /// Decode the payload, failing with `MalformedDocument` on any mismatch
    fn decode(&self, bytes: &[u8]) -> Result<CustomerRecord, DomainError>;
}

/// Renders a document into plain text
pub trait TextExtractor: Send + Sync + Debug {
    /// Extract the full text, failing with `MalformedDocument` when unreadable
    fn extract_text(&self, bytes: &[u8]) -> Result<String, DomainError>;
}
