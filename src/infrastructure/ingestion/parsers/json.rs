//! JSON statement decoder

use crate::domain::DomainError;
use crate::domain::customer::CustomerRecord;
use crate::domain::ingestion::StructuredDecoder;

/// Strict decoder for JSON statements
///
/// The payload must be an object with exactly `firstName`, `lastName` and
/// `address`, all strings.
#[derive(Debug, Clone, Default)]
pub struct JsonRecordDecoder;

impl JsonRecordDecoder {
    /// Create a new JSON decoder
    pub fn new() -> Self {
        Self
    }
}

impl StructuredDecoder for JsonRecordDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<CustomerRecord, DomainError> {
        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| DomainError::malformed_document(format!("Invalid JSON: {}", e)))?;

        // serde also accepts a positional array for structs
        if !value.is_object() {
            return Err(DomainError::malformed_document(
                "Expected a JSON object with firstName, lastName and address",
            ));
        }

        serde_json::from_value(value)
            .map_err(|e| DomainError::malformed_document(format!("Invalid statement: {}", e)))
    }
}
