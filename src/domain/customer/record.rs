//! Customer record value type

use serde::{Deserialize, Serialize};

/// Placeholder for a field that could not be located in a document
pub const NOT_FOUND: &str = "Not Found";

/// Normalized customer data returned by every verification endpoint
///
/// All three fields are always present. A field that could not be extracted
/// holds [`NOT_FOUND`] rather than being omitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CustomerRecord {
    first_name: String,
    last_name: String,
    address: String,
}

impl CustomerRecord {
    /// Create a new record
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
        }
    }

    /// Create a record with every field set to [`NOT_FOUND`]
    pub fn not_found() -> Self {
        Self::new(NOT_FOUND, NOT_FOUND, NOT_FOUND)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Fields that hold the [`NOT_FOUND`] placeholder, by JSON name
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("address", &self.address),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_str() == NOT_FOUND)
        .map(|(name, _)| name)
        .collect()
    }
}
