use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unsupported document type: '{content_type}'")]
    UnsupportedDocumentType { content_type: String },

    #[error("Malformed document: {message}")]
    MalformedDocument { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn unsupported_document_type(content_type: impl Into<String>) -> Self {
        Self::UnsupportedDocumentType {
            content_type: content_type.into(),
        }
    }

    pub fn malformed_document(message: impl Into<String>) -> Self {
        Self::MalformedDocument {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Internal { .. })
    }
}
