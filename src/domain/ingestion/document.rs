//! Uploaded document and content-type dispatch

use bytes::Bytes;
use serde::Serialize;

/// MIME type of structured (JSON) statements
pub const JSON_MIME: &str = "application/json";

/// MIME type of rendered (PDF) statements
pub const PDF_MIME: &str = "application/pdf";

/// How a document's content has to be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Structured data decoded straight into a record
    Structured,
    /// Rendered document whose text is scanned for labelled fields
    Rendered,
}

impl DocumentKind {
    /// Detect the document kind from a declared content type
    ///
    /// Parameters such as `charset` are ignored and the essence is compared
    /// case-insensitively.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type.split(';').next().unwrap_or_default().trim();

        if essence.eq_ignore_ascii_case(JSON_MIME) {
            return Some(Self::Structured);
        }

        if essence.eq_ignore_ascii_case(PDF_MIME) {
            return Some(Self::Rendered);
        }

        None
    }

    /// Canonical MIME type for this kind
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Structured => JSON_MIME,
            Self::Rendered => PDF_MIME,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Structured => write!(f, "structured"),
            Self::Rendered => write!(f, "rendered"),
        }
    }
}

/// A document received for ingestion
#[derive(Debug, Clone)]
pub struct RequestDocument {
    /// Raw payload
    pub content: Bytes,
    /// Content type declared by the uploader
    pub content_type: Option<String>,
    /// Original file name, if the uploader sent one
    pub filename: Option<String>,
}

impl RequestDocument {
    /// Create a document from its payload
    pub fn new(content: impl Into<Bytes>) -> Self {
        Self {
            content: content.into(),
            content_type: None,
            filename: None,
        }
    }

    /// Set the declared content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the file name
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Declared content type, or an empty string when none was sent
    pub fn declared_content_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or_default()
    }
}
