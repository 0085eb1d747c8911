//! API error types

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Error categories reported in the error envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    ServerError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::ServerError => write!(f, "server_error"),
        }
    }
}

/// JSON error envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error with status code
///
/// A `None` response is sent as an empty body. Statement uploads fail this way
/// so that nothing about the document is echoed back.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: Option<ApiErrorResponse>,
}

impl ApiError {
    /// Create a new API error with a JSON body
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: Some(ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    param: None,
                    code: None,
                },
            }),
        }
    }

    /// Create an error with no body
    pub fn bare(status: StatusCode) -> Self {
        Self {
            status,
            response: None,
        }
    }

    /// Add parameter info
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        if let Some(response) = self.response.as_mut() {
            response.error.param = Some(param.into());
        }
        self
    }

    /// Add error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        if let Some(response) = self.response.as_mut() {
            response.error.code = Some(code.into());
        }
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, message)
    }

    /// Bad request with no detail
    pub fn rejected() -> Self {
        Self::bare(StatusCode::BAD_REQUEST)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiErrorType::ServerError, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.response {
            Some(response) => (self.status, Json(response)).into_response(),
            None => self.status.into_response(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::UnsupportedDocumentType { .. }
            | DomainError::MalformedDocument { .. }
            | DomainError::Validation { .. } => Self::rejected(),
            DomainError::Internal { message } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.response {
            Some(response) => write!(
                f,
                "{}: {}",
                response.error.error_type, response.error.message
            ),
            None => write!(f, "{}", self.status),
        }
    }
}

impl std::error::Error for ApiError {}
