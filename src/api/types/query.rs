//! Custom query extractor that returns errors as JSON

use axum::{
    extract::{FromRequestParts, Query as AxumQuery},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Query string extractor whose rejections use the API error envelope
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<T>(pub T);

impl<T> Query<T> {
    /// Consume the extractor and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Query<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Query rejection error that returns API error format
#[derive(Debug)]
pub struct QueryRejection {
    status: StatusCode,
    message: String,
}

impl IntoResponse for QueryRejection {
    fn into_response(self) -> Response {
        let mut error = ApiError::bad_request(self.message).with_code("query_parse_error");
        error.status = self.status;
        error.into_response()
    }
}

impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = QueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumQuery::<T>::from_request_parts(parts, state).await {
            Ok(AxumQuery(value)) => Ok(Query(value)),
            Err(rejection) => Err(QueryRejection {
                status: rejection.status(),
                message: format!("Invalid query parameters: {}", rejection.body_text()),
            }),
        }
    }
}
