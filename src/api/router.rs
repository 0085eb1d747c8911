use axum::{Router, extract::DefaultBodyLimit, middleware, routing::get};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;
use super::verify;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    let max_body = state.upload.max_file_bytes;

    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Verification API
        .merge(verify::create_verify_router())
        // Add state and middleware
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(middleware::from_fn(logging_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
        response::Response,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::config::UploadConfig;
    use crate::domain::customer::{CustomerRecord, NOT_FOUND};
    use crate::domain::variation::FixedRandomSource;
    use crate::infrastructure::ingestion::{DocumentIngestor, parsers::fixtures};

    const BOUNDARY: &str = "statement-boundary";

    fn app_with_draw(draw: f64) -> Router {
        app_with(draw, UploadConfig::default())
    }

    fn app_with(draw: f64, upload: UploadConfig) -> Router {
        let state = AppState::new(
            DocumentIngestor::default(),
            Arc::new(FixedRandomSource::constant(draw)),
            upload,
        );
        create_router_with_state(state)
    }

    fn upload_request(
        part_name: &str,
        filename: &str,
        content_type: Option<&str>,
        body: &[u8],
    ) -> Request<Body> {
        let mut data = format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            BOUNDARY, part_name, filename
        )
        .into_bytes();
        if let Some(content_type) = content_type {
            data.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
        }
        data.extend_from_slice(b"\r\n");
        data.extend_from_slice(body);
        data.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

        Request::builder()
            .method("POST")
            .uri("/verify/bank-statement")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(data))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    async fn record_of(response: Response) -> CustomerRecord {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app_with_draw(0.1).oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_live() {
        let response = app_with_draw(0.1).oneshot(get_request("/live")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_response_carries_request_id() {
        let response = app_with_draw(0.1).oneshot(get_request("/health")).await.unwrap();
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_verify_json_statement() {
        let json = br#"{"firstName": "John", "lastName": "Doe", "address": "123 Main St"}"#;
        let request = upload_request("file", "statement.json", Some("application/json"), json);

        let response = app_with_draw(0.1).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            record_of(response).await,
            CustomerRecord::new("John", "Doe", "123 Main St")
        );
    }

    #[tokio::test]
    async fn test_verify_pdf_statement() {
        let pdf = fixtures::text_pdf(&["First Name: Alice", "Last Name: Smith"]);
        let request = upload_request("file", "statement.pdf", Some("application/pdf"), &pdf);

        let response = app_with_draw(0.1).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            record_of(response).await,
            CustomerRecord::new("Alice", "Smith", NOT_FOUND)
        );
    }

    #[tokio::test]
    async fn test_verify_unsupported_type_is_bare_bad_request() {
        let request = upload_request("file", "statement.txt", Some("text/plain"), b"First Name: A");

        let response = app_with_draw(0.1).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_verify_malformed_json_is_bare_bad_request() {
        let request = upload_request("file", "statement.json", Some("application/json"), b"{oops");

        let response = app_with_draw(0.1).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_verify_corrupted_pdf_is_bad_request() {
        let request = upload_request("file", "statement.pdf", Some("application/pdf"), b"garbage");

        let response = app_with_draw(0.1).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_verify_missing_file_part() {
        let request = upload_request("document", "statement.json", Some("application/json"), b"{}");

        let response = app_with_draw(0.1).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_verify_requires_multipart() {
        let request = Request::builder()
            .method("POST")
            .uri("/verify/bank-statement")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"firstName": "A", "lastName": "B", "address": "C"}"#))
            .unwrap();

        let response = app_with_draw(0.1).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_verify_octet_stream_rejected_by_default() {
        let json = br#"{"firstName": "A", "lastName": "B", "address": "C"}"#;
        let request =
            upload_request("file", "statement.json", Some("application/octet-stream"), json);

        let response = app_with_draw(0.1).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_verify_octet_stream_inferred_when_enabled() {
        let upload = UploadConfig {
            infer_content_type_from_filename: true,
            ..UploadConfig::default()
        };
        let json = br#"{"firstName": "A", "lastName": "B", "address": "C"}"#;
        let request =
            upload_request("file", "statement.json", Some("application/octet-stream"), json);

        let response = app_with(0.1, upload).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(record_of(response).await, CustomerRecord::new("A", "B", "C"));
    }

    #[tokio::test]
    async fn test_verify_body_limit() {
        let upload = UploadConfig {
            max_file_bytes: 64,
            ..UploadConfig::default()
        };
        let request = upload_request("file", "big.json", Some("application/json"), &[b' '; 1024]);

        let response = app_with(0.1, upload).oneshot(request).await.unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_mock_bank_statement_exact_match() {
        let uri = "/bank-statement?firstName=John&lastName=Doe&address=123%20Main%20St";

        let response = app_with_draw(0.1).oneshot(post_request(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            record_of(response).await,
            CustomerRecord::new("John", "Doe", "123 Main St")
        );
    }

    #[tokio::test]
    async fn test_mock_bank_statement_partial_mismatch() {
        let uri = "/bank-statement?firstName=John&lastName=Doe&address=23%20Main%20St";

        let response = app_with_draw(0.85).oneshot(post_request(uri)).await.unwrap();

        assert_eq!(
            record_of(response).await,
            CustomerRecord::new("John", "Doh", "123 Main St")
        );
    }

    #[tokio::test]
    async fn test_mock_bank_statement_full_mismatch_via_get() {
        let uri = "/bank-statement?firstName=John&lastName=Doe&address=123%20Main%20St";

        let response = app_with_draw(0.95).oneshot(get_request(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            record_of(response).await,
            CustomerRecord::new("Jane", "Smith", "123 Main St")
        );
    }

    #[tokio::test]
    async fn test_mock_bank_statement_missing_param() {
        let uri = "/bank-statement?firstName=John&lastName=Doe";

        let response = app_with_draw(0.1).oneshot(post_request(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json["error"]["type"], "invalid_request_error");
        assert_eq!(json["error"]["code"], "query_parse_error");
    }

    #[tokio::test]
    async fn test_credit_report_exact_match() {
        let uri = "/credit-report?firstName=John&lastName=Doe&ssn=999-99-9999";

        let response = app_with_draw(0.1).oneshot(get_request(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_bytes(response).await;
        assert!(!String::from_utf8_lossy(&body).contains("999-99-9999"));
        assert_eq!(
            serde_json::from_slice::<CustomerRecord>(&body).unwrap(),
            CustomerRecord::new("John", "Doe", "123 Main St, Anytown, USA")
        );
    }

    #[tokio::test]
    async fn test_credit_report_partial_mismatch() {
        let uri = "/credit-report?firstName=John&lastName=Doe&ssn=1";

        let response = app_with_draw(0.8).oneshot(get_request(uri)).await.unwrap();

        assert_eq!(
            record_of(response).await,
            CustomerRecord::new("John", "Doh", "123 Main Street, Anytown, USA")
        );
    }

    #[tokio::test]
    async fn test_credit_report_full_mismatch() {
        let uri = "/credit-report?firstName=John&lastName=Doe&ssn=1";

        let response = app_with_draw(0.9).oneshot(get_request(uri)).await.unwrap();

        assert_eq!(
            record_of(response).await,
            CustomerRecord::new("Jane", "Smith", "456 Other Ave, Elsewhere, USA")
        );
    }

    #[tokio::test]
    async fn test_credit_report_requires_ssn() {
        let uri = "/credit-report?firstName=John&lastName=Doe";

        let response = app_with_draw(0.1).oneshot(get_request(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_credit_report_rejects_post() {
        let uri = "/credit-report?firstName=John&lastName=Doe&ssn=1";

        let response = app_with_draw(0.1).oneshot(post_request(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
