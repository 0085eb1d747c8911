//! Bank statement endpoints

use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use tracing::{debug, info, warn};

use crate::api::state::AppState;
use crate::api::types::{ApiError, BankStatementQuery, Query};
use crate::domain::DomainError;
use crate::domain::customer::CustomerRecord;
use crate::domain::ingestion::RequestDocument;

/// Multipart part carrying the statement
pub const FILE_FIELD: &str = "file";

const OCTET_STREAM: &str = "application/octet-stream";

/// POST /verify/bank-statement
/// Extract the customer record from an uploaded JSON or PDF statement
pub async fn verify_bank_statement(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CustomerRecord>, ApiError> {
    let mut multipart = multipart.map_err(|e| {
        warn!(error = %e, "Statement upload is not a multipart form");
        ApiError::rejected()
    })?;

    let document = read_statement(&mut multipart, state.upload.infer_content_type_from_filename)
        .await
        .map_err(|e| {
            warn!(error = %e, "Statement upload rejected");
            ApiError::from(e)
        })?;

    let content_type = document.declared_content_type().to_string();
    let size = document.content.len();
    let ingestor = state.document_ingestor.clone();

    let result = tokio::task::spawn_blocking(move || ingestor.ingest_document(&document))
        .await
        .map_err(|e| DomainError::internal(format!("Ingestion task failed: {}", e)))?;

    match result {
        Ok(record) => {
            info!(
                content_type = %content_type,
                size,
                missing = ?record.missing_fields(),
                "Statement ingested"
            );
            Ok(Json(record))
        }
        Err(e) => {
            warn!(content_type = %content_type, size, error = %e, "Statement ingestion failed");
            Err(e.into())
        }
    }
}

/// POST|GET /bank-statement
/// Simulate a bank's answer to a customer lookup
pub async fn mock_bank_statement(
    State(state): State<AppState>,
    Query(query): Query<BankStatementQuery>,
) -> Json<CustomerRecord> {
    let generator = &state.bank_statement_generator;
    let variation =
        generator.generate_variation(&query.first_name, &query.last_name, &query.address);

    debug!(
        profile = %generator.profile().name,
        band = %variation.band,
        "Generated mock bank statement"
    );

    Json(variation.record)
}

/// Read the `file` part of the upload, ignoring any other parts
async fn read_statement(
    multipart: &mut Multipart,
    infer_content_type: bool,
) -> Result<RequestDocument, DomainError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| DomainError::validation(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(|s| s.to_string());
        let content_type = resolve_content_type(
            field.content_type(),
            filename.as_deref(),
            infer_content_type,
        );

        let content = field
            .bytes()
            .await
            .map_err(|e| DomainError::validation(format!("Failed to read file: {}", e)))?;

        let mut document = RequestDocument::new(content);
        if let Some(content_type) = content_type {
            document = document.with_content_type(content_type);
        }
        if let Some(filename) = filename {
            document = document.with_filename(filename);
        }

        return Ok(document);
    }

    Err(DomainError::validation(format!(
        "Missing '{}' part",
        FILE_FIELD
    )))
}

/// Declared content type, optionally guessed from the file name when the part
/// is untyped or declared as a generic binary stream
fn resolve_content_type(
    declared: Option<&str>,
    filename: Option<&str>,
    infer: bool,
) -> Option<String> {
    let untyped = declared.is_none_or(|ct| ct.trim().eq_ignore_ascii_case(OCTET_STREAM));

    if infer && untyped {
        if let Some(guess) = filename.and_then(|name| mime_guess::from_path(name).first()) {
            return Some(guess.essence_str().to_string());
        }
    }

    declared.map(|ct| ct.to_string())
}
