//! Verification Service
//!
//! HTTP API producing normalized customer records:
//! - Statement ingestion from JSON or PDF uploads
//! - Mock bank statement and credit report results with an 80/10/10
//!   exact/partial/full mismatch split

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::{DocumentIngestor, ThreadRandomSource};
use tracing::info;

/// Create the application state with default configuration
pub fn create_app_state() -> AppState {
    create_app_state_with_config(&AppConfig::default())
}

/// Create the application state with custom configuration
pub fn create_app_state_with_config(config: &AppConfig) -> AppState {
    info!(
        max_file_bytes = config.upload.max_file_bytes,
        infer_content_type = config.upload.infer_content_type_from_filename,
        "Initializing verification services"
    );

    AppState::new(
        DocumentIngestor::default(),
        Arc::new(ThreadRandomSource::new()),
        config.upload.clone(),
    )
}
