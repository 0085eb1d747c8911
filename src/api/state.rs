//! Application state for shared services

use std::sync::Arc;

use crate::config::UploadConfig;
use crate::domain::variation::{MismatchProfile, MockVariationGenerator, RandomSource};
use crate::infrastructure::ingestion::DocumentIngestor;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub document_ingestor: Arc<DocumentIngestor>,
    pub bank_statement_generator: Arc<MockVariationGenerator>,
    pub credit_report_generator: Arc<MockVariationGenerator>,
    pub upload: UploadConfig,
}

impl AppState {
    /// Build the state with both mock generators drawing from one random source
    pub fn new(
        document_ingestor: DocumentIngestor,
        random: Arc<dyn RandomSource>,
        upload: UploadConfig,
    ) -> Self {
        Self {
            document_ingestor: Arc::new(document_ingestor),
            bank_statement_generator: Arc::new(MockVariationGenerator::new(
                MismatchProfile::bank_statement(),
                random.clone(),
            )),
            credit_report_generator: Arc::new(MockVariationGenerator::new(
                MismatchProfile::credit_report(),
                random,
            )),
            upload,
        }
    }
}
