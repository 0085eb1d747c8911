//! Infrastructure layer - concrete document readers, randomness and logging

pub mod ingestion;
pub mod logging;
pub mod random;

pub use ingestion::DocumentIngestor;
pub use random::ThreadRandomSource;
