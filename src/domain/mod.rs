//! Domain layer - Core business logic and entities

pub mod customer;
pub mod error;
pub mod ingestion;
pub mod variation;

pub use customer::{CustomerRecord, NOT_FOUND};
pub use error::DomainError;
pub use ingestion::{DocumentKind, RequestDocument, StructuredDecoder, TextExtractor};
pub use variation::{
    AddressMutation, MismatchProfile, MockVariationGenerator, OutcomeBand, RandomSource,
};
