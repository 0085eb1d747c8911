//! Simulated verification results
//!
//! This module provides:
//! - `RandomSource` trait for injecting randomness
//! - `OutcomeBand` selection from a uniform draw
//! - `MismatchProfile` describing each call site's substitutions
//! - `MockVariationGenerator` combining the three

pub mod band;
pub mod generator;
pub mod profile;
pub mod random;

pub use band::{EXACT_MATCH_UPPER, OutcomeBand, PARTIAL_MISMATCH_UPPER};
pub use generator::{MockVariationGenerator, Variation};
pub use profile::{
    AddressMutation, CREDIT_REPORT_ADDRESS, CREDIT_REPORT_OTHER_ADDRESS, MismatchProfile,
};
pub use random::RandomSource;

#[cfg(test)]
pub use random::mock::FixedRandomSource;
