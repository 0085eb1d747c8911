//! Mock verification result generator

use std::sync::Arc;

use crate::domain::customer::CustomerRecord;

use super::band::OutcomeBand;
use super::profile::MismatchProfile;
use super::random::RandomSource;

/// A generated record together with the band that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Variation {
    pub band: OutcomeBand,
    pub record: CustomerRecord,
}

/// Simulates a verification provider's response to a customer lookup
///
/// Each call takes one draw from the random source and answers with an exact
/// match (80%), a partial mismatch (10%) or a full mismatch (10%).
#[derive(Debug, Clone)]
pub struct MockVariationGenerator {
    profile: MismatchProfile,
    random: Arc<dyn RandomSource>,
}

impl MockVariationGenerator {
    pub fn new(profile: MismatchProfile, random: Arc<dyn RandomSource>) -> Self {
        Self { profile, random }
    }

    pub fn profile(&self) -> &MismatchProfile {
        &self.profile
    }

    /// Generate a record for the given customer details
    pub fn generate(&self, first_name: &str, last_name: &str, address: &str) -> CustomerRecord {
        self.generate_variation(first_name, last_name, address).record
    }

    /// Generate a record and report which band was selected
    pub fn generate_variation(&self, first_name: &str, last_name: &str, address: &str) -> Variation {
        let band = OutcomeBand::from_draw(self.random.next_uniform());
        let profile = &self.profile;

        let record = match band {
            OutcomeBand::ExactMatch => CustomerRecord::new(first_name, last_name, address),
            OutcomeBand::PartialMismatch => CustomerRecord::new(
                first_name,
                profile.partial_last_name.as_str(),
                profile.partial_address.apply(address),
            ),
            OutcomeBand::FullMismatch => CustomerRecord::new(
                profile.full_first_name.as_str(),
                profile.full_last_name.as_str(),
                profile.full_address.apply(address),
            ),
        };

        Variation { band, record }
    }
}
