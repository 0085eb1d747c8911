//! Outcome bands of a simulated verification

use serde::{Deserialize, Serialize};

/// Draws below this value produce an exact match
pub const EXACT_MATCH_UPPER: f64 = 0.80;

/// Draws below this value (and at or above [`EXACT_MATCH_UPPER`]) produce a partial mismatch
pub const PARTIAL_MISMATCH_UPPER: f64 = 0.90;

/// Category of a simulated verification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeBand {
    /// Record returned unchanged
    ExactMatch,
    /// Cosmetic differences in last name and address
    PartialMismatch,
    /// A different person
    FullMismatch,
}

impl OutcomeBand {
    /// Select the band for a uniform draw
    ///
    /// Bands are closed on the low end. Anything not below
    /// [`PARTIAL_MISMATCH_UPPER`] (including NaN) is a full mismatch.
    pub fn from_draw(draw: f64) -> Self {
        if draw < EXACT_MATCH_UPPER {
            Self::ExactMatch
        } else if draw < PARTIAL_MISMATCH_UPPER {
            Self::PartialMismatch
        } else {
            Self::FullMismatch
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExactMatch => "exact_match",
            Self::PartialMismatch => "partial_mismatch",
            Self::FullMismatch => "full_mismatch",
        }
    }
}

impl std::fmt::Display for OutcomeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_band() {
        assert_eq!(OutcomeBand::from_draw(0.0), OutcomeBand::ExactMatch);
        assert_eq!(OutcomeBand::from_draw(0.1), OutcomeBand::ExactMatch);
        assert_eq!(OutcomeBand::from_draw(0.5), OutcomeBand::ExactMatch);
        assert_eq!(OutcomeBand::from_draw(0.799_999), OutcomeBand::ExactMatch);
    }

    #[test]
    fn test_partial_mismatch_band() {
        assert_eq!(OutcomeBand::from_draw(0.80), OutcomeBand::PartialMismatch);
        assert_eq!(OutcomeBand::from_draw(0.85), OutcomeBand::PartialMismatch);
        assert_eq!(OutcomeBand::from_draw(0.899_999), OutcomeBand::PartialMismatch);
    }

    #[test]
    fn test_full_mismatch_band() {
        assert_eq!(OutcomeBand::from_draw(0.90), OutcomeBand::FullMismatch);
        assert_eq!(OutcomeBand::from_draw(0.95), OutcomeBand::FullMismatch);
        assert_eq!(OutcomeBand::from_draw(0.999_999), OutcomeBand::FullMismatch);
        assert_eq!(OutcomeBand::from_draw(f64::NAN), OutcomeBand::FullMismatch);
    }

    #[test]
    fn test_band_display() {
        assert_eq!(OutcomeBand::ExactMatch.to_string(), "exact_match");
        assert_eq!(
            serde_json::to_string(&OutcomeBand::PartialMismatch).unwrap(),
            "\"partial_mismatch\""
        );
    }
}
