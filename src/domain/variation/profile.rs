//! Literal substitutions applied by each mock call site

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Address on file used by credit reports, which carry no address of their own
pub const CREDIT_REPORT_ADDRESS: &str = "123 Main St, Anytown, USA";

/// Address of the unrelated person returned on a credit report full mismatch
pub const CREDIT_REPORT_OTHER_ADDRESS: &str = "456 Other Ave, Elsewhere, USA";

static STREET_ABBREVIATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bSt\b").unwrap());

/// How a mismatching result alters the base address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AddressMutation {
    /// Keep the base address
    PassThrough,
    /// Prepend text to the base address
    Prefix(String),
    /// Ignore the base address and use this one
    Replace(String),
    /// Spell out the first `St` abbreviation, or append ` Street` if there is none
    ExpandStreetSuffix,
}

impl AddressMutation {
    /// Apply the mutation to a base address
    pub fn apply(&self, base: &str) -> String {
        match self {
            Self::PassThrough => base.to_string(),
            Self::Prefix(prefix) => format!("{}{}", prefix, base),
            Self::Replace(address) => address.clone(),
            Self::ExpandStreetSuffix => {
                if STREET_ABBREVIATION.is_match(base) {
                    STREET_ABBREVIATION.replacen(base, 1, "Street").into_owned()
                } else {
                    format!("{} Street", base)
                }
            }
        }
    }
}

/// Substitutions used for the partial and full mismatch bands
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MismatchProfile {
    /// Identifies the call site in logs
    pub name: String,
    /// Last name reported on a partial mismatch
    pub partial_last_name: String,
    /// Address change on a partial mismatch
    pub partial_address: AddressMutation,
    /// First name reported on a full mismatch
    pub full_first_name: String,
    /// Last name reported on a full mismatch
    pub full_last_name: String,
    /// Address change on a full mismatch
    pub full_address: AddressMutation,
}

impl MismatchProfile {
    /// Bank statement lookups: a leading digit typo, and the address kept on a
    /// full mismatch
    pub fn bank_statement() -> Self {
        Self {
            name: "bank_statement".to_string(),
            partial_last_name: "Doh".to_string(),
            partial_address: AddressMutation::Prefix("1".to_string()),
            full_first_name: "Jane".to_string(),
            full_last_name: "Smith".to_string(),
            full_address: AddressMutation::PassThrough,
        }
    }

    /// Credit report lookups: a spelled-out street suffix, and an unrelated
    /// address on a full mismatch
    pub fn credit_report() -> Self {
        Self {
            name: "credit_report".to_string(),
            partial_last_name: "Doh".to_string(),
            partial_address: AddressMutation::ExpandStreetSuffix,
            full_first_name: "Jane".to_string(),
            full_last_name: "Smith".to_string(),
            full_address: AddressMutation::Replace(CREDIT_REPORT_OTHER_ADDRESS.to_string()),
        }
    }
}
