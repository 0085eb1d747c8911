//! Request types for the verification endpoints

use serde::Deserialize;

/// Query for a mock bank statement lookup
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankStatementQuery {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
}

/// Query for a mock credit report lookup
///
/// `ssn` is required but never echoed back or logged.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditReportQuery {
    pub first_name: String,
    pub last_name: String,
    pub ssn: String,
}

impl std::fmt::Debug for CreditReportQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreditReportQuery")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("ssn", &"[REDACTED]")
            .finish()
    }
}
