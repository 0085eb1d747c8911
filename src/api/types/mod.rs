//! Request and error types for the HTTP API

pub mod error;
pub mod query;
pub mod verification;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use query::Query;
pub use verification::{BankStatementQuery, CreditReportQuery};
