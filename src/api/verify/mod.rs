//! Customer verification endpoints

pub mod bank_statement;
pub mod credit_report;

use axum::{
    Router,
    routing::{get, post},
};

use super::state::AppState;

/// Create the verification router
pub fn create_verify_router() -> Router<AppState> {
    Router::new()
        .route(
            "/verify/bank-statement",
            post(bank_statement::verify_bank_statement),
        )
        .route(
            "/bank-statement",
            post(bank_statement::mock_bank_statement).get(bank_statement::mock_bank_statement),
        )
        .route("/credit-report", get(credit_report::get_credit_report))
}
