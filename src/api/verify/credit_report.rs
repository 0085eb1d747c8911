//! Credit report endpoint

use axum::{Json, extract::State};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{CreditReportQuery, Query};
use crate::domain::customer::CustomerRecord;
use crate::domain::variation::CREDIT_REPORT_ADDRESS;

/// GET /credit-report
/// Simulate a credit bureau's answer to a customer lookup
pub async fn get_credit_report(
    State(state): State<AppState>,
    Query(query): Query<CreditReportQuery>,
) -> Json<CustomerRecord> {
    let generator = &state.credit_report_generator;
    let variation =
        generator.generate_variation(&query.first_name, &query.last_name, CREDIT_REPORT_ADDRESS);

    debug!(
        profile = %generator.profile().name,
        band = %variation.band,
        "Generated mock credit report"
    );

    Json(variation.record)
}
