//! Dashboard routes: aggregated statistics for the overview page.

use axum::{extract::State, Json};
use chrono::Local;

use crate::errors::ApiResponse;
use crate::services::dashboard::{self, DashboardStats};
use crate::AppState;

/// GET /api/v1/dashboard/stats — aggregated dashboard statistics.
///
/// Date predicates are evaluated against the server's local calendar day.
pub async fn stats(State(state): State<AppState>) -> Json<ApiResponse<DashboardStats>> {
    let today = Local::now().date_naive();
    let stats = dashboard::get_stats(&state.client, today).await;
    ApiResponse::success(stats)
}
