//! Route definitions for the Courseboard API.

use axum::routing::get;
use axum::Router;

use crate::AppState;

pub mod dashboard;
pub mod health;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .route("/api/v1/dashboard/stats", get(dashboard::stats))
        .with_state(state)
}
