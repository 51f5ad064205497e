pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;

use services::livingapps::LivingAppsClient;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: LivingAppsClient,
    pub config: config::AppConfig,
}
