use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub livingapps_base_url: String,
    pub livingapps_api_token: String,
    pub instructors_app_id: String,
    pub rooms_app_id: String,
    pub participants_app_id: String,
    pub courses_app_id: String,
    pub enrollments_app_id: String,
    pub http_timeout_secs: u64,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            livingapps_base_url: env::var("LIVINGAPPS_BASE_URL")?,
            livingapps_api_token: env::var("LIVINGAPPS_API_TOKEN")?,
            instructors_app_id: env::var("INSTRUCTORS_APP_ID")?,
            rooms_app_id: env::var("ROOMS_APP_ID")?,
            participants_app_id: env::var("PARTICIPANTS_APP_ID")?,
            courses_app_id: env::var("COURSES_APP_ID")?,
            enrollments_app_id: env::var("ENROLLMENTS_APP_ID")?,
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
            host: env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BACKEND_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        })
    }
}
