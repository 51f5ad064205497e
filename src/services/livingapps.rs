//! Typed client for the LivingApps record-storage API.
//!
//! Every collection lives in its own LivingApps "app"; records are read
//! with `GET {base}/apps/{app_id}/records`, which returns a JSON array of
//! `{ record_id, fields }` objects.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::{Course, Enrollment, Instructor, Participant, Record, Room};

/// HTTP client bound to one LivingApps account and its five apps.
#[derive(Debug, Clone)]
pub struct LivingAppsClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
    instructors_app_id: String,
    rooms_app_id: String,
    participants_app_id: String,
    courses_app_id: String,
    enrollments_app_id: String,
}

impl LivingAppsClient {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.livingapps_base_url.trim_end_matches('/').to_string(),
            api_token: config.livingapps_api_token.clone(),
            instructors_app_id: config.instructors_app_id.clone(),
            rooms_app_id: config.rooms_app_id.clone(),
            participants_app_id: config.participants_app_id.clone(),
            courses_app_id: config.courses_app_id.clone(),
            enrollments_app_id: config.enrollments_app_id.clone(),
        })
    }

    /// Fetch all records of one app.
    async fn fetch_records<F>(&self, app_id: &str) -> Result<Vec<Record<F>>, AppError>
    where
        F: DeserializeOwned,
    {
        let url = format!("{}/apps/{}/records", self.base_url, app_id);
        let records = self
            .http
            .get(&url)
            .bearer_auth(&self.api_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(records)
    }

    pub async fn get_instructors(&self) -> Result<Vec<Instructor>, AppError> {
        self.fetch_records(&self.instructors_app_id).await
    }

    pub async fn get_rooms(&self) -> Result<Vec<Room>, AppError> {
        self.fetch_records(&self.rooms_app_id).await
    }

    pub async fn get_participants(&self) -> Result<Vec<Participant>, AppError> {
        self.fetch_records(&self.participants_app_id).await
    }

    pub async fn get_courses(&self) -> Result<Vec<Course>, AppError> {
        self.fetch_records(&self.courses_app_id).await
    }

    pub async fn get_enrollments(&self) -> Result<Vec<Enrollment>, AppError> {
        self.fetch_records(&self.enrollments_app_id).await
    }

    /// Reachability check for the readiness probe.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.http
            .get(&self.base_url)
            .bearer_auth(&self.api_token)
            .send()
            .await?;
        Ok(())
    }
}
