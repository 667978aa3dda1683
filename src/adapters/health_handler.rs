use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::adapters::ui_handler::UIHandler;

/// Body of `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    /// Whether `ui/dist` was built before this binary; without it every UI
    /// path answers 404
    pub ui_bundle: bool,
}

pub struct HealthHandler {
    start_time: Instant,
}

impl Default for HealthHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthHandler {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn status(&self) -> HealthStatus {
        let ui_bundle = UIHandler::bundle_present();
        HealthStatus {
            status: if ui_bundle { "healthy" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            ui_bundle,
        }
    }

    /// The host stays up without a bundle, so this is always 200
    pub async fn health(&self) -> impl IntoResponse {
        (StatusCode::OK, Json(self.status()))
    }
}
