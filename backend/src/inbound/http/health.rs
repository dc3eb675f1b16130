//! Health endpoint for load balancers and uptime checks.

use actix_web::{get, web};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Response body for `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Current server time, RFC 3339.
    pub time: String,
}

/// Report the process as healthy with the current RFC 3339 timestamp.
#[get("/health")]
pub async fn health() -> web::Json<HealthResponse> {
    web::Json(HealthResponse {
        status: "healthy".to_owned(),
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}
