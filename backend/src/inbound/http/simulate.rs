//! On-demand rating burst for demoing leaderboard reshuffles.

use actix_web::{post, web};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::WalkPlan;

use super::error::ApiResult;
use super::state::HttpState;

/// Response body for `POST /simulate`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SimulateResponse {
    pub status: String,
    pub message: String,
}

/// Run one burst batch against the store.
///
/// The burst is best-effort: per-row failures are logged and skipped inside
/// the walk, and the message reports attempted counts (not verified writes),
/// which is the documented contract of this endpoint.
#[post("/simulate")]
pub async fn simulate(state: web::Data<HttpState>) -> ApiResult<web::Json<SimulateResponse>> {
    let plan = WalkPlan::burst();
    let mut rng = SmallRng::from_entropy();
    let summary = state.walk.run_batch(&plan, &mut rng).await;

    info!(
        attempted = summary.attempted,
        updated = summary.updated,
        hero_count = summary.hero_count,
        "simulate burst complete"
    );

    Ok(web::Json(SimulateResponse {
        status: "success".to_owned(),
        message: format!(
            "Updated {} users ({} with high scores)",
            summary.attempted, summary.hero_count
        ),
    }))
}
