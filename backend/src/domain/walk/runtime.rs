//! Background runtime for the ambient rating walk.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::task::JoinHandle;
use tracing::info;

use super::{RatingWalk, WalkPlan};

/// Pause between ambient walk batches.
pub const WALK_INTERVAL: Duration = Duration::from_secs(5);

/// Spawn the periodic background walk as an independent task.
///
/// The task sleeps for [`WALK_INTERVAL`], runs one background batch, logs the
/// summary, and repeats forever. It shares no locks with request handlers;
/// reads race freely against these writes and the store's row-level atomicity
/// is the only coordination.
pub fn spawn_background_walk(walk: Arc<RatingWalk>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut rng = SmallRng::from_entropy();
        let plan = WalkPlan::background();
        info!(
            batch_size = plan.batch_size(),
            interval_secs = WALK_INTERVAL.as_secs(),
            "rating walk started"
        );

        loop {
            tokio::time::sleep(WALK_INTERVAL).await;
            let summary = walk.run_batch(&plan, &mut rng).await;
            info!(
                attempted = summary.attempted,
                updated = summary.updated,
                "rating walk batch complete"
            );
        }
    })
}
