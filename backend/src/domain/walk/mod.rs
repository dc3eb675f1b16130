//! Random rating walk: synthetic churn applied to the rating store.
//!
//! The walk is split into a pure draw plan and an I/O loop. [`WalkPlan`]
//! turns an injected random source into a batch of clamped ratings, which
//! makes the draw deterministic under a seeded generator; [`RatingWalk`]
//! applies a plan through the [`RatingStore`] port, one independent write per
//! draw. A per-row failure is logged and skipped so the batch always
//! completes its configured size.

use std::sync::Arc;

use rand::Rng;
use tracing::warn;

use super::ports::RatingStore;

mod runtime;

pub use runtime::{spawn_background_walk, WALK_INTERVAL};


/// Lower bound of the rating domain.
pub const RATING_MIN: i32 = 100;
/// Upper bound of the rating domain.
pub const RATING_MAX: i32 = 5000;
/// Lower bound of the hero draw range; its upper bound is [`RATING_MAX`].
pub const HERO_RATING_MIN: i32 = 4800;

/// Batch shape for one walk invocation.
///
/// The first `hero_count` draws come from the hero range so those rows are
/// visibly promoted to the top of the leaderboard; the rest draw from the
/// full rating domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkPlan {
    batch_size: usize,
    hero_count: usize,
}

impl WalkPlan {
    pub const fn new(batch_size: usize, hero_count: usize) -> Self {
        Self {
            batch_size,
            hero_count,
        }
    }

    /// Ambient churn profile: ten rows, no hero bias.
    pub const fn background() -> Self {
        Self::new(10, 0)
    }

    /// On-demand burst profile: fifty rows, the first five hero-biased.
    pub const fn burst() -> Self {
        Self::new(50, 5)
    }

    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub const fn hero_count(&self) -> usize {
        self.hero_count
    }

    /// Draw the batch of new ratings. Pure over the supplied generator: a
    /// seeded source yields a reproducible batch.
    ///
    /// The draw ranges already lie inside the rating domain; the clamp is a
    /// second enforcement layer for the [100, 5000] invariant.
    pub fn draw_ratings(&self, rng: &mut impl Rng) -> Vec<i32> {
        (0..self.batch_size)
            .map(|index| {
                let rating = if index < self.hero_count {
                    rng.gen_range(HERO_RATING_MIN..=RATING_MAX)
                } else {
                    rng.gen_range(RATING_MIN..=RATING_MAX)
                };
                rating.clamp(RATING_MIN, RATING_MAX)
            })
            .collect()
    }
}

/// Outcome counts for one walk batch.
///
/// `attempted` is the configured batch size; `updated` counts writes that
/// returned without error. User-facing summaries report attempted counts,
/// preserving the best-effort contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    pub attempted: usize,
    pub updated: usize,
    pub hero_count: usize,
}

/// Applies walk plans to the rating store.
#[derive(Clone)]
pub struct RatingWalk {
    store: Arc<dyn RatingStore>,
}

impl RatingWalk {
    pub fn new(store: Arc<dyn RatingStore>) -> Self {
        Self { store }
    }

    /// Run one batch: draw the ratings up front, then write each to an
    /// independently picked random row. Rows are sampled with replacement,
    /// so one row may be hit more than once within a batch. Selection and
    /// write failures are logged and skipped; the loop never aborts early.
    pub async fn run_batch(&self, plan: &WalkPlan, rng: &mut impl Rng) -> WalkSummary {
        let ratings = plan.draw_ratings(rng);
        let mut updated = 0;

        for rating in &ratings {
            let id = match self.store.pick_random_user().await {
                Ok(Some(id)) => id,
                Ok(None) => {
                    warn!("rating walk found no rows to update");
                    continue;
                }
                Err(error) => {
                    warn!(error = %error, "rating walk failed to pick a random user");
                    continue;
                }
            };

            match self.store.set_rating(id, *rating).await {
                Ok(()) => updated += 1,
                Err(error) => {
                    warn!(error = %error, user_id = id, rating, "rating walk failed to write rating");
                }
            }
        }

        WalkSummary {
            attempted: ratings.len(),
            updated,
            hero_count: plan.hero_count(),
        }
    }
}
