//! Shared HTTP adapter state.
//!
//! Handlers accept this via `actix_web::web::Data` so they only depend on
//! domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::LeaderboardQuery;
use crate::domain::RatingWalk;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Rank-aware read port.
    pub leaderboard: Arc<dyn LeaderboardQuery>,
    /// Walk service driving the on-demand burst.
    pub walk: Arc<RatingWalk>,
}

impl HttpState {
    pub fn new(leaderboard: Arc<dyn LeaderboardQuery>, walk: Arc<RatingWalk>) -> Self {
        Self { leaderboard, walk }
    }
}
