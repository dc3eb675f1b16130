//! Read-side port for rank derivation over the rating store.

use async_trait::async_trait;

use crate::domain::leaderboard::{LeaderboardPage, PageParams, RankedUser, SearchQuery};

/// Store failures raised by leaderboard query adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeaderboardStoreError {
    /// Store connection could not be established or checked out.
    #[error("leaderboard store connection failed: {message}")]
    Connection { message: String },
    /// Query execution or row decoding failed.
    #[error("leaderboard store query failed: {message}")]
    Query { message: String },
}

impl LeaderboardStoreError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Rank-aware reads over the rating store.
///
/// Both operations derive dense ranks from the live ratings inside a single
/// query statement, so the returned rows and their ranks come from one
/// snapshot. No consistency is promised across separate calls; concurrent
/// mutation may reorder ranks between requests.
#[async_trait]
pub trait LeaderboardQuery: Send + Sync {
    /// Fetch the rank-ordered slice `[offset, offset + limit)` together with
    /// the unfiltered total row count.
    async fn fetch_page(&self, page: PageParams)
        -> Result<LeaderboardPage, LeaderboardStoreError>;

    /// Case-insensitive substring search over usernames. Ranks reflect each
    /// user's position in the full leaderboard, not the filtered set; results
    /// are rank-ascending and capped at
    /// [`SEARCH_RESULT_CAP`](crate::domain::SEARCH_RESULT_CAP).
    async fn search(&self, query: &SearchQuery)
        -> Result<Vec<RankedUser>, LeaderboardStoreError>;
}
