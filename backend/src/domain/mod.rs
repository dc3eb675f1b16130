//! Domain core: ranking model, rating walk, and the ports they depend on.

pub mod error;
pub mod leaderboard;
pub mod ports;
pub mod walk;

pub use error::{DomainError, ErrorCode};
pub use leaderboard::{
    LeaderboardPage, PageParams, RankedUser, SearchQuery, DEFAULT_PAGE_LIMIT, SEARCH_RESULT_CAP,
};
pub use walk::{RatingWalk, WalkPlan, WalkSummary};
