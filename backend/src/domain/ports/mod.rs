//! Ports the domain needs from the outside world.
//!
//! Adapters in `outbound` implement these traits against PostgreSQL; tests
//! substitute in-memory stubs.

mod leaderboard_query;
mod rating_store;

pub use leaderboard_query::{LeaderboardQuery, LeaderboardStoreError};
pub use rating_store::{RatingStore, RatingStoreError, UserId};
