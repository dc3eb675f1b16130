//! PostgreSQL persistence adapters built on diesel-async.

pub mod diesel_helpers;
pub mod diesel_leaderboard_query;
pub mod diesel_rating_store;
pub mod pool;
pub mod schema;

pub use diesel_leaderboard_query::DieselLeaderboardQuery;
pub use diesel_rating_store::DieselRatingStore;
pub use pool::{DbPool, PoolConfig, PoolError};
