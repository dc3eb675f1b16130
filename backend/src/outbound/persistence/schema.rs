//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the deployed schema exactly; rows are created
//! out of band, so no migrations ship with this service.

diesel::table! {
    /// Leaderboard users.
    ///
    /// Rows are created externally and never deleted here; only `rating` is
    /// mutated, by the rating walk.
    users (id) {
        /// Surrogate primary key.
        id -> Int4,
        /// Unique display identity.
        username -> Varchar,
        /// Mutable score, constrained to [100, 5000].
        rating -> Int4,
    }
}
