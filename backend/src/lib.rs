//! Leaderboard backend library modules.
//!
//! The crate is split hexagonally: `domain` holds transport-agnostic ranking
//! and mutation logic plus the ports it needs, `inbound` adapts HTTP requests
//! onto those ports, and `outbound` implements them against PostgreSQL.

pub mod domain;
pub mod inbound;
pub mod outbound;
