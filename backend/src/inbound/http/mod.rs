//! HTTP adapter: actix handlers, shared state, and error envelopes.
//!
//! Handlers depend only on domain ports through [`state::HttpState`], so the
//! whole surface is testable against in-memory stubs. Wrong-method requests
//! on any registered path get a 405 from the resource's default service.

pub mod error;
pub mod health;
pub mod leaderboard;
pub mod simulate;
pub mod state;
