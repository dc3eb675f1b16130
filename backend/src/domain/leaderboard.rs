//! Ranked-user model and read-side parameter normalisation.
//!
//! Ranks are never persisted: every query derives them from the live
//! `rating` column with dense, tie-aware semantics. The types here carry the
//! normalised parameters into the [`LeaderboardQuery`] port and the derived
//! rows back out of it.
//!
//! [`LeaderboardQuery`]: crate::domain::ports::LeaderboardQuery

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Page size applied when the caller omits `limit` or supplies a
/// non-positive or unparseable value.
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Hard cap on search results; ranks still reflect the full leaderboard.
pub const SEARCH_RESULT_CAP: i64 = 100;

/// A user's position in the leaderboard, derived per query.
///
/// `rank` is dense: users with equal ratings share a rank and the next
/// distinct rating takes the following integer, so the sequence has no gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedUser {
    pub rank: i64,
    pub username: String,
    pub rating: i32,
}

/// One contiguous rank-ordered slice plus the unfiltered table size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardPage {
    pub users: Vec<RankedUser>,
    /// Full row count of the store, independent of limit/offset.
    pub total_count: i64,
}

/// Normalised pagination parameters.
///
/// Construction never fails: out-of-range and unparseable inputs fall back
/// to the defaults rather than rejecting the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    limit: i64,
    offset: i64,
}

impl PageParams {
    /// Normalise already-parsed values: non-positive limits become
    /// [`DEFAULT_PAGE_LIMIT`], negative offsets become zero.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: if limit > 0 { limit } else { DEFAULT_PAGE_LIMIT },
            offset: if offset >= 0 { offset } else { 0 },
        }
    }

    /// Normalise raw query-string values. Missing or unparseable parameters
    /// take the defaults; there is no upper bound on `limit`.
    pub fn from_raw(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = limit
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(0);
        let offset = offset
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(0);
        Self::new(limit, offset)
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT, 0)
    }
}

/// Validated, non-empty username substring query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Validate a raw `query` parameter. Missing, empty, or whitespace-only
    /// input is rejected before any store access happens.
    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        match raw {
            Some(value) if !value.trim().is_empty() => Ok(Self(value.to_owned())),
            _ => Err(DomainError::invalid_request("query parameter is required")),
        }
    }

    /// The query text exactly as the caller supplied it.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// SQL `ILIKE` pattern matching the substring anywhere in the username.
    pub fn like_pattern(&self) -> String {
        format!("%{}%", self.0)
    }

    /// Consume the query, yielding the raw text for response echoing.
    pub fn into_inner(self) -> String {
        self.0
    }
}
