//! Write-side port used by the random rating walk.

use async_trait::async_trait;

/// Surrogate key of a user row in the rating store.
pub type UserId = i32;

/// Store failures raised by rating mutation adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RatingStoreError {
    /// Store connection could not be established or checked out.
    #[error("rating store connection failed: {message}")]
    Connection { message: String },
    /// Row selection or update failed.
    #[error("rating store query failed: {message}")]
    Query { message: String },
}

impl RatingStoreError {
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

/// Row selection and rating writes for the mutation walk.
///
/// Each call is an independent, non-transactional operation; the walk treats
/// failures as best-effort skips, never as batch aborts.
#[async_trait]
pub trait RatingStore: Send + Sync {
    /// Pick one row uniformly at random, or `None` when the table is empty.
    async fn pick_random_user(&self) -> Result<Option<UserId>, RatingStoreError>;

    /// Overwrite the row's rating. Callers clamp to the rating domain before
    /// invoking this.
    async fn set_rating(&self, id: UserId, rating: i32) -> Result<(), RatingStoreError>;
}
