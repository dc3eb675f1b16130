//! PostgreSQL-backed rating mutation adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::Integer;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RatingStore, RatingStoreError, UserId};

use super::diesel_helpers::{map_diesel_error_message, map_pool_error_message};
use super::pool::{DbPool, PoolError};
use super::schema::users;

const RANDOM_USER_SQL: &str = "SELECT id FROM users ORDER BY RANDOM() LIMIT 1";

#[derive(QueryableByName)]
struct UserIdRow {
    #[diesel(sql_type = Integer)]
    id: i32,
}

fn map_pool_error(error: PoolError) -> RatingStoreError {
    RatingStoreError::connection(map_pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error, operation: &str) -> RatingStoreError {
    RatingStoreError::query(map_diesel_error_message(error, operation))
}

/// Diesel-backed implementation of the rating mutation port.
///
/// Each call holds a connection only for its own statement; the walk's
/// row-at-a-time writes stay non-transactional, so concurrent readers never
/// wait on a batch.
#[derive(Clone)]
pub struct DieselRatingStore {
    pool: DbPool,
}

impl DieselRatingStore {
    /// Create a new adapter over the shared connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RatingStore for DieselRatingStore {
    async fn pick_random_user(&self) -> Result<Option<UserId>, RatingStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserIdRow> = sql_query(RANDOM_USER_SQL)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "random user selection"))?;

        Ok(rows.into_iter().next().map(|row| row.id))
    }

    async fn set_rating(&self, id: UserId, rating: i32) -> Result<(), RatingStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(users::table.find(id))
            .set(users::rating.eq(rating))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "rating update"))?;

        Ok(())
    }
}
