//! PostgreSQL-backed leaderboard query adapter.
//!
//! Ranks are derived in SQL with a `DENSE_RANK()` window over descending
//! rating, so the ranked rows and the slice/filter applied to them come from
//! one statement and therefore one read snapshot. Ties share a rank; `id`
//! ascending is the explicit secondary ordering, replacing the
//! engine-dependent row order a bare window query would give.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Integer, Text};
use diesel_async::RunQueryDsl;

use crate::domain::leaderboard::{LeaderboardPage, PageParams, RankedUser, SearchQuery};
use crate::domain::ports::{LeaderboardQuery, LeaderboardStoreError};
use crate::domain::SEARCH_RESULT_CAP;

use super::diesel_helpers::{map_diesel_error_message, map_pool_error_message};
use super::pool::{DbPool, PoolError};
use super::schema::users;

const PAGE_SQL: &str = r#"
WITH ranked_users AS (
    SELECT
        DENSE_RANK() OVER (ORDER BY rating DESC) AS rank,
        username,
        rating,
        id
    FROM users
)
SELECT rank, username, rating
FROM ranked_users
ORDER BY rank, id
LIMIT $1 OFFSET $2
"#;

const SEARCH_SQL: &str = r#"
WITH ranked_users AS (
    SELECT
        DENSE_RANK() OVER (ORDER BY rating DESC) AS rank,
        username,
        rating,
        id
    FROM users
)
SELECT rank, username, rating
FROM ranked_users
WHERE username ILIKE $1
ORDER BY rank, id
LIMIT $2
"#;

#[derive(QueryableByName)]
struct RankedUserRow {
    #[diesel(sql_type = BigInt)]
    rank: i64,
    #[diesel(sql_type = Text)]
    username: String,
    #[diesel(sql_type = Integer)]
    rating: i32,
}

impl From<RankedUserRow> for RankedUser {
    fn from(row: RankedUserRow) -> Self {
        Self {
            rank: row.rank,
            username: row.username,
            rating: row.rating,
        }
    }
}

fn map_pool_error(error: PoolError) -> LeaderboardStoreError {
    LeaderboardStoreError::connection(map_pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error, operation: &str) -> LeaderboardStoreError {
    LeaderboardStoreError::query(map_diesel_error_message(error, operation))
}

/// Diesel-backed implementation of the leaderboard read port.
#[derive(Clone)]
pub struct DieselLeaderboardQuery {
    pool: DbPool,
}

impl DieselLeaderboardQuery {
    /// Create a new adapter over the shared connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeaderboardQuery for DieselLeaderboardQuery {
    async fn fetch_page(
        &self,
        page: PageParams,
    ) -> Result<LeaderboardPage, LeaderboardStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RankedUserRow> = sql_query(PAGE_SQL)
            .bind::<BigInt, _>(page.limit())
            .bind::<BigInt, _>(page.offset())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "leaderboard page"))?;

        // The total is the unfiltered table size, read on the same
        // connection. A count failure fails the whole request rather than
        // degrading to a partial response.
        let total_count: i64 = users::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "leaderboard total count"))?;

        Ok(LeaderboardPage {
            users: rows.into_iter().map(RankedUser::from).collect(),
            total_count,
        })
    }

    async fn search(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<RankedUser>, LeaderboardStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RankedUserRow> = sql_query(SEARCH_SQL)
            .bind::<Text, _>(query.like_pattern())
            .bind::<BigInt, _>(SEARCH_RESULT_CAP)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "leaderboard search"))?;

        Ok(rows.into_iter().map(RankedUser::from).collect())
    }
}
