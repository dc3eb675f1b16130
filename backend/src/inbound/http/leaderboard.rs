//! Leaderboard read endpoints: the paginated listing and username search.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};

use crate::domain::{PageParams, RankedUser, SearchQuery};

use super::error::{map_store_error, ApiResult};
use super::state::HttpState;

/// Raw pagination parameters as supplied by the client.
///
/// Kept string-typed so junk input falls back to the defaults instead of
/// failing extraction with a 400.
#[derive(Debug, Deserialize)]
pub struct LeaderboardParams {
    limit: Option<String>,
    offset: Option<String>,
}

/// Response body for `GET /leaderboard`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub users: Vec<RankedUser>,
    /// Full row count of the store, independent of limit/offset.
    pub total_count: i64,
    /// Limit actually applied after normalisation.
    pub limit: i64,
    /// Offset actually applied after normalisation.
    pub offset: i64,
}

/// Raw search parameters as supplied by the client.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    query: Option<String>,
}

/// Response body for `GET /search`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub users: Vec<RankedUser>,
    /// The query echoed back as supplied.
    pub query: String,
}

/// Paginated leaderboard listing with live dense ranks.
///
/// `limit` defaults to 50 when absent or non-positive, `offset` to 0 when
/// absent or negative; there is no upper bound on `limit`.
#[get("/leaderboard")]
pub async fn get_leaderboard(
    state: web::Data<HttpState>,
    params: web::Query<LeaderboardParams>,
) -> ApiResult<web::Json<LeaderboardResponse>> {
    let page = PageParams::from_raw(params.limit.as_deref(), params.offset.as_deref());
    let result = state
        .leaderboard
        .fetch_page(page)
        .await
        .map_err(map_store_error)?;

    Ok(web::Json(LeaderboardResponse {
        users: result.users,
        total_count: result.total_count,
        limit: page.limit(),
        offset: page.offset(),
    }))
}

/// Case-insensitive username substring search.
///
/// Ranks reflect each match's position in the full leaderboard. A missing or
/// empty `query` is rejected with a 400 before any store access.
#[get("/search")]
pub async fn search_users(
    state: web::Data<HttpState>,
    params: web::Query<SearchParams>,
) -> ApiResult<web::Json<SearchResponse>> {
    let query = SearchQuery::parse(params.query.as_deref())?;
    let users = state
        .leaderboard
        .search(&query)
        .await
        .map_err(map_store_error)?;

    Ok(web::Json(SearchResponse {
        users,
        query: query.into_inner(),
    }))
}
