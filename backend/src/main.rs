//! Backend entry-point: wires the leaderboard endpoints, the store pool, and
//! the background rating walk.

use std::env;
use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use backend::domain::walk::spawn_background_walk;
use backend::domain::RatingWalk;
use backend::inbound::http::health::health;
use backend::inbound::http::leaderboard::{get_leaderboard, search_users};
use backend::inbound::http::simulate::simulate;
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{
    DbPool, DieselLeaderboardQuery, DieselRatingStore, PoolConfig,
};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| io::Error::other("DATABASE_URL environment variable is required"))?;
    let port = env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(8080);

    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|e| io::Error::other(format!("failed to connect to database: {e}")))?;
    // A store that is unreachable at boot is fatal; no partial-availability mode.
    pool.get()
        .await
        .map_err(|e| io::Error::other(format!("failed to ping database: {e}")))?;
    info!("database connected");

    let leaderboard = Arc::new(DieselLeaderboardQuery::new(pool.clone()));
    let ratings = Arc::new(DieselRatingStore::new(pool.clone()));
    let walk = Arc::new(RatingWalk::new(ratings));
    let _walk_task = spawn_background_walk(walk.clone());

    let state = web::Data::new(HttpState::new(leaderboard, walk));

    info!(port, "server starting");
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .service(get_leaderboard)
            .service(search_users)
            .service(health)
            .service(simulate)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
