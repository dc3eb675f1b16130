//! Shared helpers for backend integration tests.

mod cluster_skip;

pub use cluster_skip::handle_cluster_setup_failure;

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};

/// Formats a `postgres` error with the server detail when one is attached.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    error.as_db_error().map_or_else(
        || error.to_string(),
        |db_error| {
            let mut message = format!("{}: {}", db_error.code().code(), db_error.message());
            if let Some(detail) = db_error.detail() {
                message.push_str(&format!(" ({detail})"));
            }
            message
        },
    )
}

fn admin_client(cluster: &TestCluster) -> Result<Client, String> {
    let admin_url = cluster.connection().database_url("postgres");
    Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))
}

/// Drops and recreates the named database on the cluster.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<(), String> {
    let mut client = admin_client(cluster)?;
    client
        .batch_execute(&format!("DROP DATABASE IF EXISTS {name}"))
        .map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!("CREATE DATABASE {name}"))
        .map_err(|err| format_postgres_error(&err))?;
    Ok(())
}

const USERS_SCHEMA_SQL: &str = "\
CREATE TABLE users (
    id SERIAL PRIMARY KEY,
    username VARCHAR NOT NULL UNIQUE,
    rating INTEGER NOT NULL
)";

/// Creates the `users` table in the database at `url`.
pub fn create_users_table(url: &str) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(USERS_SCHEMA_SQL)
        .map_err(|err| format_postgres_error(&err))
}

/// Inserts the given users with ids assigned in slice order, starting at 1.
pub fn seed_users(url: &str, rows: &[(String, i32)]) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    for (index, (username, rating)) in rows.iter().enumerate() {
        let id = i32::try_from(index + 1).map_err(|err| err.to_string())?;
        client
            .execute(
                "INSERT INTO users (id, username, rating) VALUES ($1, $2, $3)",
                &[&id, username, rating],
            )
            .map_err(|err| format_postgres_error(&err))?;
    }
    Ok(())
}

/// Drops the `users` table so adapter error paths can be exercised.
pub fn drop_users_table(url: &str) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute("DROP TABLE users")
        .map_err(|err| format_postgres_error(&err))
}

/// Reads a single user's rating directly, bypassing the adapters.
pub fn read_rating(url: &str, id: i32) -> Result<i32, String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    let row = client
        .query_one("SELECT rating FROM users WHERE id = $1", &[&id])
        .map_err(|err| format_postgres_error(&err))?;
    Ok(row.get(0))
}
