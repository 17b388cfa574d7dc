pub mod models;
pub mod repositories;
pub mod schema;

pub mod mock;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// True when `err` wraps a Postgres unique-constraint violation (23505).
/// Handlers surface those as field errors rather than server faults.
pub fn is_unique_violation(err: &eyre::Report) -> bool {
    pg_error_code(err).as_deref() == Some("23505")
}

/// True when `err` wraps a Postgres foreign-key violation (23503).
pub fn is_foreign_key_violation(err: &eyre::Report) -> bool {
    pg_error_code(err).as_deref() == Some("23503")
}

fn pg_error_code(err: &eyre::Report) -> Option<String> {
    err.downcast_ref::<sqlx::Error>().and_then(|e| match e {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
        _ => None,
    })
}
