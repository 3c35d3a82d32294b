//! Database adapters (connection pool + liveness check).

use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{Connection, Error as SqlxError};
use tracing::info;

use crate::config::DatabaseConfig;

/// Open the shared Postgres pool and verify the server answers.
///
/// Pool sizing is left at sqlx defaults. Returns an error (rather than a
/// half-working pool) when the server cannot be reached or does not answer
/// the ping.
pub async fn connect(cfg: &DatabaseConfig) -> Result<PgPool, SqlxError> {
    info!(target_db = %cfg.redacted_url(), "connecting to postgres");

    let pool = PgPoolOptions::new()
        .connect_with(cfg.connect_options())
        .await?;

    ping(&pool).await?;
    info!("postgres ping ok");

    Ok(pool)
}

/// Round-trip to the server on one pooled connection.
pub async fn ping(pool: &PgPool) -> Result<(), SqlxError> {
    let mut conn = pool.acquire().await?;
    conn.ping().await
}
