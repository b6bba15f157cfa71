use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Layout requests only read documents, so a small pool is enough.
const MAX_CONNECTIONS: u32 = 5;

/// Creates the PostgreSQL pool used by the resume document store.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .context("Failed to connect to the resume document database")?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}
