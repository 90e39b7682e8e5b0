use crate::config::get_config;
use crate::error::{Error, Result};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Connects with a bounded retry loop so a slow-starting database does not
/// fail the process immediately, but a permanently absent one does.
pub async fn create_pool() -> Result<PgPool> {
    let config = get_config();
    let options = PgPoolOptions::new()
        .max_connections(50)
        .acquire_timeout(Duration::from_secs(30));

    let mut last_err = None;
    for attempt in 1..=config.db_connect_attempts {
        match options.clone().connect(&config.database_url).await {
            Ok(pool) => return Ok(pool),
            Err(err) => {
                tracing::warn!(
                    attempt,
                    max_attempts = config.db_connect_attempts,
                    error = %err,
                    "database not reachable yet"
                );
                last_err = Some(err);
                tokio::time::sleep(Duration::from_secs(config.db_connect_interval_secs)).await;
            }
        }
    }

    Err(Error::Internal(format!(
        "Could not connect to database after {} attempts: {}",
        config.db_connect_attempts,
        last_err.map(|e| e.to_string()).unwrap_or_default()
    )))
}

/// A pool that defers connecting until first use. Lets the HTTP surface be
/// exercised in tests without a live database.
pub fn create_lazy_pool(database_url: &str) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(database_url)
        .map_err(Error::Database)
}
