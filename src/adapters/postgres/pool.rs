//! Connection pool construction.
//!
//! The database often comes up after the service (compose, k8s), so the
//! first connection is retried a fixed number of times.

use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Opens a pool, retrying the initial connection per `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let attempts = config.connect_retries.max(1);
    let mut attempt = 1;

    loop {
        let result = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .idle_timeout(config.idle_timeout())
            .max_lifetime(config.max_lifetime())
            .connect(config.url.expose_secret())
            .await;

        match result {
            Ok(pool) => {
                tracing::info!(attempt, "Connected to database");
                return Ok(pool);
            }
            Err(e) if attempt < attempts => {
                tracing::warn!(
                    attempt,
                    max_attempts = attempts,
                    error = %e,
                    "Database not reachable, retrying"
                );
                tokio::time::sleep(config.connect_retry_delay()).await;
                attempt += 1;
            }
            Err(e) => {
                return Err(DomainError::database(format!(
                    "Failed to connect after {} attempts: {}",
                    attempts, e
                )));
            }
        }
    }
}

/// Applies the embedded migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to run migrations: {}", e)))?;
    tracing::info!("Database migrations applied");
    Ok(())
}
