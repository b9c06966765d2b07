//! MySQL connection pool management
//!
//! Provides utilities for creating the database connection pool shared by
//! every request handler.

use sarago_core::config::DatabaseConfig;
use sarago_core::{AppError, AppResult};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;
use std::time::Duration;
use tracing::{info, warn};

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT: u64 = 30;

/// Default idle timeout in seconds
const DEFAULT_IDLE_TIMEOUT: u64 = 600;

/// Build connection options from the startup configuration
pub fn connect_options(config: &DatabaseConfig) -> MySqlConnectOptions {
    let mut options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user);

    if !config.password.is_empty() {
        options = options.password(&config.password);
    }
    if !config.name.is_empty() {
        options = options.database(&config.name);
    }

    options
}

/// Create a MySQL connection pool
///
/// The pool is verified with `SELECT 1` before it is returned, so a
/// misconfigured database fails at startup rather than on the first request.
///
/// # Example
///
/// ```no_run
/// use sarago_core::config::DatabaseConfig;
/// use sarago_db::create_pool;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pool = create_pool(&DatabaseConfig::default()).await?;
///     Ok(())
/// }
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> AppResult<MySqlPool> {
    info!(endpoint = %config.endpoint(), database = %config.name, "Creating database connection pool");

    let max_conns = config.max_connections.max(1);

    let pool = MySqlPoolOptions::new()
        .max_connections(max_conns)
        .acquire_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT))
        .idle_timeout(Some(Duration::from_secs(DEFAULT_IDLE_TIMEOUT)))
        .test_before_acquire(true)
        .connect_with(connect_options(config))
        .await
        .map_err(|e| {
            warn!("Failed to create database pool: {}", e);
            AppError::Pool(format!("Failed to connect to database: {}", e))
        })?;

    info!(
        "Database pool created successfully with {} max connections",
        max_conns
    );

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .map_err(|e| AppError::Database(format!("Database health check failed: {}", e)))?;

    info!("Database connection verified");

    Ok(pool)
}
