//! Data access layer (Repository pattern)

pub mod rbac;

pub use rbac::PermissionRepository;

use crate::config::DatabaseConfig;
use crate::error::Result;
use sqlx::{mysql::MySqlPoolOptions, MySqlPool};
use std::time::Duration;

/// Open the MySQL pool holding the permission tables
pub async fn connect(config: &DatabaseConfig) -> Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(&config.url)
        .await?;

    tracing::info!("Connected to permission database");
    Ok(pool)
}
