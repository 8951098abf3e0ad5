//! Configuration management for Flock Core

use anyhow::{Context, Result};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database configuration. `None` when no permission storage is configured,
    /// in which case the catalog loads as unavailable.
    pub database: Option<DatabaseConfig>,
    /// Logging configuration
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// "text" or "json"
    pub log_format: String,
    pub service_name: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
            service_name: "flock-core".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let database = match env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => Some(DatabaseConfig {
                url,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .context("Invalid DATABASE_MAX_CONNECTIONS")?,
                connect_timeout_secs: env::var("DATABASE_CONNECT_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .context("Invalid DATABASE_CONNECT_TIMEOUT_SECS")?,
            }),
            _ => None,
        };

        Ok(Self {
            database,
            telemetry: TelemetryConfig {
                log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
                service_name: env::var("SERVICE_NAME")
                    .unwrap_or_else(|_| "flock-core".to_string()),
            },
        })
    }

    /// Whether a permission store is configured
    pub fn has_database(&self) -> bool {
        self.database.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            database: Some(DatabaseConfig {
                url: "mysql://localhost/flock".to_string(),
                max_connections: 5,
                connect_timeout_secs: 5,
            }),
            telemetry: TelemetryConfig::default(),
        }
    }

    #[test]
    fn test_has_database() {
        let mut config = test_config();
        assert!(config.has_database());

        config.database = None;
        assert!(!config.has_database());
    }

    #[test]
    fn test_telemetry_defaults() {
        let telemetry = TelemetryConfig::default();
        assert_eq!(telemetry.log_format, "text");
        assert_eq!(telemetry.service_name, "flock-core");
    }

    #[test]
    fn test_config_debug() {
        let config = test_config();
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("DatabaseConfig"));
        assert!(debug_str.contains("max_connections"));
    }
}
