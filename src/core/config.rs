//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Tour catalog and inventory configuration.
    pub catalog: CatalogConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the tour catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON file with tour records. The built-in demo tours are used if unset.
    pub seed_path: Option<PathBuf>,

    /// Deduct tour slots when a booking succeeds.
    ///
    /// Off by default: bookings check capacity but never consume it.
    pub track_capacity: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "tour-booking-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            catalog: CatalogConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_CATALOG_PATH`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = parse_flag(&timestamps).unwrap_or(true);
        }

        config.transport = TransportConfig::from_env();

        if let Ok(path) = std::env::var("MCP_CATALOG_PATH") {
            info!("Catalog seed file: {}", path);
            config.catalog.seed_path = Some(PathBuf::from(path));
        }

        if let Ok(track) = std::env::var("MCP_TRACK_CAPACITY") {
            match parse_flag(&track) {
                Some(value) => config.catalog.track_capacity = value,
                None => warn!("Ignoring invalid MCP_TRACK_CAPACITY value: {}", track),
            }
        }

        if !config.catalog.track_capacity {
            warn!(
                "Capacity tracking disabled - bookings check slots but never deduct them. \
                 Set MCP_TRACK_CAPACITY=true for authoritative inventory."
            );
        }

        config
    }
}

/// Parse a boolean-ish environment value.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_catalog_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_CATALOG_PATH", "/tmp/tours.json");
            std::env::set_var("MCP_TRACK_CAPACITY", "true");
        }
        let config = Config::from_env();
        assert_eq!(
            config.catalog.seed_path,
            Some(PathBuf::from("/tmp/tours.json"))
        );
        assert!(config.catalog.track_capacity);
        unsafe {
            std::env::remove_var("MCP_CATALOG_PATH");
            std::env::remove_var("MCP_TRACK_CAPACITY");
        }
    }

    #[test]
    fn test_invalid_track_capacity_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TRACK_CAPACITY", "sometimes");
        }
        let config = Config::from_env();
        assert!(!config.catalog.track_capacity);
        unsafe {
            std::env::remove_var("MCP_TRACK_CAPACITY");
        }
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "gc-travel-mcp");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "gc-travel-mcp");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "tour-booking-mcp");
        assert!(config.catalog.seed_path.is_none());
        assert!(!config.catalog.track_capacity);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
