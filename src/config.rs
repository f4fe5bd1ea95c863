//! Configuration Module
//!
//! Handles loading service configuration from environment variables once at startup.

use std::env;
use std::str::FromStr;

/// Default SQLite database, created on first start.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://tron_info.db?mode=rwc";

/// Public TronGrid endpoint.
pub const DEFAULT_TRONGRID_API_URL: &str = "https://api.trongrid.io";

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the lookup history store
    pub database_url: String,
    /// TronGrid base URL
    pub trongrid_api_url: String,
    /// TronGrid API key, sent as `TRON-PRO-API-KEY` when present
    pub trongrid_api_key: Option<String>,
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of addresses held in the result cache
    pub cache_max_entries: usize,
    /// Result cache TTL in seconds
    pub cache_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL` - History store connection string (default: `sqlite://tron_info.db?mode=rwc`)
    /// - `TRONGRID_API_URL` - TronGrid base URL (default: `https://api.trongrid.io`)
    /// - `TRONGRID_API_KEY` - TronGrid API key (default: none)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `CACHE_MAX_ENTRIES` - Result cache capacity (default: 100)
    /// - `CACHE_TTL` - Result cache TTL in seconds (default: 300)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            trongrid_api_url: env::var("TRONGRID_API_URL").unwrap_or(defaults.trongrid_api_url),
            trongrid_api_key: env::var("TRONGRID_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            server_port: parse_var("SERVER_PORT", defaults.server_port),
            cache_max_entries: parse_var("CACHE_MAX_ENTRIES", defaults.cache_max_entries),
            cache_ttl: parse_var("CACHE_TTL", defaults.cache_ttl),
            cleanup_interval: parse_var("CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }
}

/// Reads and parses an environment variable, falling back on absence or parse failure.
fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            trongrid_api_url: DEFAULT_TRONGRID_API_URL.to_string(),
            trongrid_api_key: None,
            server_port: 8000,
            cache_max_entries: 100,
            cache_ttl: 300,
            cleanup_interval: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.trongrid_api_url, DEFAULT_TRONGRID_API_URL);
        assert!(config.trongrid_api_key.is_none());
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.cache_max_entries, 100);
        assert_eq!(config.cache_ttl, 300);
        assert_eq!(config.cleanup_interval, 60);
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment so parallel tests cannot interleave
        for key in [
            "DATABASE_URL",
            "TRONGRID_API_URL",
            "TRONGRID_API_KEY",
            "SERVER_PORT",
            "CACHE_MAX_ENTRIES",
            "CACHE_TTL",
            "CLEANUP_INTERVAL",
        ] {
            env::remove_var(key);
        }

        let config = Config::from_env();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert!(config.trongrid_api_key.is_none());
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.cache_ttl, 300);

        env::set_var("TRONGRID_API_KEY", "secret");
        env::set_var("CACHE_MAX_ENTRIES", "not-a-number");
        env::set_var("SERVER_PORT", "9100");

        let config = Config::from_env();
        assert_eq!(config.trongrid_api_key.as_deref(), Some("secret"));
        assert_eq!(config.cache_max_entries, 100);
        assert_eq!(config.server_port, 9100);

        env::remove_var("TRONGRID_API_KEY");
        env::remove_var("CACHE_MAX_ENTRIES");
        env::remove_var("SERVER_PORT");
    }
}
