//! Service Configuration
//!
//! 起動時に解決されるサービス設定

use anyhow::{bail, Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Default HeartRails Geo API endpoint
pub const DEFAULT_GEOCODE_URL: &str = "https://geoapi.heartrails.com/api/json";
/// Default SQLite database file for access logs
pub const DEFAULT_DB_PATH: &str = "./postal_api.db";
/// Default listen address (same port as the legacy service)
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
/// Default timeout for the outbound geocode call
pub const DEFAULT_GEOCODE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: SocketAddr,
    pub db_path: PathBuf,
    pub geocode_url: String,
    pub geocode_timeout: Duration,
}

impl Config {
    /// Build a validated configuration from raw setting values
    pub fn new(bind: &str, db_path: &str, geocode_url: &str, geocode_timeout_secs: u64) -> Result<Self> {
        let bind: SocketAddr = bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", bind))?;

        if db_path.trim().is_empty() {
            bail!("Database path must not be empty");
        }

        if !(geocode_url.starts_with("http://") || geocode_url.starts_with("https://")) {
            bail!("Geocode URL must be http(s): {}", geocode_url);
        }

        if geocode_timeout_secs == 0 {
            bail!("Geocode timeout must be at least 1 second");
        }

        Ok(Self {
            bind,
            db_path: PathBuf::from(db_path),
            geocode_url: geocode_url.to_string(),
            geocode_timeout: Duration::from_secs(geocode_timeout_secs),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            geocode_timeout: Duration::from_secs(DEFAULT_GEOCODE_TIMEOUT_SECS),
        }
    }
}
