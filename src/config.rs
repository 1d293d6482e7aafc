//! Process configuration.
//!
//! # Environment Variables
//!
//! - `LISTINGS_CSV`: path to the listings file (default: data/real_estate_listings.csv)
//! - `HOST`: bind host (default: 127.0.0.1)
//! - `PORT`: bind port (default: 3000)
//! - `MAX_WORKERS`: request worker threads (default: 8)
//! - `RUST_LOG`: log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{warn, Level};

pub const DEFAULT_CSV_PATH: &str = "data/real_estate_listings.csv";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub csv_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub max_workers: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unparseable values fall back
    /// to the default with a warning rather than aborting startup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            csv_path: lookup("LISTINGS_CSV")
                .map(PathBuf::from)
                .unwrap_or(defaults.csv_path),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port),
            max_workers: parse_or(&lookup, "MAX_WORKERS", defaults.max_workers).max(1),
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// Log level from `RUST_LOG`. Read on its own because the subscriber has
/// to exist before the rest of the config can warn about bad values.
pub fn log_level() -> Level {
    env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(Level::INFO)
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {key}={raw:?}, using default");
            default
        }),
    }
}
