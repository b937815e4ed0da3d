//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:8080"
//! export SHORT_DOMAIN="https://s.example.com"
//! export STORE_BACKEND="file"
//! export STORE_PATH="/var/lib/sha-shortener/store.json"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `SHORT_DOMAIN` - Prefix of generated short URLs (default: `http://localhost:8080`)
//! - `STORE_BACKEND` - `file` or `memory` (default: `file`)
//! - `STORE_PATH` - JSON document used by the file backend (default: `store.json`)
//! - `REQUEST_TIMEOUT_SECS` - Per-request timeout (default: 30)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Where short links are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    File,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            other => anyhow::bail!("STORE_BACKEND must be 'file' or 'memory', got '{}'", other),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::File => f.write_str("file"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Prefix of every shortened URL, without a trailing slash.
    pub short_domain: String,
    pub store_backend: StoreBackend,
    /// Only used by the file backend.
    pub store_path: PathBuf,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let short_domain = env::var("SHORT_DOMAIN")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let store_backend = match env::var("STORE_BACKEND") {
            Ok(v) => v.parse().context("Invalid STORE_BACKEND")?,
            Err(_) => StoreBackend::File,
        };

        let store_path = env::var("STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("store.json"));

        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("REQUEST_TIMEOUT_SECS must be a number, got '{}'", v))?,
            Err(_) => 30,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            short_domain,
            store_backend,
            store_path,
            request_timeout_secs,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `short_domain` is not an absolute `http`/`https` URL
    /// - `store_path` is empty while the file backend is selected
    /// - `request_timeout_secs` is 0
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let domain = Url::parse(&self.short_domain)
            .with_context(|| format!("SHORT_DOMAIN is not a valid URL: '{}'", self.short_domain))?;
        if domain.scheme() != "http" && domain.scheme() != "https" {
            anyhow::bail!(
                "SHORT_DOMAIN must start with 'http://' or 'https://', got '{}'",
                self.short_domain
            );
        }

        if self.store_backend == StoreBackend::File && self.store_path.as_os_str().is_empty() {
            anyhow::bail!("STORE_PATH must not be empty when STORE_BACKEND is 'file'");
        }

        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Short domain: {}", self.short_domain);
        match self.store_backend {
            StoreBackend::File => {
                tracing::info!("  Store: file ({})", self.store_path.display())
            }
            StoreBackend::Memory => tracing::info!("  Store: memory (not persisted)"),
        }
        tracing::info!("  Request timeout: {}s", self.request_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
