//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Variables may also come from a `.env` file, loaded in `main.rs`.
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export PUBLIC_ORIGIN="https://sho.rt"
//! export LOG_FORMAT="json"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PUBLIC_ORIGIN` - Origin shown in short links (default: derived from the `Host` header)
//! - `RATE_LIMIT` - Per-IP rate limiting, `true` or `false` (default: `true`)

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Absolute `http(s)` origin, without trailing slash.
    pub public_origin: Option<String>,
    pub rate_limit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            public_origin: None,
            rate_limit: true,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `RATE_LIMIT` is set to something other than a boolean.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let public_origin = env::var("PUBLIC_ORIGIN")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        let rate_limit = match env::var("RATE_LIMIT") {
            Ok(v) => parse_flag(&v).context("RATE_LIMIT must be 'true' or 'false'")?,
            Err(_) => defaults.rate_limit,
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            public_origin,
            rate_limit,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a socket address
    /// - `public_origin` is not an absolute `http`/`https` URL with a host
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        self.listen_addr.parse::<SocketAddr>().with_context(|| {
            format!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            )
        })?;

        if let Some(ref origin) = self.public_origin {
            let parsed = Url::parse(origin)
                .with_context(|| format!("PUBLIC_ORIGIN is not a valid URL: '{origin}'"))?;

            if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
                anyhow::bail!(
                    "PUBLIC_ORIGIN must be an absolute http(s) origin, got '{}'",
                    origin
                );
            }
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        match self.public_origin {
            Some(ref origin) => tracing::info!("  Public origin: {}", origin),
            None => tracing::info!("  Public origin: from Host header"),
        }
        tracing::info!("  Rate limiting: {}", self.rate_limit);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognized boolean '{other}'"),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
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
