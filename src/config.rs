//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file in the working directory is honoured (see `main.rs`).
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address as `ip:port` (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PUBLIC_BASE_URL` - Base for generated short URLs (default: derived from
//!   the request's `Host` header)
//! - `TRUST_FORWARDED_HEADERS` - Let `X-Forwarded-Proto` / `X-Forwarded-Host`
//!   set the derived base; enable only behind a proxy (default: `false`)
//! - `CODE_LENGTH` - Length of generated short codes (default: 6, range 1-32)
//! - `MAX_CODE_ATTEMPTS` - Collision retries before giving up (default: 16,
//!   range 1-1000)

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::application::services::CodeOptions;
use crate::application::services::link_service::DEFAULT_MAX_CODE_ATTEMPTS;
use crate::utils::code_generator::DEFAULT_CODE_LENGTH;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Public base URL for short links, without trailing slash.
    pub public_base_url: Option<String>,
    pub trust_forwarded_headers: bool,
    pub code_length: usize,
    pub max_code_attempts: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or boolean variable fails to parse.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        let trust_forwarded_headers = parse_var("TRUST_FORWARDED_HEADERS", false)?;
        let code_length = parse_var("CODE_LENGTH", DEFAULT_CODE_LENGTH)?;
        let max_code_attempts = parse_var("MAX_CODE_ATTEMPTS", DEFAULT_MAX_CODE_ATTEMPTS)?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            public_base_url,
            trust_forwarded_headers,
            code_length,
            max_code_attempts,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not an `ip:port` socket address
    /// - `public_base_url` is not an `http(s)://` URL
    /// - `code_length` or `max_code_attempts` is out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'ip:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref base) = self.public_base_url {
            if !base.starts_with("http://") && !base.starts_with("https://") {
                anyhow::bail!(
                    "PUBLIC_BASE_URL must start with 'http://' or 'https://', got '{}'",
                    base
                );
            }
        }

        if self.code_length == 0 || self.code_length > 32 {
            anyhow::bail!(
                "CODE_LENGTH must be between 1 and 32, got {}",
                self.code_length
            );
        }

        if self.max_code_attempts == 0 || self.max_code_attempts > 1000 {
            anyhow::bail!(
                "MAX_CODE_ATTEMPTS must be between 1 and 1000, got {}",
                self.max_code_attempts
            );
        }

        Ok(())
    }

    /// Code generation settings for [`crate::application::services::LinkService`].
    pub fn code_options(&self) -> CodeOptions {
        CodeOptions {
            length: self.code_length,
            max_attempts: self.max_code_attempts,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        match self.public_base_url {
            Some(ref base) => tracing::info!("  Public base URL: {}", base),
            None => tracing::info!("  Public base URL: from request headers"),
        }
        tracing::info!(
            "  Trust X-Forwarded-* headers: {}",
            self.trust_forwarded_headers
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Short codes: length {}, up to {} attempts",
            self.code_length,
            self.max_code_attempts
        );
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            public_base_url: None,
            trust_forwarded_headers: false,
            code_length: DEFAULT_CODE_LENGTH,
            max_code_attempts: DEFAULT_MAX_CODE_ATTEMPTS,
        }
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable fails to parse or validation fails.
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
