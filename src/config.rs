//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any
//! classification happens. The canonical web origin is deliberately a
//! configuration value rather than a compiled-in constant, so staging and
//! production deployments differ only in environment.
//!
//! ## Variables
//!
//! - `APP_WEB_ORIGIN` - Canonical web origin (default: `https://bsky.app`)
//! - `APP_DISPLAY_NAME` - Name shown in place of the canonical origin
//!   (default: `Bluesky Social`)
//! - `APP_TRUSTED_SUFFIXES` - Comma-separated host suffixes treated as the
//!   app's own domains by the link-warning policy
//!   (default: `bsky.app,bsky.social`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Canonical web origin of the app, e.g. `https://bsky.app`.
    pub web_origin: Url,
    /// Name shown in place of the canonical origin's host.
    pub display_name: String,
    /// Host suffixes trusted as the app's own domains for link warnings.
    pub trusted_suffixes: Vec<String>,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when `APP_WEB_ORIGIN` is set but is not an absolute
    /// URL.
    pub fn from_env() -> Result<Self> {
        let web_origin =
            env::var("APP_WEB_ORIGIN").unwrap_or_else(|_| "https://bsky.app".to_string());
        let web_origin = Url::parse(&web_origin)
            .with_context(|| format!("APP_WEB_ORIGIN is not an absolute URL: '{web_origin}'"))?;

        let display_name =
            env::var("APP_DISPLAY_NAME").unwrap_or_else(|_| "Bluesky Social".to_string());

        let trusted_suffixes = env::var("APP_TRUSTED_SUFFIXES")
            .unwrap_or_else(|_| "bsky.app,bsky.social".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            web_origin,
            display_name,
            trusted_suffixes,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the origin is not `https`, has no host, or carries a path, query,
    ///   or fragment
    /// - the display name is empty
    /// - no trusted suffix remains after parsing, or one contains whitespace
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.web_origin.scheme() != "https" {
            anyhow::bail!("APP_WEB_ORIGIN must use https, got '{}'", self.web_origin);
        }

        if self.web_origin.host_str().is_none() {
            anyhow::bail!("APP_WEB_ORIGIN must have a host, got '{}'", self.web_origin);
        }

        if self.web_origin.path() != "/"
            || self.web_origin.query().is_some()
            || self.web_origin.fragment().is_some()
        {
            anyhow::bail!(
                "APP_WEB_ORIGIN must be a bare origin without path, query, or fragment, got '{}'",
                self.web_origin
            );
        }

        if self.display_name.trim().is_empty() {
            anyhow::bail!("APP_DISPLAY_NAME must not be empty");
        }

        if self.trusted_suffixes.is_empty() {
            anyhow::bail!("APP_TRUSTED_SUFFIXES must list at least one host suffix");
        }

        for suffix in &self.trusted_suffixes {
            if suffix.chars().any(char::is_whitespace) {
                anyhow::bail!(
                    "APP_TRUSTED_SUFFIXES entries must not contain whitespace, got '{suffix}'"
                );
            }
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Web origin: {}", self.web_origin);
        tracing::debug!("  Display name: {}", self.display_name);
        tracing::debug!("  Trusted suffixes: {}", self.trusted_suffixes.join(", "));
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
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
