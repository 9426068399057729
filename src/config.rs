//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export ADMIN_EMAIL="admin@gmail.com"
//! export ADMIN_PASSWORD="123456"
//! export REDIRECT_PATH="/dashboard"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `ADMIN_EMAIL` - Accepted login email (default: `admin@gmail.com`)
//! - `ADMIN_PASSWORD` - Accepted login password (default: `123456`)
//! - `REDIRECT_PATH` - Target after a successful login (default: `/dashboard`)

use anyhow::Result;
use axum::http::HeaderValue;
use std::env;

use crate::domain::entities::Credentials;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@gmail.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "123456";
pub const DEFAULT_REDIRECT_PATH: &str = "/dashboard";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub admin_email: String,
    /// Compared verbatim against the submitted password. Never logged.
    pub admin_password: String,
    pub redirect_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            redirect_path: DEFAULT_REDIRECT_PATH.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            admin_email: env::var("ADMIN_EMAIL").unwrap_or(defaults.admin_email),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            redirect_path: env::var("REDIRECT_PATH").unwrap_or(defaults.redirect_path),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `admin_email` or `admin_password` is empty
    /// - `redirect_path` does not start with `/`, starts with `//` or `/\`,
    ///   or cannot be sent as a `Location` header
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        // An empty pair could never pass the form's own presence checks.
        if self.admin_email.is_empty() {
            anyhow::bail!("ADMIN_EMAIL must not be empty");
        }
        if self.admin_password.is_empty() {
            anyhow::bail!("ADMIN_PASSWORD must not be empty");
        }

        if !self.redirect_path.starts_with('/') {
            anyhow::bail!(
                "REDIRECT_PATH must start with '/', got '{}'",
                self.redirect_path
            );
        }

        // `//host` and `/\host` are followed by browsers as another origin.
        if self.redirect_path.starts_with("//") || self.redirect_path.starts_with("/\\") {
            anyhow::bail!(
                "REDIRECT_PATH must be a local path, got '{}'",
                self.redirect_path
            );
        }

        // Sent verbatim as the `Location` header on every successful login.
        if HeaderValue::from_str(&self.redirect_path).is_err() {
            anyhow::bail!(
                "REDIRECT_PATH is not a valid header value: {:?}",
                self.redirect_path
            );
        }

        Ok(())
    }

    /// Builds the credential pair accepted by the login form.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.admin_email.clone(), self.admin_password.clone())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Admin email: {}", self.admin_email);
        tracing::info!("  Admin password: ***");
        tracing::info!("  Redirect path: {}", self.redirect_path);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "LISTEN",
        "RUST_LOG",
        "LOG_FORMAT",
        "ADMIN_EMAIL",
        "ADMIN_PASSWORD",
        "REDIRECT_PATH",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        assert!(config.validate().is_ok());

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        // Test empty credentials
        config.admin_email = String::new();
        assert!(config.validate().is_err());

        config.admin_email = DEFAULT_ADMIN_EMAIL.to_string();
        config.admin_password = String::new();
        assert!(config.validate().is_err());

        config.admin_password = DEFAULT_ADMIN_PASSWORD.to_string();

        // Test relative redirect path
        config.redirect_path = "dashboard".to_string();
        assert!(config.validate().is_err());

        // Test redirect paths pointing at another host
        config.redirect_path = "//evil.com".to_string();
        assert!(config.validate().is_err());

        config.redirect_path = "/\\evil.com".to_string();
        assert!(config.validate().is_err());

        // Test redirect paths that are not valid header values
        config.redirect_path = "/dash\nboard".to_string();
        assert!(config.validate().is_err());

        config.redirect_path = "/dash\rboard".to_string();
        assert!(config.validate().is_err());

        config.redirect_path = "/dashboard?tab=home".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_credentials_from_config() {
        let config = Config::default();
        let creds = config.credentials();

        assert!(creds.matches("admin@gmail.com", "123456"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.admin_email, DEFAULT_ADMIN_EMAIL);
        assert_eq!(config.admin_password, DEFAULT_ADMIN_PASSWORD);
        assert_eq!(config.redirect_path, DEFAULT_REDIRECT_PATH);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();

        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("ADMIN_EMAIL", "root@example.org");
            env::set_var("ADMIN_PASSWORD", "s3cr3t!");
            env::set_var("REDIRECT_PATH", "/home");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.admin_email, "root@example.org");
        assert_eq!(config.admin_password, "s3cr3t!");
        assert_eq!(config.redirect_path, "/home");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_invalid() {
        clear_env();

        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "xml");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}
