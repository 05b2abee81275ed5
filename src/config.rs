//! Configuration loaded from environment variables.
//!
//! ## Optional Variables
//!
//! - `MAX_PAGE_SIZE` - Largest accepted `pageSize` (default: 100, range: 25..=1000)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

use crate::api::dto::pagination::DEFAULT_PAGE_SIZE;

/// Hard ceiling for `MAX_PAGE_SIZE`.
pub const PAGE_SIZE_CEILING: i64 = 1000;

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Largest `pageSize` list handlers accept.
    pub max_page_size: i64,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_page_size: 100,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// [`Config::default`] for anything unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `MAX_PAGE_SIZE` is set but is not an integer.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let max_page_size = match env::var("MAX_PAGE_SIZE") {
            Ok(v) => v.trim().parse().map_err(|_| {
                anyhow::anyhow!("MAX_PAGE_SIZE must be an integer, got '{}'", v)
            })?,
            Err(_) => defaults.max_page_size,
        };

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Ok(Self {
            max_page_size,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `max_page_size` is below the default page size or above [`PAGE_SIZE_CEILING`]
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        // A request without `pageSize` must always be accepted.
        if self.max_page_size < DEFAULT_PAGE_SIZE {
            anyhow::bail!(
                "MAX_PAGE_SIZE must be at least {}, got {}",
                DEFAULT_PAGE_SIZE,
                self.max_page_size
            );
        }

        if self.max_page_size > PAGE_SIZE_CEILING {
            anyhow::bail!(
                "MAX_PAGE_SIZE is too large (max: {}), got {}",
                PAGE_SIZE_CEILING,
                self.max_page_size
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Max page size: {}", self.max_page_size);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("MAX_PAGE_SIZE");
            env::remove_var("RUST_LOG");
            env::remove_var("LOG_FORMAT");
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.max_page_size = 24;
        assert!(config.validate().is_err());

        config.max_page_size = 25;
        assert!(config.validate().is_ok());

        config.max_page_size = 1001;
        assert!(config.validate().is_err());

        config.max_page_size = 1000;
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.max_page_size, 100);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("MAX_PAGE_SIZE", "250");
            env::set_var("LOG_FORMAT", "json");
        }

        let config = load_from_env().unwrap();
        assert_eq!(config.max_page_size, 250);
        assert_eq!(config.log_format, "json");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_non_integer_page_size() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("MAX_PAGE_SIZE", "lots");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_out_of_range() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("MAX_PAGE_SIZE", "5");
        }

        assert!(Config::from_env().is_ok());
        assert!(load_from_env().is_err());

        clear_env();
    }
}
