//! Configuration management for the portfolio contact client.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is loaded first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Mail-relay endpoint the portfolio posts to when nothing else is configured.
pub const DEFAULT_RELAY_ENDPOINT: &str =
    "https://backend-portfolio-jcqb.onrender.com/api/sendMessage";

/// Configuration for the contact client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Mail-relay endpoint URL
    pub relay_endpoint: String,

    /// Overall request deadline in seconds; `None` leaves the HTTP client defaults
    pub relay_timeout_secs: Option<u64>,

    /// Log level (default: "error")
    pub log_level: String,

    /// Owner's email, shown as a contact channel
    pub contact_email: Option<String>,

    /// Owner's phone number, shown as a contact channel
    pub contact_phone: Option<String>,

    /// Owner's location label, shown as a contact channel
    pub contact_location: Option<String>,

    /// Map link for the location channel
    pub contact_location_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `RELAY_ENDPOINT`: Mail-relay URL (default: the portfolio's relay)
    /// - `RELAY_TIMEOUT_SECS`: Request deadline in seconds (default: none)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `CONTACT_EMAIL`, `CONTACT_PHONE`, `CONTACT_LOCATION`, `CONTACT_LOCATION_URL`:
    ///   contact channels listed beside the form
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let relay_endpoint =
            env::var("RELAY_ENDPOINT").unwrap_or_else(|_| DEFAULT_RELAY_ENDPOINT.to_string());
        Self::validate_url("RELAY_ENDPOINT", &relay_endpoint)?;

        let relay_timeout_secs = Self::parse_env_opt_u64("RELAY_TIMEOUT_SECS")?;
        if relay_timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                var: "RELAY_TIMEOUT_SECS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        let contact_location_url = Self::non_empty_var("CONTACT_LOCATION_URL");
        if let Some(url) = &contact_location_url {
            Self::validate_url("CONTACT_LOCATION_URL", url)?;
        }

        Ok(Config {
            relay_endpoint,
            relay_timeout_secs,
            log_level,
            contact_email: Self::non_empty_var("CONTACT_EMAIL"),
            contact_phone: Self::non_empty_var("CONTACT_PHONE"),
            contact_location: Self::non_empty_var("CONTACT_LOCATION"),
            contact_location_url,
        })
    }

    fn validate_url(var_name: &str, url: &str) -> ConfigResult<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }
        Ok(())
    }

    /// Read a variable, treating blank values as unset.
    fn non_empty_var(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Parse an optional environment variable as u64.
    fn parse_env_opt_u64(var_name: &str) -> ConfigResult<Option<u64>> {
        match env::var(var_name) {
            Ok(val) => val
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a positive number, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            relay_endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            relay_timeout_secs: None,
            log_level: "error".to_string(),
            contact_email: None,
            contact_phone: None,
            contact_location: None,
            contact_location_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 7] = [
        "RELAY_ENDPOINT",
        "RELAY_TIMEOUT_SECS",
        "LOG_LEVEL",
        "CONTACT_EMAIL",
        "CONTACT_PHONE",
        "CONTACT_LOCATION",
        "CONTACT_LOCATION_URL",
    ];

    // Sets vars for one test and clears every known var on drop
    struct EnvGuard;

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.relay_endpoint, DEFAULT_RELAY_ENDPOINT);
        assert_eq!(config.relay_timeout_secs, None);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("RELAY_ENDPOINT", "https://relay.example.com/api/sendMessage");
        guard.set("RELAY_TIMEOUT_SECS", "15");
        guard.set("CONTACT_EMAIL", "owner@example.com");
        guard.set("CONTACT_PHONE", "   ");

        let config = Config::from_env().unwrap();
        assert_eq!(
            config.relay_endpoint,
            "https://relay.example.com/api/sendMessage"
        );
        assert_eq!(config.relay_timeout_secs, Some(15));
        assert_eq!(config.contact_email.as_deref(), Some("owner@example.com"));
        assert_eq!(config.contact_phone, None);
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("RELAY_ENDPOINT", "ftp://relay.example.com");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "RELAY_ENDPOINT"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_timeout() {
        let mut guard = EnvGuard::new();
        guard.set("RELAY_TIMEOUT_SECS", "soon");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "RELAY_TIMEOUT_SECS"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }

        guard.set("RELAY_TIMEOUT_SECS", "0");
        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_config_invalid_location_url() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_LOCATION_URL", "maps/addis-ababa");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_LOCATION_URL")
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_opt_u64() {
        let mut guard = EnvGuard::new();
        guard.set("RELAY_TIMEOUT_SECS", "42");
        assert_eq!(
            Config::parse_env_opt_u64("RELAY_TIMEOUT_SECS").unwrap(),
            Some(42)
        );
        assert_eq!(Config::parse_env_opt_u64("NONEXISTENT_VAR").unwrap(), None);
    }
}
