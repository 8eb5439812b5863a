//! Suite configuration from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `PERSON_API_BASE_URL` | `http://localhost:8080/api` |
//! | `PERSON_API_TIMEOUT_MS` | unset (wait forever) |
//! | `PERSON_API_NO_COLOR` | unset |
//! | `PERSON_API_LOG_LEVEL` | `info` |

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default root of the person API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
/// Default tracing level when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

const BASE_URL_VAR: &str = "PERSON_API_BASE_URL";
const TIMEOUT_VAR: &str = "PERSON_API_TIMEOUT_MS";
const NO_COLOR_VAR: &str = "PERSON_API_NO_COLOR";
const LOG_LEVEL_VAR: &str = "PERSON_API_LOG_LEVEL";

/// Invalid configuration value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL does not parse or is not http(s).
    #[error("{var} must be an http(s) URL, got '{value}'")]
    InvalidBaseUrl {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },

    /// The timeout is not a positive integer.
    #[error("{var} must be a positive number of milliseconds, got '{value}'")]
    InvalidTimeout {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },

    /// A boolean flag has an unrecognised value.
    #[error("{var} must be a boolean, got '{value}'")]
    InvalidFlag {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Runtime configuration of the suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Root URL of the person API.
    pub base_url: Url,
    /// Per-request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Disable colours in the exchange panels.
    pub no_color: bool,
    /// Tracing level used when `RUST_LOG` is absent.
    pub log_level: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: parse_base_url(DEFAULT_BASE_URL)
                .unwrap_or_else(|| unreachable!("default base URL is valid")),
            timeout: None,
            no_color: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl SuiteConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`; unset keys keep defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BASE_URL_VAR) {
            config.base_url = parse_base_url(&value).ok_or_else(|| ConfigError::InvalidBaseUrl {
                var: BASE_URL_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(TIMEOUT_VAR) {
            let millis = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout {
                    var: TIMEOUT_VAR,
                    value: value.clone(),
                })?;
            config.timeout = Some(Duration::from_millis(millis));
        }

        if let Some(value) = lookup(NO_COLOR_VAR) {
            config.no_color = parse_flag(&value).ok_or_else(|| ConfigError::InvalidFlag {
                var: NO_COLOR_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(LOG_LEVEL_VAR) {
            config.log_level = value;
        }

        Ok(config)
    }
}

fn parse_base_url(value: &str) -> Option<Url> {
    Url::parse(value.trim())
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
