//! Client configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use bracket_layout::LayoutGeometry;
use std::time::Duration;

/// Default backend base URL
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Complete client configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend base URL, including the `/api` prefix
    pub api_url: String,
    /// Bearer token sent with every request
    pub api_token: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Bracket geometry handed to the layout engine
    pub geometry: LayoutGeometry,
}

impl ClientConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// # Arguments
    ///
    /// * `lookup` - Returns the value of a variable, `None` when unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("BRACKET_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let api_token = lookup("BRACKET_API_TOKEN").filter(|v| !v.is_empty());

        let timeout = Duration::from_secs(parse_or(&lookup, "BRACKET_TIMEOUT_SECS", 10u64)?);

        let geometry = LayoutGeometry::new(
            parse_or(&lookup, "BRACKET_MATCH_WIDTH", 120.0)?,
            parse_or(&lookup, "BRACKET_MATCH_HEIGHT", 60.0)?,
            parse_or(&lookup, "BRACKET_HORIZONTAL_GAP", 80.0)?,
            parse_or(&lookup, "BRACKET_VERTICAL_GAP", 40.0)?,
        );

        Ok(ClientConfig {
            api_url,
            api_token,
            timeout,
            geometry,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                var: "BRACKET_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::Invalid {
                var: "BRACKET_TIMEOUT_SECS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        self.geometry
            .validate()
            .map_err(|e| ConfigError::Invalid {
                var: "BRACKET geometry".to_string(),
                reason: e.to_string(),
            })
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required setting: {var}\nHint: {hint}")]
    MissingRequired { var: String, hint: String },

    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Parse a variable, falling back to `default` when it is unset
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            var: key.to_string(),
            reason: format!("Cannot parse {raw:?}"),
        }),
    }
}
