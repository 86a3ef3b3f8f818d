//! Process configuration, read from the environment.
//!
//! | Env Var               | Default                 |
//! |-----------------------|-------------------------|
//! | `HOST`                | `0.0.0.0`               |
//! | `PORT`                | `5000`                  |
//! | `SECRET_KEY`          | insecure dev secret     |
//! | `SESSION_TTL_MINUTES` | `60`                    |
//! | `LOW_STOCK_THRESHOLD` | `10`                    |
//! | `LOG_FORMAT`          | `json` (`json`/`pretty`) |

use chrono::Duration;
use thiserror::Error;

use gastro_inventory::DEFAULT_LOW_STOCK_THRESHOLD;
use gastro_observability::LogFormat;

/// Signing secret used when `SECRET_KEY` is absent. Never use in production.
pub const DEV_SECRET_KEY: &str = "gastro-mentor-dev-secret";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(var: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            var,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub secret_key: String,
    pub session_ttl: Duration,
    pub low_stock_threshold: f64,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            secret_key: DEV_SECRET_KEY.to_string(),
            session_ttl: Duration::minutes(DEFAULT_SESSION_TTL_MINUTES),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Unset and blank variables fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let host = get("HOST").unwrap_or(defaults.host);

        let port = match get("PORT") {
            Some(v) => v
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid("PORT", format!("'{v}': {e}")))?,
            None => defaults.port,
        };

        let secret_key = get("SECRET_KEY").unwrap_or(defaults.secret_key);

        let session_ttl = match get("SESSION_TTL_MINUTES") {
            Some(v) => {
                let minutes = v
                    .parse::<i64>()
                    .map_err(|e| ConfigError::invalid("SESSION_TTL_MINUTES", format!("'{v}': {e}")))?;
                if minutes <= 0 {
                    return Err(ConfigError::invalid("SESSION_TTL_MINUTES", "must be positive"));
                }
                Duration::try_minutes(minutes)
                    .ok_or_else(|| ConfigError::invalid("SESSION_TTL_MINUTES", "out of range"))?
            }
            None => defaults.session_ttl,
        };

        let low_stock_threshold = match get("LOW_STOCK_THRESHOLD") {
            Some(v) => {
                let threshold = v
                    .parse::<f64>()
                    .map_err(|e| ConfigError::invalid("LOW_STOCK_THRESHOLD", format!("'{v}': {e}")))?;
                if !threshold.is_finite() || threshold < 0.0 {
                    return Err(ConfigError::invalid(
                        "LOW_STOCK_THRESHOLD",
                        "must be a finite, non-negative number",
                    ));
                }
                threshold
            }
            None => defaults.low_stock_threshold,
        };

        let log_format = match get("LOG_FORMAT") {
            Some(v) => v
                .parse::<LogFormat>()
                .map_err(|e| ConfigError::invalid("LOG_FORMAT", e))?,
            None => defaults.log_format,
        };

        Ok(Self {
            host,
            port,
            secret_key,
            session_ttl,
            low_stock_threshold,
            log_format,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.secret_key == DEV_SECRET_KEY
    }
}
