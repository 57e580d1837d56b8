use blackjack_types::SESSION_TTL_SECS;
use serde::{Deserialize, Serialize};
use std::{path::Path, str::FromStr, time::Duration};
use thiserror::Error;
use tracing::Level;

/// Configuration for the HTTP service, read from YAML.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
    #[serde(default)]
    pub rate_limit: Option<RateLimit>,
}

/// Per-IP request allowance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RateLimit {
    /// Seconds needed to replenish one request.
    pub per_second: u64,
    pub burst: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid log level: {value}")]
    InvalidLogLevel { value: String },
    #[error("{field} must be > 0 (got {value})")]
    InvalidNonZero { field: &'static str, value: u64 },
}

#[derive(Clone, Debug)]
pub struct ValidatedConfig {
    pub port: u16,
    pub log_level: Level,
    pub session_ttl: Duration,
    pub rate_limit: Option<RateLimit>,
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_session_ttl_secs() -> u64 {
    SESSION_TTL_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            log_level: default_log_level(),
            session_ttl_secs: default_session_ttl_secs(),
            rate_limit: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Read { source })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(contents).map_err(|source| ConfigError::Parse { source })
    }

    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if self.session_ttl_secs == 0 {
            return Err(ConfigError::InvalidNonZero {
                field: "session_ttl_secs",
                value: self.session_ttl_secs,
            });
        }
        if let Some(limit) = &self.rate_limit {
            if limit.per_second == 0 {
                return Err(ConfigError::InvalidNonZero {
                    field: "rate_limit.per_second",
                    value: limit.per_second,
                });
            }
            if limit.burst == 0 {
                return Err(ConfigError::InvalidNonZero {
                    field: "rate_limit.burst",
                    value: limit.burst as u64,
                });
            }
        }

        let log_level =
            Level::from_str(&self.log_level).map_err(|_| ConfigError::InvalidLogLevel {
                value: self.log_level.clone(),
            })?;

        Ok(ValidatedConfig {
            port: self.port,
            log_level,
            session_ttl: Duration::from_secs(self.session_ttl_secs),
            rate_limit: self.rate_limit,
        })
    }
}
