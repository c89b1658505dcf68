//! Environment-driven application configuration.
//!
//! # Responsibility
//! - Resolve board layout, logging and coin API settings from env vars.
//! - Fall back to defaults for unset or blank values.
//!
//! # Invariants
//! - Invalid values are reported, never silently replaced by defaults.
//! - The board list is non-empty and free of duplicates.

use crate::logging::{default_log_level, normalize_level};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_BOARDS: &str = "TASKBOARD_BOARDS";
pub const ENV_LOG_LEVEL: &str = "TASKBOARD_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TASKBOARD_LOG_DIR";
pub const ENV_COIN_API_URL: &str = "TASKBOARD_COIN_API_URL";
pub const ENV_OHLCV_API_URL: &str = "TASKBOARD_OHLCV_API_URL";
pub const ENV_QUERY_STALE_SECS: &str = "TASKBOARD_QUERY_STALE_SECS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "TASKBOARD_REQUEST_TIMEOUT_SECS";

pub const DEFAULT_BOARDS: [&str; 3] = ["todo", "doing", "done"];
pub const DEFAULT_COIN_API_URL: &str = "https://api.coinpaprika.com/v1";
pub const DEFAULT_OHLCV_API_URL: &str = "https://ohlcv-api.nomadcoders.workers.dev";
const DEFAULT_QUERY_STALE_SECS: u64 = 60;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Env value cannot be interpreted.
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value, reason } => {
                write!(f, "invalid {key} value `{value}`: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Coin API endpoints and cache policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinApiConfig {
    pub coin_api_base: String,
    pub ohlcv_api_base: String,
    pub request_timeout: Duration,
    /// Age after which a cached query is refetched.
    pub stale_after: Duration,
}

impl Default for CoinApiConfig {
    fn default() -> Self {
        Self {
            coin_api_base: DEFAULT_COIN_API_URL.to_string(),
            ohlcv_api_base: DEFAULT_OHLCV_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            stale_after: Duration::from_secs(DEFAULT_QUERY_STALE_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Board keys in display order.
    pub board_ids: Vec<String>,
    pub log_level: &'static str,
    /// Rolling log directory; file logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
    pub coin_api: CoinApiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_ids: DEFAULT_BOARDS.iter().map(|id| id.to_string()).collect(),
            log_level: default_log_level(),
            log_dir: None,
            coin_api: CoinApiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads configuration from process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps env keys to values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(raw) = read(ENV_BOARDS) {
            config.board_ids = parse_board_ids(&raw)?;
        }
        if let Some(raw) = read(ENV_LOG_LEVEL) {
            config.log_level =
                normalize_level(&raw).map_err(|reason| invalid(ENV_LOG_LEVEL, &raw, reason))?;
        }
        if let Some(raw) = read(ENV_LOG_DIR) {
            let path = PathBuf::from(&raw);
            if !path.is_absolute() {
                return Err(invalid(ENV_LOG_DIR, &raw, "must be an absolute path"));
            }
            config.log_dir = Some(path);
        }
        if let Some(raw) = read(ENV_COIN_API_URL) {
            config.coin_api.coin_api_base = raw;
        }
        if let Some(raw) = read(ENV_OHLCV_API_URL) {
            config.coin_api.ohlcv_api_base = raw;
        }
        if let Some(raw) = read(ENV_QUERY_STALE_SECS) {
            config.coin_api.stale_after = parse_secs(ENV_QUERY_STALE_SECS, &raw)?;
        }
        if let Some(raw) = read(ENV_REQUEST_TIMEOUT_SECS) {
            let timeout = parse_secs(ENV_REQUEST_TIMEOUT_SECS, &raw)?;
            if timeout.is_zero() {
                return Err(invalid(ENV_REQUEST_TIMEOUT_SECS, &raw, "must be positive"));
            }
            config.coin_api.request_timeout = timeout;
        }

        Ok(config)
    }
}

fn parse_board_ids(raw: &str) -> Result<Vec<String>, ConfigError> {
    let mut seen = HashSet::new();
    let mut board_ids = Vec::new();
    for id in raw.split(',').map(str::trim).filter(|id| !id.is_empty()) {
        if !seen.insert(id) {
            return Err(invalid(ENV_BOARDS, raw, format!("duplicate board `{id}`")));
        }
        board_ids.push(id.to_string());
    }
    if board_ids.is_empty() {
        return Err(invalid(ENV_BOARDS, raw, "at least one board is required"));
    }
    Ok(board_ids)
}

fn parse_secs(key: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    raw.parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|err| invalid(key, raw, err.to_string()))
}

fn invalid(key: &'static str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason: reason.into(),
    }
}
