//! Builder and logging configuration.

use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;

use crate::error::ConfigError;

pub const ENV_TRACK_IDENTITY: &str = "VDOM_TRACK_IDENTITY";
pub const ENV_LOG: &str = "VDOM_LOG";
pub const ENV_LOG_FILE: &str = "VDOM_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// When true, every node created by a [`Builder`](crate::Builder) gets a
    /// fresh identity.
    pub track_identity: bool,

    /// Maximum level written by [`init_file_logger`](crate::logging::init_file_logger).
    pub log_level: LevelFilter,

    /// Log destination. `None` leaves logging uninitialized.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            track_identity: false,
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from `VDOM_TRACK_IDENTITY`, `VDOM_LOG` and
    /// `VDOM_LOG_FILE`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_TRACK_IDENTITY) {
            config.track_identity = parse_bool(ENV_TRACK_IDENTITY, &value)?;
        }

        if let Some(value) = lookup(ENV_LOG) {
            config.log_level =
                LevelFilter::from_str(value.trim()).map_err(|_| ConfigError::InvalidValue {
                    key: ENV_LOG,
                    value: value.clone(),
                    expected: "one of off, error, warn, info, debug, trace",
                })?;
        }

        if let Some(value) = lookup(ENV_LOG_FILE) {
            if !value.trim().is_empty() {
                config.log_file = Some(PathBuf::from(value));
            }
        }

        Ok(config)
    }

    pub fn track_identity(mut self, track: bool) -> Self {
        self.track_identity = track;
        self
    }

    pub fn log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            expected: "a boolean (1/0, true/false)",
        }),
    }
}
