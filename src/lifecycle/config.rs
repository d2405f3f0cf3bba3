//! # Configuration
//!
//! Runtime settings for the service. Values come from, in increasing priority:
//!
//! 1. [`Config::default`]
//! 2. A TOML file named by `CLIENTES_CONFIG_PATH`
//! 3. The `CLIENTES_BIND_ADDR`, `CLIENTES_MIN_AGE` and `CLIENTES_CHANNEL_BUFFER` variables
//!
//! ```toml
//! bind_addr = "0.0.0.0:8080"
//! min_age = 18
//! channel_buffer = 64
//! reference_date = "2024-06-15"
//! ```

use crate::cliente_actor::AgePolicy;
use chrono::NaiveDate;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "CLIENTES_CONFIG_PATH";
pub const BIND_ADDR_ENV: &str = "CLIENTES_BIND_ADDR";
pub const MIN_AGE_ENV: &str = "CLIENTES_MIN_AGE";
pub const CHANNEL_BUFFER_ENV: &str = "CLIENTES_CHANNEL_BUFFER";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
    #[error("channel_buffer must be greater than zero")]
    ZeroChannelBuffer,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
    /// Minimum age, in whole years, to register a client.
    pub min_age: u32,
    /// Capacity of the Cliente actor's mailbox.
    pub channel_buffer: usize,
    /// Fixed "today" for age checks and registration dates.
    pub reference_date: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            min_age: AgePolicy::DEFAULT_MIN_AGE,
            channel_buffer: 32,
            reference_date: None,
        }
    }
}

impl Config {
    /// Loads the configuration from the optional file and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let lookup = |var: &str| std::env::var(var).ok();
        let mut config = match non_empty(lookup(CONFIG_PATH_ENV)) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_env_overrides(lookup)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.check()?;
        Ok(config)
    }

    /// Overrides fields from variables returned by `lookup`. Blank values are ignored.
    pub fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(value) = non_empty(lookup(BIND_ADDR_ENV)) {
            self.bind_addr = parse_env(BIND_ADDR_ENV, value)?;
        }
        if let Some(value) = non_empty(lookup(MIN_AGE_ENV)) {
            self.min_age = parse_env(MIN_AGE_ENV, value)?;
        }
        if let Some(value) = non_empty(lookup(CHANNEL_BUFFER_ENV)) {
            self.channel_buffer = parse_env(CHANNEL_BUFFER_ENV, value)?;
        }
        Ok(())
    }

    pub fn age_policy(&self) -> AgePolicy {
        AgePolicy {
            min_age: self.min_age,
            reference_date: self.reference_date,
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::ZeroChannelBuffer);
        }
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var, value })
}
