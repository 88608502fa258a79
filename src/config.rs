//! Runtime configuration for the ledger and its actor.
//!
//! Everything has a default, so `LedgerConfig::default()` is a working setup.
//! [`LedgerConfig::from_env`] lets the demo binary and deployments override
//! individual keys:
//!
//! ```bash
//! LEDGER_CHANNEL_BUFFER=64 LEDGER_DUPLICATE_POLICY=reject RUST_LOG=info cargo run
//! ```
//!
//! Log verbosity is not part of this struct; it stays with `RUST_LOG`, see
//! [`setup_tracing`](crate::lifecycle::setup_tracing).

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CHANNEL_BUFFER_ENV: &str = "LEDGER_CHANNEL_BUFFER";
pub const DUPLICATE_POLICY_ENV: &str = "LEDGER_DUPLICATE_POLICY";

const DEFAULT_CHANNEL_BUFFER: usize = 32;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// What happens when a course code or student ID is added a second time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// The new entity silently takes the old one's place.
    #[default]
    Replace,
    /// The add fails with a duplicate error and the old entity stays.
    Reject,
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(DuplicatePolicy::Replace),
            "reject" => Ok(DuplicatePolicy::Reject),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Capacity of the actor's request channel.
    pub channel_buffer: usize,
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl LedgerConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(CHANNEL_BUFFER_ENV) {
            config.channel_buffer = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: CHANNEL_BUFFER_ENV,
                        value: raw,
                    })
                }
            };
        }

        if let Some(raw) = lookup(DUPLICATE_POLICY_ENV) {
            config.duplicate_policy = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: DUPLICATE_POLICY_ENV,
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }
}
