//! Session configuration for mood analysis

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{EchoVaultError, Result};
use crate::types::DEFAULT_HISTORY_CAPACITY;

pub const ENV_HISTORY_CAPACITY: &str = "ECHOVAULT_HISTORY_CAPACITY";
pub const ENV_SEED_HISTORY: &str = "ECHOVAULT_SEED_HISTORY";
pub const ENV_TIMELINE_WINDOW: &str = "ECHOVAULT_TIMELINE_WINDOW";
pub const ENV_RECENT_WINDOW: &str = "ECHOVAULT_RECENT_WINDOW";

/// Configuration for a mood session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodConfig {
    /// Maximum number of entries kept in the history
    #[serde(default = "default_capacity")]
    pub history_capacity: usize,
    /// Pre-populate the history with sample entries on creation
    #[serde(default = "default_true")]
    pub seed_history: bool,
    /// Number of entries shown on the timeline chart
    #[serde(default = "default_timeline_window")]
    pub timeline_window: usize,
    /// Number of entries in the recent-emotions strip
    #[serde(default = "default_recent_window")]
    pub recent_window: usize,
}

fn default_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

fn default_true() -> bool {
    true
}

fn default_timeline_window() -> usize {
    7
}

fn default_recent_window() -> usize {
    5
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_capacity(),
            seed_history: default_true(),
            timeline_window: default_timeline_window(),
            recent_window: default_recent_window(),
        }
    }
}

impl MoodConfig {
    /// Create config from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            history_capacity: parse_var(&lookup, ENV_HISTORY_CAPACITY)?
                .unwrap_or(defaults.history_capacity),
            seed_history: match lookup(ENV_SEED_HISTORY) {
                Some(raw) => parse_bool(ENV_SEED_HISTORY, &raw)?,
                None => defaults.seed_history,
            },
            timeline_window: parse_var(&lookup, ENV_TIMELINE_WINDOW)?
                .unwrap_or(defaults.timeline_window),
            recent_window: parse_var(&lookup, ENV_RECENT_WINDOW)?
                .unwrap_or(defaults.recent_window),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            return Err(EchoVaultError::Config(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| EchoVaultError::Config(format!("{} has invalid value {:?}", key, raw))),
        None => Ok(None),
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "y" | "t" | "true" | "yes" | "on" => Ok(true),
        "0" | "n" | "f" | "false" | "no" | "off" => Ok(false),
        _ => Err(EchoVaultError::Config(format!(
            "{} has invalid value {:?}",
            key, raw
        ))),
    }
}
