use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Server port to send queries to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Receive timeout per attempt, in milliseconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Attempts before resolution is abandoned.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl ResolverConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            query_timeout: default_query_timeout(),
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout() -> u64 {
    3000
}

fn default_max_attempts() -> u32 {
    3
}
