//! Server configuration loaded from the environment.
//!
//! ERROR HANDLING
//! ==============
//! Missing variables fall back to defaults. A variable that is present but
//! malformed is a startup error: silently serving on the wrong port is worse
//! than refusing to start.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Root of the static `sounds/` and `images/` trees.
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Load from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: env_parse(&lookup, "PORT", DEFAULT_PORT)?,
            assets_dir: lookup("ASSETS_DIR").map_or_else(default_assets_dir, PathBuf::from),
        })
    }
}

pub(crate) fn env_parse<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets")
}
