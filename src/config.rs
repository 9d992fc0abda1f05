//! Host configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Demo page, stylesheet, and any other static assets.
    pub static_dir: PathBuf,
    /// `wasm-pack` output for the `client` crate, served at `/pkg`.
    pub pkg_dir: PathBuf,
}

impl Config {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STATIC_DIR`: default `<crate>/static`
    /// - `PKG_DIR`: default `<crate>/client/pkg`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let static_dir = lookup("STATIC_DIR").map_or_else(|| manifest_dir.join("static"), PathBuf::from);
        let pkg_dir = lookup("PKG_DIR").map_or_else(|| manifest_dir.join("client/pkg"), PathBuf::from);

        Ok(Self { port, static_dir, pkg_dir })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
