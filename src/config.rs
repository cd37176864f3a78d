//! Process configuration parsed from environment variables.

use std::path::PathBuf;

use crate::style::{Theme, UnknownTheme};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid SENSORSYNC_THEME: {0}")]
    Theme(#[from] UnknownTheme),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub port: u16,
    /// YAML file replacing the embedded page content.
    pub content_path: Option<PathBuf>,
    /// CSS file replacing the embedded stylesheet.
    pub stylesheet_path: Option<PathBuf>,
    /// Theme used when a request does not pick one.
    pub default_theme: Theme,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `SENSORSYNC_CONTENT`: page content YAML path
    /// - `SENSORSYNC_STYLESHEET`: stylesheet path
    /// - `SENSORSYNC_THEME`: `light` (default) or `dark`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let default_theme = match var("SENSORSYNC_THEME") {
            Some(raw) => raw.parse::<Theme>()?,
            None => Theme::default(),
        };

        Ok(Self {
            bind_addr,
            port,
            content_path: var("SENSORSYNC_CONTENT").map(PathBuf::from),
            stylesheet_path: var("SENSORSYNC_STYLESHEET").map(PathBuf::from),
            default_theme,
        })
    }

    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
