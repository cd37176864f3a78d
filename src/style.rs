//! Page stylesheet and colour themes.
//!
//! The stylesheet is read once at startup and shared by reference with every
//! render. Light and dark palettes live in the same sheet and are selected by
//! the `data-theme` attribute on `<html>`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Stylesheet compiled into the binary.
pub const DEFAULT_STYLESHEET: &str = include_str!("../assets/theme.css");

// =============================================================================
// THEME
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme, used for the toggle link.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected 'light' or 'dark')")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownTheme(raw.to_owned())),
        }
    }
}

// =============================================================================
// STYLESHEET
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("failed to read stylesheet {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stylesheet {0} is empty")]
    Empty(PathBuf),
}

/// Immutable CSS injected into each rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    css: String,
}

impl StyleSheet {
    /// The stylesheet shipped with the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self { css: DEFAULT_STYLESHEET.to_owned() }
    }

    /// Load an override from disk, or fall back to the embedded sheet.
    pub fn load(path: Option<&Path>) -> Result<Self, StyleError> {
        let Some(path) = path else {
            return Ok(Self::embedded());
        };

        let css = std::fs::read_to_string(path).map_err(|source| StyleError::Io { path: path.to_path_buf(), source })?;
        if css.trim().is_empty() {
            return Err(StyleError::Empty(path.to_path_buf()));
        }

        tracing::info!(path = %path.display(), bytes = css.len(), "stylesheet override loaded");
        Ok(Self { css })
    }

    #[must_use]
    pub fn css(&self) -> &str {
        &self.css
    }
}

#[cfg(test)]
#[path = "style_test.rs"]
mod tests;
