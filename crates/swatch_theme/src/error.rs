//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned when rendering a themed style
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ThemeError {
    /// Rendering was attempted without a theme in scope
    #[error("no theme provided: wrap the component in a theme provider")]
    MissingThemeProvider,
}

/// Errors from loading theme files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown theme preset '{0}'")]
    UnknownPreset(String),

    #[error("unknown {category} token '{name}'")]
    UnknownToken {
        category: &'static str,
        name: String,
    },

    #[error("{category} token '{name}' must be a finite number")]
    NonFiniteValue {
        category: &'static str,
        name: String,
    },
}
