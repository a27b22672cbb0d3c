use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for qpick
#[derive(Debug, Error)]
pub enum QpickError {
    #[error("Could not read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("No form fields are defined.\n\nAdd at least one [[fields]] entry to the config.")]
    EmptyForm,

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
