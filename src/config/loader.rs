//! Loading and layering configuration
//!
//! Precedence: an explicit `--config` path must exist and parse, otherwise
//! the user config directory is consulted, otherwise the built-in demo form
//! is used. CLI flags override whatever was loaded.

use std::path::PathBuf;

use crate::error::QpickError;

use super::cli::Cli;
use super::types::{Config, MAX_DEBOUNCE_MS, MIN_DEBOUNCE_MS};

pub fn load(cli: &Cli) -> Result<Config, QpickError> {
    let mut config = match &cli.config {
        Some(path) => read_config(path.clone())?,
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(path)?,
            _ => Config::demo(),
        },
    };

    apply_overrides(&mut config, cli);

    if config.fields.is_empty() {
        return Err(QpickError::EmptyForm);
    }

    if !(MIN_DEBOUNCE_MS..=MAX_DEBOUNCE_MS).contains(&config.picker.debounce_ms) {
        log::warn!(
            "debounce_ms {} is outside {MIN_DEBOUNCE_MS}..={MAX_DEBOUNCE_MS} and will be clamped",
            config.picker.debounce_ms
        );
    }

    Ok(config)
}

fn read_config(path: PathBuf) -> Result<Config, QpickError> {
    let text = std::fs::read_to_string(&path).map_err(|source| QpickError::ConfigRead {
        path: path.clone(),
        source,
    })?;

    toml::from_str(&text).map_err(|source| QpickError::ConfigParse { path, source })
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("qpick").join("config.toml"))
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(server) = &cli.server {
        config.server.base_url = server.clone();
    }
    if let Some(debounce_ms) = cli.debounce_ms {
        config.picker.debounce_ms = debounce_ms;
    }
}
