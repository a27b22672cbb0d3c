//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "qpick",
    version,
    about = "Interactive terminal form filler with remote autocomplete pickers"
)]
pub struct Cli {
    /// Base URL of the lookup server, overriding the config file
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Path to a TOML config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Lookup quiet period in milliseconds, overriding the config file
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,
}
