mod cli;
mod loader;
mod types;

pub use cli::Cli;
pub use loader::load;
pub use types::{
    BindingSpec, Config, FieldSpec, HiddenSpec, MAX_DEBOUNCE_MS, MIN_DEBOUNCE_MS, PickerConfig,
    ServerConfig,
};
