mod debounce;
pub mod render;
mod state;

pub use debounce::Debouncer;
pub use state::PickerState;
