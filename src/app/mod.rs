mod events;
mod layout;
mod mouse;
mod render;
mod state;

// Re-export public types
pub use layout::{LayoutRegions, PanelRegion};
pub use state::App;
