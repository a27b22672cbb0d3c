//! qpick: interactive terminal form filler with remote autocomplete pickers
//!
//! A form is described in configuration and rendered as a stack of text
//! fields. Picker-bound fields query a suggestion server while the user
//! types and, on confirm, write the chosen record id into a hidden slot
//! alongside the visible text. Ctrl+S prints the collected payload as JSON.

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod lookup;
pub mod picker;
pub mod widgets;

mod test_utils;

pub use error::QpickError;
