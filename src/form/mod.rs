mod binding;
mod field;
mod form_state;

pub use binding::{PickerBinding, resolve_bindings};
pub use field::Field;
pub use form_state::{ChangeEvent, FormState, HiddenSlot};
