//! Wiring configured pickers to concrete form fields

use std::time::Duration;

use crate::config::BindingSpec;
use crate::lookup::EndpointKind;
use crate::picker::PickerState;

use super::FormState;

/// A picker wired to one visible field and at most one hidden slot.
pub struct PickerBinding {
    pub field: usize,
    pub hidden: Option<usize>,
    pub kind: EndpointKind,
    pub picker: PickerState,
}

/// Resolve `specs` against the form's fields and hidden slots.
///
/// A spec whose input or hidden target does not exist is skipped with a
/// warning so one bad entry cannot take the whole form down. A field can
/// carry at most one picker; later duplicates are skipped too.
pub fn resolve_bindings(
    specs: &[BindingSpec],
    form: &FormState,
    window: Duration,
    max_visible: usize,
) -> Vec<PickerBinding> {
    let mut bindings: Vec<PickerBinding> = Vec::new();

    for spec in specs {
        let Some(field) = form.field_index(&spec.input) else {
            log::warn!("picker binding skipped: no field named {:?}", spec.input);
            continue;
        };

        if bindings.iter().any(|binding| binding.field == field) {
            log::warn!(
                "picker binding skipped: field {:?} already has a picker",
                spec.input
            );
            continue;
        }

        let hidden = match &spec.hidden {
            Some(name) => match form.hidden_index(name) {
                Some(index) => Some(index),
                None => {
                    log::warn!("picker binding skipped: no hidden slot named {name:?}");
                    continue;
                }
            },
            None => None,
        };

        bindings.push(PickerBinding {
            field,
            hidden,
            kind: spec.endpoint,
            picker: PickerState::new(window, max_visible),
        });
    }

    bindings
}
