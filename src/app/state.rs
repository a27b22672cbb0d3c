use std::time::Instant;

use crate::config::Config;
use crate::form::{Field, FormState, HiddenSlot, PickerBinding, resolve_bindings};
use crate::lookup::{LookupHandle, LookupReply, LookupRequest};

use super::layout::LayoutRegions;

/// Application state
pub struct App {
    pub form: FormState,
    pub bindings: Vec<PickerBinding>,
    pub lookup: LookupHandle,
    /// Index of the focused field
    pub focus: usize,
    pub regions: LayoutRegions,
    /// Most recent change notification, shown in the status line
    pub status: Option<String>,
    pub submitted: bool,
    pub should_quit: bool,
}

impl App {
    /// Build the form and its picker bindings from the loaded config
    pub fn new(config: &Config, lookup: LookupHandle) -> Self {
        let fields = config
            .fields
            .iter()
            .map(|spec| Field::new(&spec.name, spec.display_label()))
            .collect();
        let hidden = config
            .hidden
            .iter()
            .map(|spec| HiddenSlot::new(&spec.name))
            .collect();
        let form = FormState::new(fields, hidden);

        let bindings = resolve_bindings(
            &config.pickers,
            &form,
            config.picker.window(),
            config.picker.visible_rows(),
        );

        Self {
            form,
            bindings,
            lookup,
            focus: 0,
            regions: LayoutRegions::default(),
            status: None,
            submitted: false,
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Submit payload, printed after the terminal is restored
    pub fn output(&self) -> Option<String> {
        self.submitted
            .then(|| self.form.submit_payload().to_string())
    }

    /// Binding carrying a picker for `field`, if any
    pub fn binding_for_field(&self, field: usize) -> Option<usize> {
        self.bindings
            .iter()
            .position(|binding| binding.field == field)
    }

    pub fn focused_binding(&self) -> Option<usize> {
        self.binding_for_field(self.focus)
    }

    /// Per-tick pipeline: fire due lookups, apply worker replies, surface
    /// queued change notifications.
    pub fn on_tick(&mut self, now: Instant) {
        self.fire_due_lookups(now);
        self.drain_lookup_replies();
        self.drain_change_events();
    }

    fn fire_due_lookups(&mut self, now: Instant) {
        for (index, binding) in self.bindings.iter_mut().enumerate() {
            let Some(query) = binding.picker.take_due_query(now) else {
                continue;
            };

            let (request_id, cancel) = binding.picker.begin_request();
            self.lookup.dispatch(LookupRequest {
                picker: index,
                request_id,
                kind: binding.kind,
                query,
                cancel,
            });
        }
    }

    fn drain_lookup_replies(&mut self) {
        while let Some(reply) = self.lookup.try_reply() {
            self.apply_reply(reply);
        }
    }

    fn apply_reply(&mut self, reply: LookupReply) {
        let Some(binding) = self.bindings.get_mut(reply.picker) else {
            log::debug!("reply for unknown picker {} dropped", reply.picker);
            return;
        };

        // A reply that lost the race against a newer request or a cancel
        // must not touch the panel
        if !binding.picker.accepts_reply(reply.request_id) {
            log::debug!(
                "stale reply {} for picker {} dropped",
                reply.request_id,
                reply.picker
            );
            return;
        }
        binding.picker.finish_request();

        match reply.outcome {
            Ok(page) => binding.picker.show_results(page.suggestions, page.more),
            Err(error) => {
                let field = &self.form.fields[binding.field];
                log::warn!("lookup for {} failed: {}", field.name, error);
                binding.picker.dismiss();
            }
        }
    }

    /// The user edited a picker-bound field. The paired hidden slot is
    /// cleared silently (the text no longer names a confirmed suggestion),
    /// then the lookup is rescheduled, or torn down for an empty query.
    pub fn on_picker_text_changed(&mut self, index: usize, now: Instant) {
        let Some(binding) = self.bindings.get_mut(index) else {
            return;
        };

        if let Some(hidden) = binding.hidden {
            self.form.hidden[hidden].clear();
        }

        let query = self.form.fields[binding.field].text().to_string();
        if query.is_empty() {
            binding.picker.cancel_pending();
            binding.picker.cancel_in_flight();
            binding.picker.dismiss();
        } else {
            binding.picker.cancel_in_flight();
            binding.picker.schedule_lookup(&query, now);
        }
    }

    /// Write the highlighted suggestion (or the first, when none is
    /// highlighted) into the field and its paired hidden slot, notify both
    /// changes, close the panel, and move focus off the field.
    pub fn confirm_selection(&mut self, index: usize) {
        let Some(binding) = self.bindings.get_mut(index) else {
            return;
        };
        let Some(suggestion) = binding.picker.confirm_target().cloned() else {
            return;
        };

        let field = binding.field;
        let hidden = binding.hidden;

        binding.picker.cancel_pending();
        binding.picker.cancel_in_flight();
        binding.picker.dismiss();

        self.form.fields[field].set_text(&suggestion.text);
        let field_name = self.form.fields[field].name.clone();
        self.form.notify_change(&field_name, &suggestion.text);

        if let Some(hidden) = hidden {
            let value = suggestion.id.to_string();
            self.form.hidden[hidden].set(suggestion.id);
            let slot_name = self.form.hidden[hidden].name.clone();
            self.form.notify_change(&slot_name, &value);
        }

        self.advance_focus_after_confirm();
    }

    /// Confirming blurs the field: focus moves on without waking the picker
    /// under the new focus.
    fn advance_focus_after_confirm(&mut self) {
        if self.form.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.form.fields.len();
    }

    pub fn focus_next(&mut self, now: Instant) {
        let count = self.form.fields.len();
        if count == 0 {
            return;
        }
        self.change_focus((self.focus + 1) % count, now);
    }

    pub fn focus_previous(&mut self, now: Instant) {
        let count = self.form.fields.len();
        if count == 0 {
            return;
        }
        self.change_focus((self.focus + count - 1) % count, now);
    }

    /// Move focus, tearing down the picker being left and waking the one
    /// being entered when its field already has text.
    pub fn change_focus(&mut self, target: usize, now: Instant) {
        if target == self.focus || target >= self.form.fields.len() {
            return;
        }

        self.leave_focused_picker();
        self.focus = target;
        self.enter_focused_picker(now);
    }

    fn leave_focused_picker(&mut self) {
        if let Some(index) = self.focused_binding() {
            let picker = &mut self.bindings[index].picker;
            picker.cancel_pending();
            picker.cancel_in_flight();
            picker.dismiss();
        }
    }

    fn enter_focused_picker(&mut self, now: Instant) {
        let Some(index) = self.focused_binding() else {
            return;
        };

        let query = self.form.fields[self.focus].text().to_string();
        if !query.is_empty() {
            self.bindings[index].picker.schedule_lookup(&query, now);
        }
    }

    /// Close one picker's panel and abandon whatever it was looking up
    pub fn dismiss_picker(&mut self, index: usize) {
        if let Some(binding) = self.bindings.get_mut(index) {
            binding.picker.cancel_pending();
            binding.picker.cancel_in_flight();
            binding.picker.dismiss();
        }
    }

    /// Close every open panel, e.g. when the pointer lands on dead space
    pub fn dismiss_open_panels(&mut self) {
        for index in 0..self.bindings.len() {
            if self.bindings[index].picker.is_visible() {
                self.dismiss_picker(index);
            }
        }
    }

    fn drain_change_events(&mut self) {
        for change in self.form.drain_changes() {
            log::debug!("change: {} = {}", change.target, change.value);
            self.status = Some(format!("{} = {}", change.target, change.value));
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
