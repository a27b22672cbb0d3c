//! Mouse hover and click handling
//!
//! Hover moves the suggestion cursor under the pointer; a left press on a
//! row confirms it without ever giving the panel focus. Presses elsewhere
//! refocus fields or close whatever panel is open.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

use crate::widgets::popup;

use super::state::App;

impl App {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        self.handle_mouse_event_at(mouse, Instant::now());
    }

    pub fn handle_mouse_event_at(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::Moved => self.handle_hover(mouse),
            MouseEventKind::Down(MouseButton::Left) => self.handle_press(mouse, now),
            _ => {}
        }
    }

    /// Move the suggestion cursor onto whatever row the pointer is over
    fn handle_hover(&mut self, mouse: MouseEvent) {
        if let Some((binding, row)) = self.panel_row_at(mouse.column, mouse.row) {
            self.bindings[binding].picker.set_cursor(Some(row));
        }
    }

    /// A left press confirms a panel row, refocuses a field, or closes the
    /// open panels when it lands on dead space. Panel rows are checked first:
    /// the press must not hand focus to whatever sits under the panel.
    fn handle_press(&mut self, mouse: MouseEvent, now: Instant) {
        if let Some((binding, row)) = self.panel_row_at(mouse.column, mouse.row) {
            self.bindings[binding].picker.set_cursor(Some(row));
            self.confirm_selection(binding);
            return;
        }

        // A press on the panel border or its empty tail stays with the panel
        if self.regions.panel_contains(mouse.column, mouse.row) {
            return;
        }

        if let Some(field) = self.regions.field_at(mouse.column, mouse.row) {
            self.change_focus(field, now);
            return;
        }

        self.dismiss_open_panels();
    }

    /// Which suggestion row of the open panel sits under the given position
    fn panel_row_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        let panel = self.regions.panel()?;
        let binding = self.bindings.get(panel.binding)?;
        if !binding.picker.is_visible() {
            return None;
        }

        // Hit-test against the area inside the borders
        let inner = popup::inset_rect(panel.area, 1, 1);
        if column < inner.x || column >= inner.right() || row < inner.y || row >= inner.bottom() {
            return None;
        }

        let index = binding.picker.view_offset() + (row - inner.y) as usize;
        if index >= binding.picker.suggestions().len() {
            return None;
        }

        Some((panel.binding, index))
    }
}

#[cfg(test)]
#[path = "mouse_tests.rs"]
mod mouse_tests;
