use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};

use super::state::App;

impl App {
    /// Poll for one event, dispatch it, then run the per-tick pipeline
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if event::poll(timeout)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    self.handle_mouse_event(mouse_event);
                }
                _ => {}
            }
        }

        self.on_tick(Instant::now());
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.handle_key_event_at(key, Instant::now());
    }

    /// Key handling against an explicit clock, so debounce timing is testable
    pub fn handle_key_event_at(&mut self, key: KeyEvent, now: Instant) {
        // Try global keys first
        if self.handle_global_keys(key, now) {
            return; // Key was handled globally
        }

        // Not a global key, delegate to the focused field
        self.handle_field_key(key, now);
    }

    /// Handle global keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C: exit without output
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Ctrl+S: submit the form and exit
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submitted = true;
            self.should_quit = true;
            return true;
        }

        // Tab / Shift+Tab: move focus between fields
        if key.code == KeyCode::Tab {
            self.focus_next(now);
            return true;
        }
        if key.code == KeyCode::BackTab {
            self.focus_previous(now);
            return true;
        }

        false // Key not handled
    }

    /// Handle keys for the focused field
    fn handle_field_key(&mut self, key: KeyEvent, now: Instant) {
        if let Some(index) = self.focused_binding() {
            if self.handle_picker_key(index, key) {
                return;
            }
        }

        // Single-line fields: Enter has no insert meaning
        if key.code == KeyCode::Enter {
            return;
        }

        let binding = self.focused_binding();
        let modified = self.form.fields[self.focus].input(key);
        if modified {
            if let Some(index) = binding {
                self.on_picker_text_changed(index, now);
            }
        }
    }

    /// Picker navigation keys. Consumed whether or not the panel is open so
    /// they never leak into the textarea as cursor movement.
    fn handle_picker_key(&mut self, index: usize, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down => {
                self.bindings[index].picker.select_next();
                true
            }
            KeyCode::Up => {
                self.bindings[index].picker.select_previous();
                true
            }
            KeyCode::Enter => {
                self.confirm_selection(index);
                true
            }
            KeyCode::Esc => {
                // Esc on a closed picker is consumed without touching the
                // scheduled lookup
                if self.bindings[index].picker.is_visible() {
                    self.dismiss_picker(index);
                }
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
