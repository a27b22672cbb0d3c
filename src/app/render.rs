use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::picker;

use super::state::App;

/// Height of one bordered field row
const FIELD_HEIGHT: u16 = 3;

impl App {
    /// Render the form, then the focused picker's panel on top of it
    pub fn render(&mut self, frame: &mut Frame) {
        self.regions.reset();

        let mut constraints: Vec<Constraint> = self
            .form
            .fields
            .iter()
            .map(|_| Constraint::Length(FIELD_HEIGHT))
            .collect();
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1)); // Status line
        constraints.push(Constraint::Length(1)); // Key hints

        let layout = Layout::vertical(constraints).split(frame.area());

        for index in 0..self.form.fields.len() {
            self.render_field(frame, layout[index], index);
        }

        self.render_status(frame, layout[self.form.fields.len() + 1]);
        render_hints(frame, layout[self.form.fields.len() + 2]);

        // Drawn last so the panel overlays whatever sits below its anchor
        self.render_focused_panel(frame);
    }

    fn render_field(&mut self, frame: &mut Frame, area: Rect, index: usize) {
        let focused = index == self.focus;

        // A confirmed suggestion surfaces its id next to the label
        let tag = self
            .binding_for_field(index)
            .and_then(|binding| self.bindings[binding].hidden)
            .and_then(|hidden| self.form.hidden[hidden].value())
            .map(|id| format!("#{id}"));

        self.form.fields[index].render(frame, area, focused, tag.as_deref());
        self.regions.record_field(area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        if let Some(status) = &self.status {
            let paragraph =
                Paragraph::new(status.as_str()).style(Style::default().fg(Color::Green));
            frame.render_widget(paragraph, area);
        }
    }

    fn render_focused_panel(&mut self, frame: &mut Frame) {
        let Some(index) = self.focused_binding() else {
            return;
        };
        let Some(anchor) = self.regions.field(self.bindings[index].field) else {
            return;
        };

        let panel = picker::render::render_panel(&self.bindings[index].picker, frame, anchor);
        if let Some(area) = panel {
            self.regions.record_panel(index, area);
        }
    }
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = " Tab: next field   Ctrl+S: submit   Ctrl+C: quit";
    let paragraph = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
