//! A labeled single-line text field

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

pub struct Field {
    pub name: String,
    pub label: String,
    pub textarea: TextArea<'static>,
}

impl Field {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        let name = name.into();
        let label = label.into();

        let mut textarea = TextArea::default();

        // Configure for single-line input
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {label} "))
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());

        Self {
            name,
            label,
            textarea,
        }
    }

    /// Get the current field text
    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the whole line with `text`, cursor ending up at the end
    pub fn set_text(&mut self, text: &str) {
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text);
    }

    /// Feed a key event to the field. Returns true when the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    /// Render with a focus-aware border. `tag` is appended to the title,
    /// used to surface the confirmed record id next to the label.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, tag: Option<&str>) {
        let border_color = if focused {
            Color::Cyan // Focused
        } else {
            Color::DarkGray // Unfocused
        };

        let title = match tag {
            Some(tag) => format!(" {} ({tag}) ", self.label),
            None => format!(" {} ", self.label),
        };

        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.textarea, area);
    }
}
