//! Suggestion panel rendering
//!
//! Draws the dropdown of remote suggestions underneath a picker field.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::picker::PickerState;
use crate::widgets::popup;

// Suggestion panel display constants
const MAX_PANEL_WIDTH: usize = 60;
const PANEL_BORDER_HEIGHT: u16 = 2;
const PANEL_PADDING: u16 = 4;

/// Render the suggestion panel anchored just below `anchor`, flipping above
/// it when the bottom of the frame is too close.
///
/// Returns the rect the panel was drawn into so the caller can hit-test
/// pointer events against it, or `None` when nothing was drawn.
pub fn render_panel(picker: &PickerState, frame: &mut Frame, anchor: Rect) -> Option<Rect> {
    if !picker.is_visible() {
        return None;
    }
    let suggestions = picker.suggestions();
    if suggestions.is_empty() {
        return None;
    }

    // Only the scrolled-into-view window is drawn
    let offset = picker.view_offset();
    let end = (offset + picker.max_visible()).min(suggestions.len());
    let window = &suggestions[offset..end];

    let panel_height = window.len() as u16 + PANEL_BORDER_HEIGHT;

    // Widest visible label decides the width, never narrower than the anchor
    let max_text_width = window
        .iter()
        .map(|s| s.text.width())
        .max()
        .unwrap_or(0)
        .min(MAX_PANEL_WIDTH) as u16;
    let panel_width = (max_text_width + PANEL_PADDING).max(anchor.width);

    let panel_area = popup::popup_below_anchor(anchor, frame.area(), panel_width, panel_height);
    if panel_area.height <= PANEL_BORDER_HEIGHT {
        return None;
    }

    let cursor = picker.cursor();
    let items: Vec<ListItem> = window
        .iter()
        .enumerate()
        .map(|(row, suggestion)| {
            let line = if cursor == Some(offset + row) {
                Line::styled(
                    format!("► {}", suggestion.text),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Line::styled(
                    format!("  {}", suggestion.text),
                    Style::default().fg(Color::White).bg(Color::Black),
                )
            };
            ListItem::new(line)
        })
        .collect();

    let title = if picker.more() {
        " Suggestions (more) "
    } else {
        " Suggestions "
    };

    // Clear the background area to prevent transparency
    popup::clear_area(frame, panel_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, panel_area);

    Some(panel_area)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
