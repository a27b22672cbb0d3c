use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Anchor a popup to the row just below `anchor`, flipping above when the
/// space below cannot hold it. When neither side has the full height, the
/// roomier side wins and the popup is squeezed to fit.
pub fn popup_below_anchor(anchor: Rect, frame_area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame_area.width);
    let x = anchor
        .x
        .min(frame_area.right().saturating_sub(width))
        .max(frame_area.x);

    let below = anchor.bottom();
    let room_below = frame_area.bottom().saturating_sub(below);
    let room_above = anchor.y.saturating_sub(frame_area.y);

    let (y, height) = if height <= room_below {
        (below, height)
    } else if height <= room_above {
        (anchor.y - height, height)
    } else if room_below >= room_above {
        (below, room_below.min(frame_area.height).max(1))
    } else {
        (frame_area.y, room_above.max(1))
    };

    Rect {
        x,
        y,
        width,
        height,
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
