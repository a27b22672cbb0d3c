//! Tracking rendered component regions for mouse interaction
//!
//! Rebuilt on every frame: the render pass records where each field and the
//! open suggestion panel landed, mouse handling hit-tests against the record.

use ratatui::layout::Rect;

/// Where the open suggestion panel was drawn, and for which binding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelRegion {
    pub binding: usize,
    pub area: Rect,
}

/// Screen regions recorded by the last render pass
#[derive(Debug, Default)]
pub struct LayoutRegions {
    fields: Vec<Rect>,
    panel: Option<PanelRegion>,
}

impl LayoutRegions {
    /// Forget the previous frame. Called at the top of every render pass.
    pub fn reset(&mut self) {
        self.fields.clear();
        self.panel = None;
    }

    pub fn record_field(&mut self, area: Rect) {
        self.fields.push(area);
    }

    pub fn record_panel(&mut self, binding: usize, area: Rect) {
        self.panel = Some(PanelRegion { binding, area });
    }

    pub fn field(&self, index: usize) -> Option<Rect> {
        self.fields.get(index).copied()
    }

    /// Which field sits under the given screen position
    pub fn field_at(&self, column: u16, row: u16) -> Option<usize> {
        self.fields
            .iter()
            .position(|area| contains(*area, column, row))
    }

    pub fn panel(&self) -> Option<PanelRegion> {
        self.panel
    }

    pub fn panel_contains(&self, column: u16, row: u16) -> bool {
        self.panel
            .is_some_and(|panel| contains(panel.area, column, row))
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn test_fields_are_hit_in_recording_order() {
        let mut regions = LayoutRegions::default();
        regions.record_field(rect(0, 0, 40, 3));
        regions.record_field(rect(0, 3, 40, 3));

        assert_eq!(regions.field_at(5, 1), Some(0));
        assert_eq!(regions.field_at(5, 4), Some(1));
        assert_eq!(regions.field_at(5, 10), None);
    }

    #[test]
    fn test_field_edges_are_exclusive_on_the_far_side() {
        let mut regions = LayoutRegions::default();
        regions.record_field(rect(2, 1, 10, 3));

        assert_eq!(regions.field_at(2, 1), Some(0));
        assert_eq!(regions.field_at(11, 3), Some(0));
        assert_eq!(regions.field_at(12, 1), None);
        assert_eq!(regions.field_at(2, 4), None);
    }

    #[test]
    fn test_panel_hit_testing() {
        let mut regions = LayoutRegions::default();
        regions.record_panel(1, rect(0, 3, 30, 5));

        assert!(regions.panel_contains(10, 4));
        assert!(!regions.panel_contains(10, 8));
        assert_eq!(regions.panel().unwrap().binding, 1);
    }

    #[test]
    fn test_reset_forgets_both_kinds_of_region() {
        let mut regions = LayoutRegions::default();
        regions.record_field(rect(0, 0, 40, 3));
        regions.record_panel(0, rect(0, 3, 30, 5));

        regions.reset();

        assert_eq!(regions.field_at(1, 1), None);
        assert!(regions.panel().is_none());
        assert!(regions.field(0).is_none());
    }
}
