//! Per-instance picker state
//!
//! Each bound field owns one `PickerState`: the suggestion list as the server
//! ordered it, the selection cursor, the debounce timer for the next lookup,
//! and the in-flight request bookkeeping. Instances never share state, so
//! pickers on the same form cannot interfere with each other.

use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use crate::lookup::Suggestion;
use super::debounce::Debouncer;

#[derive(Debug)]
struct InFlight {
    request_id: u64,
    cancel: CancellationToken,
}

pub struct PickerState {
    suggestions: Vec<Suggestion>,
    visible: bool,
    /// Highlighted row. `None` is the resting position: nothing highlighted,
    /// the next Down lands on the first row.
    cursor: Option<usize>,
    /// First row of the visible window when the list overflows the panel
    view_offset: usize,
    max_visible: usize,
    more: bool,
    debounce: Debouncer,
    pending_query: Option<String>,
    next_request_id: u64,
    in_flight: Option<InFlight>,
}

impl PickerState {
    pub fn new(window: Duration, max_visible: usize) -> Self {
        Self {
            suggestions: Vec::new(),
            visible: false,
            cursor: None,
            view_offset: 0,
            max_visible: max_visible.max(1),
            more: false,
            debounce: Debouncer::new(window),
            pending_query: None,
            next_request_id: 0,
            in_flight: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn view_offset(&self) -> usize {
        self.view_offset
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Whether the server reported further pages for the current list
    pub fn more(&self) -> bool {
        self.more
    }

    /// The row the cursor rests on, if any
    pub fn selected(&self) -> Option<&Suggestion> {
        if !self.visible {
            return None;
        }
        self.cursor.and_then(|index| self.suggestions.get(index))
    }

    /// The row a confirm would select: the cursor row, or the first row when
    /// the cursor is resting and the panel has content.
    pub fn confirm_target(&self) -> Option<&Suggestion> {
        if !self.visible {
            return None;
        }
        match self.cursor {
            Some(index) => self.suggestions.get(index),
            None => self.suggestions.first(),
        }
    }

    // ========== Results ==========

    /// Install a fresh result list. An empty list closes the panel instead.
    pub fn show_results(&mut self, suggestions: Vec<Suggestion>, more: bool) {
        if suggestions.is_empty() {
            self.dismiss();
            return;
        }
        self.suggestions = suggestions;
        self.visible = true;
        self.cursor = None;
        self.view_offset = 0;
        self.more = more;
    }

    /// Close the panel and discard list, cursor and scroll position.
    /// Field values are never touched from here.
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.suggestions.clear();
        self.cursor = None;
        self.view_offset = 0;
        self.more = false;
    }

    // ========== Cursor ==========

    /// Move the highlight down one row. Stops at the last row, no wraparound.
    pub fn select_next(&mut self) {
        if !self.visible || self.suggestions.is_empty() {
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(index) => (index + 1).min(self.suggestions.len() - 1),
            None => 0,
        });
        self.scroll_cursor_into_view();
    }

    /// Move the highlight up one row. Up from the first row returns to the
    /// resting position, never to the bottom.
    pub fn select_previous(&mut self) {
        if !self.visible || self.suggestions.is_empty() {
            return;
        }
        self.cursor = match self.cursor {
            Some(0) | None => None,
            Some(index) => Some(index - 1),
        };
        self.scroll_cursor_into_view();
    }

    /// Point the cursor at a specific row (pointer hover).
    pub fn set_cursor(&mut self, cursor: Option<usize>) {
        if self.suggestions.is_empty() {
            self.cursor = None;
            return;
        }
        self.cursor = cursor.map(|index| index.min(self.suggestions.len() - 1));
        self.scroll_cursor_into_view();
    }

    fn scroll_cursor_into_view(&mut self) {
        let Some(cursor) = self.cursor else {
            self.view_offset = 0;
            return;
        };
        if cursor < self.view_offset {
            self.view_offset = cursor;
        } else if cursor >= self.view_offset + self.max_visible {
            self.view_offset = cursor + 1 - self.max_visible;
        }
    }

    // ========== Lookup scheduling ==========

    /// Remember `query` and restart the quiet-period timer.
    pub fn schedule_lookup(&mut self, query: &str, now: Instant) {
        self.pending_query = Some(query.to_string());
        self.debounce.schedule(now);
    }

    /// Drop the scheduled lookup without touching the panel.
    pub fn cancel_pending(&mut self) {
        self.pending_query = None;
        self.debounce.cancel();
    }

    pub fn has_pending_lookup(&self) -> bool {
        self.debounce.is_pending()
    }

    /// The query whose quiet period has elapsed, if any. At most one query
    /// can come due per window; taking it disarms the timer.
    pub fn take_due_query(&mut self, now: Instant) -> Option<String> {
        if self.debounce.fire(now) {
            self.pending_query.take()
        } else {
            None
        }
    }

    // ========== In-flight requests ==========

    /// Open a new request slot: cancels whatever was in flight and hands out
    /// the id and token to dispatch with. At most one request per instance is
    /// ever live.
    pub fn begin_request(&mut self) -> (u64, CancellationToken) {
        self.cancel_in_flight();
        self.next_request_id = self.next_request_id.wrapping_add(1);
        let cancel = CancellationToken::new();
        self.in_flight = Some(InFlight {
            request_id: self.next_request_id,
            cancel: cancel.clone(),
        });
        (self.next_request_id, cancel)
    }

    /// Cancel the live request, if any. The worker drops its reply and the
    /// reply gate below stops any copy already queued.
    pub fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.cancel.cancel();
        }
    }

    /// Gate for incoming replies: the id must match the live request and its
    /// token must still be uncancelled. Anything else is stale.
    pub fn accepts_reply(&self, request_id: u64) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|in_flight| {
                in_flight.request_id == request_id && !in_flight.cancel.is_cancelled()
            })
    }

    /// Close the request slot after its reply was applied.
    pub fn finish_request(&mut self) {
        self.in_flight = None;
    }

    pub fn has_request_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
