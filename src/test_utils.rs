#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::Sender;
    use std::time::{Duration, Instant};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::UnboundedReceiver;

    use crate::app::App;
    use crate::config::Config;
    use crate::lookup::{
        LookupError, LookupHandle, LookupPage, LookupReply, LookupRequest, Suggestion,
    };

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// App over the demo form, with the worker replaced by bare channels so
    /// tests observe dispatched requests and inject replies deterministically.
    pub fn demo_app() -> (App, UnboundedReceiver<LookupRequest>, Sender<LookupReply>) {
        app_with_config(&Config::demo())
    }

    pub fn app_with_config(
        config: &Config,
    ) -> (App, UnboundedReceiver<LookupRequest>, Sender<LookupReply>) {
        let (handle, request_rx, reply_tx) = LookupHandle::test_pair();
        (App::new(config, handle), request_rx, reply_tx)
    }

    /// Type a string into the focused field, one key press at a time
    pub fn type_str(app: &mut App, text: &str, now: Instant) {
        for ch in text.chars() {
            app.handle_key_event_at(key(KeyCode::Char(ch)), now);
        }
    }

    pub fn page(rows: &[(i64, &str)], more: bool) -> LookupPage {
        LookupPage {
            suggestions: rows
                .iter()
                .map(|(id, text)| Suggestion::new(*id, *text))
                .collect(),
            more,
        }
    }

    /// A successful reply matching `request`
    pub fn reply_ok(request: &LookupRequest, page: LookupPage) -> LookupReply {
        LookupReply {
            picker: request.picker,
            request_id: request.request_id,
            query: request.query.clone(),
            outcome: Ok(page),
        }
    }

    /// A failed reply matching `request`
    pub fn reply_err(request: &LookupRequest, error: LookupError) -> LookupReply {
        LookupReply {
            picker: request.picker,
            request_id: request.request_id,
            query: request.query.clone(),
            outcome: Err(error),
        }
    }

    /// Tick the app with the clock advanced past the debounce window, then
    /// hand back the request it dispatched.
    pub fn dispatch_after_window(
        app: &mut App,
        request_rx: &mut UnboundedReceiver<LookupRequest>,
        now: Instant,
    ) -> LookupRequest {
        app.on_tick(now + Duration::from_millis(300));
        request_rx.try_recv().expect("expected a lookup request")
    }
}
