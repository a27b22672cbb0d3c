//! Lookup worker thread
//!
//! Runs suggestion lookups in a background thread so the UI never blocks on
//! the network. The UI dispatches requests over a channel; each request
//! carries a cancellation token that is raced against the fetch, so a
//! superseded lookup aborts instead of delivering a stale page.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use super::client::LookupBackend;
use super::types::{EndpointKind, LookupError, LookupPage};

/// The panel only ever asks for the first page; `pagination.more` is a hint
/// to refine the query, not an invitation to walk pages.
const FIRST_PAGE: u32 = 1;

/// One lookup dispatched by a picker instance
#[derive(Debug)]
pub struct LookupRequest {
    /// Index of the picker binding this lookup belongs to
    pub picker: usize,
    /// Per-picker id used to filter stale replies
    pub request_id: u64,
    pub kind: EndpointKind,
    pub query: String,
    /// Cancelling this token makes the worker drop the lookup silently
    pub cancel: CancellationToken,
}

/// Outcome reported back to the UI thread
#[derive(Debug)]
pub struct LookupReply {
    pub picker: usize,
    pub request_id: u64,
    pub query: String,
    pub outcome: Result<LookupPage, LookupError>,
}

/// Spawn the lookup worker thread
///
/// The thread owns a current-thread tokio runtime. Each request is spawned as
/// its own task so a slow lookup for one picker never delays another's.
/// Returns the sender the UI dispatches requests on; the worker exits when
/// that sender is dropped.
pub fn spawn_worker(
    backend: Arc<dyn LookupBackend>,
    reply_tx: Sender<LookupReply>,
) -> UnboundedSender<LookupRequest> {
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                log::warn!("lookup worker failed to start: {}", err);
                return;
            }
        };

        runtime.block_on(worker_loop(backend, request_rx, reply_tx));
    });

    request_tx
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop(
    backend: Arc<dyn LookupBackend>,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    reply_tx: Sender<LookupReply>,
) {
    while let Some(request) = request_rx.recv().await {
        if request.cancel.is_cancelled() {
            log::debug!("lookup {} cancelled before dispatch", request.request_id);
            continue;
        }

        let backend = Arc::clone(&backend);
        let reply_tx = reply_tx.clone();
        tokio::spawn(async move {
            run_lookup(backend, request, reply_tx).await;
        });
    }

    log::debug!("lookup worker shutting down");
}

/// Execute one lookup, racing the fetch against its cancellation token.
///
/// A cancelled lookup produces no reply at all: cancellation is not an error
/// and must not disturb the panel the newer request will fill.
async fn run_lookup(
    backend: Arc<dyn LookupBackend>,
    request: LookupRequest,
    reply_tx: Sender<LookupReply>,
) {
    let LookupRequest {
        picker,
        request_id,
        kind,
        query,
        cancel,
    } = request;

    let outcome = tokio::select! {
        _ = cancel.cancelled() => {
            log::debug!("lookup {} for picker {} cancelled in flight", request_id, picker);
            return;
        }
        outcome = backend.fetch(kind, &query, FIRST_PAGE) => outcome,
    };

    // The token may have been cancelled between fetch completion and here
    if cancel.is_cancelled() {
        log::debug!("lookup {} for picker {} cancelled after completion", request_id, picker);
        return;
    }

    let reply = LookupReply {
        picker,
        request_id,
        query,
        outcome,
    };
    if reply_tx.send(reply).is_err() {
        // UI thread is gone, nothing left to notify
    }
}

/// UI-side handle over the worker's channels
pub struct LookupHandle {
    request_tx: UnboundedSender<LookupRequest>,
    reply_rx: std::sync::mpsc::Receiver<LookupReply>,
}

impl LookupHandle {
    /// Start the worker thread over the given backend.
    pub fn spawn(backend: Arc<dyn LookupBackend>) -> Self {
        let (reply_tx, reply_rx) = std::sync::mpsc::channel();
        let request_tx = spawn_worker(backend, reply_tx);
        Self {
            request_tx,
            reply_rx,
        }
    }

    pub fn dispatch(&self, request: LookupRequest) {
        if self.request_tx.send(request).is_err() {
            log::warn!("lookup worker is gone; dropping request");
        }
    }

    /// Next queued reply, if any. Drained from the UI tick without blocking.
    pub fn try_reply(&self) -> Option<LookupReply> {
        self.reply_rx.try_recv().ok()
    }

    /// Handle wired to bare channels instead of a worker thread, so tests can
    /// observe dispatched requests and inject replies deterministically.
    #[cfg(test)]
    pub fn test_pair() -> (
        Self,
        UnboundedReceiver<LookupRequest>,
        Sender<LookupReply>,
    ) {
        let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
        let (reply_tx, reply_rx) = std::sync::mpsc::channel();
        (
            Self {
                request_tx,
                reply_rx,
            },
            request_rx,
            reply_tx,
        )
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
