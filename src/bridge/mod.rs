//! The bridge: the only path from the UI to the backend.
//!
//! The backend runs on its own OS thread with a current-thread tokio
//! runtime; the UI talks to it exclusively through [`BridgeHandle::call`].
//! [`BridgeRequest`] is a closed enum — the allow-list of named operations.
//! There is no "invoke arbitrary operation" variant, so a compromised UI
//! cannot reach unapproved backend capability through this channel.
//!
//! Payloads cross the boundary as opaque JSON; errors cross as their display
//! string, unmodified. One request, one reply, no streaming.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::backend::Backend;
use crate::config::Credentials;

/// Channel depth between the UI and the backend thread
const REQUEST_QUEUE_DEPTH: usize = 32;

/// The fixed set of operations the UI may invoke
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum BridgeRequest {
    /// Recent messages from one Slack channel
    FetchMessages { channel_id: String },
    /// Unread emails, full records
    FetchEmails,
    /// Upcoming calendar events
    FetchCalendarEvents,
    /// Summarize arbitrary text
    Summarize { text: String },
}

impl BridgeRequest {
    /// Operation name as the UI-side contract spells it
    pub fn op_name(&self) -> &'static str {
        match self {
            BridgeRequest::FetchMessages { .. } => "fetchMessages",
            BridgeRequest::FetchEmails => "fetchEmails",
            BridgeRequest::FetchCalendarEvents => "fetchCalendarEvents",
            BridgeRequest::Summarize { .. } => "summarize",
        }
    }
}

/// Wire result: JSON payload on success, message string on failure
pub type BridgeResult = std::result::Result<serde_json::Value, String>;

struct Envelope {
    request: BridgeRequest,
    reply_tx: std::sync::mpsc::Sender<BridgeResult>,
}

/// UI-side handle to the backend. Cloneable; dropping the last clone closes
/// the request channel and shuts the backend thread down.
#[derive(Clone)]
pub struct BridgeHandle {
    request_tx: mpsc::Sender<Envelope>,
}

impl BridgeHandle {
    /// Dispatch one operation. Returns immediately with a receiver that
    /// yields exactly one result; the UI polls it with `try_recv` per tick,
    /// one-shot callers block on `recv`.
    pub fn call(&self, request: BridgeRequest) -> std::sync::mpsc::Receiver<BridgeResult> {
        let (reply_tx, reply_rx) = std::sync::mpsc::channel();

        if let Err(e) = self.request_tx.try_send(Envelope {
            request,
            reply_tx: reply_tx.clone(),
        }) {
            let _ = reply_tx.send(Err(format!("backend unavailable: {}", e)));
        }

        reply_rx
    }
}

/// Start the backend thread and return the UI-side handle.
///
/// The backend serves requests strictly sequentially: single-threaded
/// cooperative scheduling, no parallel provider calls, no cancellation.
pub fn start(credentials: Credentials) -> BridgeHandle {
    let (request_tx, mut request_rx) = mpsc::channel::<Envelope>(REQUEST_QUEUE_DEPTH);

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create backend runtime");

        rt.block_on(async move {
            let backend = Backend::new(&credentials);
            tracing::info!("backend thread started");

            while let Some(envelope) = request_rx.recv().await {
                tracing::debug!(op = envelope.request.op_name(), "handling request");
                let result = backend.dispatch(envelope.request).await;
                // The UI may have stopped waiting; a closed reply channel
                // is not an error on this side
                let _ = envelope.reply_tx.send(result);
            }

            tracing::info!("backend thread shutting down");
        });
    });

    BridgeHandle { request_tx }
}
