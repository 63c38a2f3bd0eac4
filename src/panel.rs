//! Text operations panel
//!
//! Owns the draft text and the list of identifiers returned by successful
//! submissions, and drives the two backend operations:
//!
//! - [`TextOperations::add_text`]: submit the draft
//! - [`TextOperations::fetch_text`]: retrieve text for an identifier
//!
//! Each operation is split in two halves. The dispatch half runs on the UI
//! thread: it validates, raises a loading notification and spawns a task that
//! awaits the backend. When the task finishes it sends a [`Settled`] message
//! back over a channel; the UI loop passes it to [`TextOperations::settle`],
//! which is the only place state changes after a call. Calls are never
//! cancelled or retried, and concurrent calls settle in whatever order they
//! finish.

use crate::client::{ClientError, OperationResult, SharedClient};
use crate::notify::{Notifier, ToastId};
use tokio::sync::mpsc;

pub const EMPTY_DRAFT_WARNING: &str = "Please enter text first";
const ADDING_MESSAGE: &str = "Adding text";
const GETTING_MESSAGE: &str = "Getting text";
const MISSING_ID_MESSAGE: &str = "Backend reported success without an identifier";

/// A finished backend call waiting to be applied on the UI thread
#[derive(Debug)]
pub enum Settled {
    Added {
        toast: ToastId,
        result: Result<OperationResult, ClientError>,
    },
    Fetched {
        toast: ToastId,
        id: String,
        result: Result<OperationResult, ClientError>,
    },
}

/// What a settled call amounted to, for callers that need more than toasts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added { id: String },
    Fetched { id: String, text: String },
    Failed { message: String },
}

pub struct TextOperations {
    client: SharedClient,
    draft: String,
    submitted_ids: Vec<String>,
    settled_tx: mpsc::UnboundedSender<Settled>,
    in_flight: usize,
}

impl TextOperations {
    /// Create a panel bound to `client`
    ///
    /// The returned receiver yields every call that finishes; feed each one
    /// back into [`settle`](Self::settle).
    pub fn new(client: SharedClient) -> (Self, mpsc::UnboundedReceiver<Settled>) {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        let panel = Self {
            client,
            draft: String::new(),
            submitted_ids: Vec::new(),
            settled_tx,
            in_flight: 0,
        };
        (panel, settled_rx)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn draft_mut(&mut self) -> &mut String {
        &mut self.draft
    }

    /// Identifiers in submission order
    pub fn submitted_ids(&self) -> &[String] {
        &self.submitted_ids
    }

    /// Calls dispatched but not yet settled
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn backend_description(&self) -> String {
        self.client.describe()
    }

    /// Submit the draft text
    ///
    /// Returns `false` without touching the network when the draft is empty.
    pub fn add_text(&mut self, notifier: &mut impl Notifier) -> bool {
        if self.draft.is_empty() {
            notifier.warning(EMPTY_DRAFT_WARNING);
            return false;
        }

        let toast = notifier.loading(ADDING_MESSAGE);
        let client = self.client.clone();
        let text = self.draft.clone();
        let tx = self.settled_tx.clone();
        tracing::debug!(%toast, len = text.len(), "Dispatching add text");

        self.in_flight += 1;
        tokio::spawn(async move {
            let result = client.post_text(&text).await;
            // Receiver gone means the UI is shutting down
            let _ = tx.send(Settled::Added { toast, result });
        });
        true
    }

    /// Retrieve the text stored under `id`
    ///
    /// `id` is not checked against the submitted list, and nothing is cached:
    /// every call goes to the backend.
    pub fn fetch_text(&mut self, id: &str, notifier: &mut impl Notifier) {
        let toast = notifier.loading(GETTING_MESSAGE);
        let client = self.client.clone();
        let id = id.to_string();
        let tx = self.settled_tx.clone();
        tracing::debug!(%toast, %id, "Dispatching fetch text");

        self.in_flight += 1;
        tokio::spawn(async move {
            let result = client.get_text(&id).await;
            let _ = tx.send(Settled::Fetched { toast, id, result });
        });
    }

    /// Apply a finished call to panel state and notifications
    pub fn settle(&mut self, settled: Settled, notifier: &mut impl Notifier) -> Outcome {
        self.in_flight = self.in_flight.saturating_sub(1);

        match settled {
            Settled::Added { toast, result } => {
                notifier.dismiss(toast);
                match result {
                    Ok(result) if result.success => match result.id() {
                        Some(id) => {
                            let id = id.to_string();
                            tracing::info!(%id, "Text added");
                            self.submitted_ids.push(id.clone());
                            self.draft.clear();
                            notifier.success(&result.message);
                            Outcome::Added { id }
                        }
                        None => fail(notifier, MISSING_ID_MESSAGE.to_string()),
                    },
                    Ok(result) => fail(notifier, result.message),
                    Err(e) => fail(notifier, e.to_string()),
                }
            }
            Settled::Fetched { toast, id, result } => {
                notifier.dismiss(toast);
                match result {
                    Ok(result) if result.success => {
                        let text = result.data.map(|record| record.text).unwrap_or_default();
                        tracing::info!(%id, "Text retrieved");
                        notifier.success(&format!("Text for ID {}: {}", id, text));
                        Outcome::Fetched { id, text }
                    }
                    Ok(result) => fail(notifier, result.message),
                    Err(e) => fail(notifier, e.to_string()),
                }
            }
        }
    }
}

fn fail(notifier: &mut impl Notifier, message: String) -> Outcome {
    tracing::warn!("Text operation failed: {}", message);
    notifier.error(&message);
    Outcome::Failed { message }
}
