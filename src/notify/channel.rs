//! Notification channel contract and implementations
//!
//! Issuing a request hands an `InformationRequest` to the channel and returns
//! immediately. Acknowledgements come back later on a separate receiver and
//! carry no authority over tracker or completion state.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::errors::{PriorAuthError, Result};
use crate::schemas::Item;

/// Outbound request for supporting information about one item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InformationRequest {
    pub item_id: &'static str,
    pub label: &'static str,
    pub requested_at: DateTime<Utc>,
}

impl InformationRequest {
    pub fn for_item(item: &'static Item) -> Self {
        InformationRequest {
            item_id: item.id,
            label: item.label,
            requested_at: Utc::now(),
        }
    }
}

/// Acknowledgement delivered by the channel once a request went out
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Acknowledgement {
    pub item_id: &'static str,
    pub label: &'static str,
    pub acknowledged_at: DateTime<Utc>,
}

impl Acknowledgement {
    pub fn for_request(request: &InformationRequest) -> Self {
        Acknowledgement {
            item_id: request.item_id,
            label: request.label,
            acknowledged_at: Utc::now(),
        }
    }

    /// User-facing confirmation text
    pub fn message(&self) -> String {
        format!("Request sent for {}", self.label)
    }
}

impl std::fmt::Display for Acknowledgement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "request for item {} acknowledged", self.item_id)
    }
}

/// Receiving end for acknowledgements
pub type AckReceiver = mpsc::UnboundedReceiver<Acknowledgement>;

/// External collaborator that carries information requests.
///
/// `notify` must not block: implementations hand the work off and return.
pub trait NotificationChannel: Send + Sync {
    fn notify(&self, request: InformationRequest);
}

/// Channel that acknowledges each request on a tokio task after a fixed delay
pub struct TokioChannel {
    handle: Handle,
    delay: Duration,
    acks: mpsc::UnboundedSender<Acknowledgement>,
}

impl TokioChannel {
    pub fn new(handle: Handle, delay: Duration) -> (Self, AckReceiver) {
        let (acks, rx) = mpsc::unbounded_channel();
        (TokioChannel { handle, delay, acks }, rx)
    }

    /// Build a channel on the runtime the caller is running in.
    ///
    /// # Errors
    /// * `Wrapped` - If called outside a tokio runtime
    pub fn from_current(delay: Duration) -> Result<(Self, AckReceiver)> {
        let handle = Handle::try_current()
            .map_err(|e| PriorAuthError::wrap(e, "Notification channel needs a tokio runtime"))?;
        Ok(Self::new(handle, delay))
    }
}

impl NotificationChannel for TokioChannel {
    fn notify(&self, request: InformationRequest) {
        let delay = self.delay;
        let acks = self.acks.clone();
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            let ack = Acknowledgement::for_request(&request);
            tracing::debug!(item = ack.item_id, "delivering acknowledgement");
            if acks.send(ack).is_err() {
                tracing::debug!(item = request.item_id, "acknowledgement receiver closed");
            }
        });
    }
}

/// Channel that records requests in memory and never acknowledges them.
///
/// Backs `--dry-run` sessions; clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingChannel {
    sent: Arc<Mutex<Vec<InformationRequest>>>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests seen so far, oldest first
    pub fn sent(&self) -> Vec<InformationRequest> {
        match self.sent.lock() {
            Ok(sent) => sent.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl NotificationChannel for RecordingChannel {
    fn notify(&self, request: InformationRequest) {
        tracing::info!(item = request.item_id, "[DRY RUN] would send information request");
        match self.sent.lock() {
            Ok(mut sent) => sent.push(request),
            Err(poisoned) => poisoned.into_inner().push(request),
        }
    }
}
