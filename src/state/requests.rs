//! Request tracker
//!
//! Remembers which items have had an information request issued and makes
//! sure the notification channel hears about each item at most once.

use std::collections::HashSet;

use crate::errors::{PriorAuthError, Result};
use crate::notify::{InformationRequest, NotificationChannel};
use crate::registry::{self, ITEMS};

/// What a call to `RequestTracker::request` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// First request for the item; the channel was notified
    Issued,
    /// The item was already requested; nothing was sent
    AlreadyRequested,
}

/// Grow-only set of requested items plus the channel they are sent through
pub struct RequestTracker {
    requested: HashSet<&'static str>,
    channel: Box<dyn NotificationChannel>,
}

impl RequestTracker {
    pub fn new(channel: Box<dyn NotificationChannel>) -> Self {
        RequestTracker {
            requested: HashSet::new(),
            channel,
        }
    }

    /// Issue an information request for an item.
    ///
    /// Repeated calls for the same item succeed without notifying again.
    ///
    /// # Errors
    /// * `UnknownItem` - If the id is not registered
    /// * `NotRequestable` - If the item does not accept requests
    pub fn request(&mut self, id: &str) -> Result<RequestOutcome> {
        let item = registry::require_item(id).inspect_err(|_| {
            tracing::warn!(item = id, "rejected request for unknown item");
        })?;

        if !item.requestable {
            tracing::warn!(item = id, "rejected request for non-requestable item");
            return Err(PriorAuthError::NotRequestable(id.to_string()));
        }

        if !self.requested.insert(item.id) {
            tracing::debug!(item = id, "item already requested");
            return Ok(RequestOutcome::AlreadyRequested);
        }

        tracing::info!(item = id, label = item.label, "issuing information request");
        self.channel.notify(InformationRequest::for_item(item));
        Ok(RequestOutcome::Issued)
    }

    /// Whether a request has been issued for the item
    pub fn is_requested(&self, id: &str) -> bool {
        self.requested.contains(id)
    }

    /// Requested ids in registry order
    pub fn requested_ids(&self) -> Vec<&'static str> {
        ITEMS
            .iter()
            .map(|item| item.id)
            .filter(|id| self.requested.contains(id))
            .collect()
    }
}

impl std::fmt::Debug for RequestTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestTracker")
            .field("requested", &self.requested_ids())
            .finish_non_exhaustive()
    }
}
