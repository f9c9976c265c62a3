//! Authorization dashboard
//!
//! The single entry point a front end talks to: two mutations (`toggle`,
//! `request`) and two queries (`get_state`, `get_validation`). Derived values
//! are recomputed on every query.

use serde::Serialize;

use crate::domain::{self, ValidationReport};
use crate::errors::Result;
use crate::notify::NotificationChannel;
use crate::state::{CompletionSnapshot, CompletionStore, RequestOutcome, RequestTracker};

/// Point-in-time view of all mutable state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardState {
    pub snapshot: CompletionSnapshot,
    pub requested_ids: Vec<&'static str>,
}

/// Completion store and request tracker for one session
#[derive(Debug)]
pub struct Dashboard {
    store: CompletionStore,
    requests: RequestTracker,
}

impl Dashboard {
    pub fn new(channel: Box<dyn NotificationChannel>) -> Self {
        Dashboard {
            store: CompletionStore::new(),
            requests: RequestTracker::new(channel),
        }
    }

    /// Flip the done flag of an item, returning the new value
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        self.store.toggle(id)
    }

    /// Issue an information request for an item
    pub fn request(&mut self, id: &str) -> Result<RequestOutcome> {
        self.requests.request(id)
    }

    pub fn is_requested(&self, id: &str) -> bool {
        self.requests.is_requested(id)
    }

    pub fn get_state(&self) -> DashboardState {
        DashboardState {
            snapshot: self.store.snapshot(),
            requested_ids: self.requests.requested_ids(),
        }
    }

    pub fn get_validation(&self) -> ValidationReport {
        domain::report(&self.store.snapshot())
    }
}
