//! Priorauth - Prior authorization checklist tracking
//!
//! This library provides:
//! - The fixed registry of trackable items
//! - A completion store and a request tracker with single mutation entry points
//! - The dependency validation engine and progress verdict
//! - A notification channel contract for outbound information requests
//! - A dashboard facade tying the above together for front ends

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod notify;
pub mod registry;
pub mod schemas;
pub mod state;

// Re-export commonly used types
pub use dashboard::{Dashboard, DashboardState};
pub use domain::{validate, ValidationReport, Verdict, Violation};
pub use errors::{PriorAuthError, Result};
pub use schemas::{Category, Config, Item};
pub use state::{CompletionSnapshot, CompletionStore, RequestTracker};
