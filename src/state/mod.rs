//! Mutable session state: item completion and issued requests

mod completion;
mod requests;

pub use completion::{CompletionSnapshot, CompletionStore};
pub use requests::{RequestOutcome, RequestTracker};
