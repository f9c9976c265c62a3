//! CLI command implementations

pub mod check;
pub mod items;
pub mod rules;
pub mod session;

use serde::Serialize;

use crate::errors::{PriorAuthError, Result};

/// Pretty-print a value as JSON
pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| PriorAuthError::InvalidJson(e.to_string()))
}
