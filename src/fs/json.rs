//! JSON file reading with schema validation
//!
//! Deserialization failures are reported with the offending path.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::{PriorAuthError, Result};

/// Read and deserialize a JSON file.
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Returns
/// The deserialized value
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file is not valid JSON or does not match the expected schema
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PriorAuthError::FileNotFound(path.display().to_string())
        } else {
            PriorAuthError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        PriorAuthError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}
