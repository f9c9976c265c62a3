//! File system utilities for priorauth
//!
//! Provides path resolution and JSON file reading.

mod json;
mod paths;

pub use json::read_json;
pub use paths::{get_config_path, resolve_cwd, CONFIG_FILE_NAME};
