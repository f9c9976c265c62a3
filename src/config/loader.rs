//! Configuration loading with defaults

use std::path::Path;

use crate::errors::{PriorAuthError, Result};
use crate::fs;
use crate::schemas::Config;

const SUPPORTED_SCHEMA_VERSION: u32 = 1;

/// Load configuration, falling back to defaults.
///
/// An explicit path must exist. Without one, `priorauth.json` in `cwd` is used
/// when present, and defaults otherwise.
///
/// # Arguments
/// * `explicit` - Path given on the command line, if any
/// * `cwd` - Directory searched for the default config file
///
/// # Returns
/// The resolved configuration
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "loading config");
        return check_schema_version(fs::read_json(path)?);
    }

    let path = fs::get_config_path(cwd);
    if !path.exists() {
        tracing::debug!("no config file, using defaults");
        return Ok(Config::default());
    }
    tracing::debug!(path = %path.display(), "loading config");
    check_schema_version(fs::read_json(&path)?)
}

fn check_schema_version(config: Config) -> Result<Config> {
    if config.schema_version != SUPPORTED_SCHEMA_VERSION {
        return Err(PriorAuthError::ConfigError(format!(
            "unsupported schema_version {} (expected {})",
            config.schema_version, SUPPORTED_SCHEMA_VERSION
        )));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults() {
        let temp = TempDir::new().unwrap();

        let config = load_config(None, temp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_from_cwd() {
        let temp = TempDir::new().unwrap();
        std_fs::write(temp.path().join("priorauth.json"), r#"{"ack_delay_ms": 250}"#).unwrap();

        let config = load_config(None, temp.path()).unwrap();
        assert_eq!(config.ack_delay_ms, 250);
        // Default for unspecified field
        assert!(!config.json);
    }

    #[test]
    fn test_load_config_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.json");
        std_fs::write(&path, r#"{"json": true, "ack_delay_ms": 0}"#).unwrap();

        let config = load_config(Some(&path), Path::new("/nonexistent")).unwrap();
        assert!(config.json);
        assert_eq!(config.ack_delay_ms, 0);
    }

    #[test]
    fn test_load_config_explicit_path_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.json");

        let err = load_config(Some(&path), temp.path()).unwrap_err();
        assert!(matches!(err, PriorAuthError::FileNotFound(_)));
    }

    #[test]
    fn test_load_config_rejects_future_schema() {
        let temp = TempDir::new().unwrap();
        std_fs::write(temp.path().join("priorauth.json"), r#"{"schema_version": 2}"#).unwrap();

        let err = load_config(None, temp.path()).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_load_config_invalid_file() {
        let temp = TempDir::new().unwrap();
        std_fs::write(temp.path().join("priorauth.json"), "{ nope").unwrap();

        let err = load_config(None, temp.path()).unwrap_err();
        assert!(matches!(err, PriorAuthError::InvalidJson(_)));
    }
}
