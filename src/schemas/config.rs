//! Config schema - Runtime settings for priorauth

use serde::{Deserialize, Serialize};

/// Main configuration for priorauth
///
/// The dependency rule table is compiled in and intentionally absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Delay before the notification channel acknowledges a request
    #[serde(default = "default_ack_delay_ms")]
    pub ack_delay_ms: u64,

    /// Emit JSON instead of text from CLI commands
    #[serde(default)]
    pub json: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_ack_delay_ms() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: default_schema_version(),
            ack_delay_ms: default_ack_delay_ms(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.ack_delay_ms, 100);
        assert!(!config.json);
    }

    #[test]
    fn test_config_partial_json() {
        let json = r#"{"ack_delay_ms": 5}"#;
        let parsed: Config = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.ack_delay_ms, 5);
        // Other fields should have defaults
        assert_eq!(parsed.schema_version, 1);
        assert!(!parsed.json);
    }

    #[test]
    fn test_config_empty_object_is_default() {
        let parsed: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, Config::default());
    }
}
