//! Header Configuration
//!
//! Read once at startup from local storage; anything missing falls back to defaults.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Local storage key holding the JSON config
pub const CONFIG_STORAGE_KEY: &str = "note-header.config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// How long the "Saved" confirmation stays up
    pub flash_duration_ms: u32,
    /// Minimum log level ("error" .. "trace")
    pub log_level: String,
    pub telemetry_enabled: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            flash_duration_ms: 1000,
            log_level: "info".to_string(),
            telemetry_enabled: true,
        }
    }
}

impl HeaderConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Load from local storage. Malformed JSON yields defaults plus the parse error.
    pub fn load() -> (Self, Option<String>) {
        let raw = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

        match raw {
            Some(raw) => match Self::from_json(&raw) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
            None => (Self::default(), None),
        }
    }
}

/// Config from context, or defaults when none was provided
pub fn use_header_config() -> HeaderConfig {
    use_context::<HeaderConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HeaderConfig::default();
        assert_eq!(config.flash_duration_ms, 1000);
        assert_eq!(config.log_level(), log::LevelFilter::Info);
        assert!(config.telemetry_enabled);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = HeaderConfig::from_json(r#"{"flash_duration_ms": 250}"#).unwrap();
        assert_eq!(config.flash_duration_ms, 250);
        assert_eq!(config.log_level, "info");
        assert!(config.telemetry_enabled);
    }

    #[test]
    fn test_log_level_parsing() {
        let config = HeaderConfig::from_json(r#"{"log_level": "debug"}"#).unwrap();
        assert_eq!(config.log_level(), log::LevelFilter::Debug);

        let bogus = HeaderConfig::from_json(r#"{"log_level": "loud"}"#).unwrap();
        assert_eq!(bogus.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(HeaderConfig::from_json("{not json").is_err());
    }
}
