//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PortalConfig {
    /// Backend API base URL (overridden by `PORTAL_API_URL`)
    pub api_base_url: Option<String>,
}

impl PortalConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "eduportal", "eduportal-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: PortalConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PortalConfig::default();
        assert!(config.api_base_url.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = PortalConfig {
            api_base_url: Some("http://localhost:3000".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: PortalConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.api_base_url, Some("http://localhost:3000".to_string()));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: PortalConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.api_base_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"api_base_url": "http://localhost:3000", "unknown_field": "value"}"#;
        let parsed: PortalConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.api_base_url, Some("http://localhost:3000".to_string()));
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = PortalConfig::load();
        assert!(result.is_ok());
    }
}
