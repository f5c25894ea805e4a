// SPDX-License-Identifier: MIT

//! Configuration management for lenscoach

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// AI engine configuration
    pub ai_engine: EngineConfig,

    /// Default user id for CLI sessions
    #[serde(default = "default_user")]
    pub default_user: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EngineConfig {
    pub url: String,
    pub models: ModelConfig,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_retries")]
    pub retries: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ModelConfig {
    #[serde(default = "default_text_model")]
    pub text: String,
}

// Default value functions
fn default_timeout() -> u64 {
    120
}
fn default_retries() -> u32 {
    3
}
fn default_text_model() -> String {
    "tinyllama".to_string()
}
fn default_user() -> String {
    "demo_user".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ai_engine: EngineConfig {
                url: "http://localhost:11434".to_string(),
                models: ModelConfig {
                    text: default_text_model(),
                },
                timeout_secs: default_timeout(),
                retries: default_retries(),
            },
            default_user: default_user(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&content).map_err(|e| {
                crate::CoachError::Config(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            tracing::info!("Config file not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = AppConfig::load(Path::new("/nonexistent/config.json")).unwrap();
        assert_eq!(config.ai_engine.url, "http://localhost:11434");
        assert_eq!(config.ai_engine.models.text, "tinyllama");
        assert_eq!(config.default_user, "demo_user");
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = AppConfig::default();
        config.ai_engine.models.text = "llama3.2:3b".to_string();
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.ai_engine.models.text, "llama3.2:3b");
        assert_eq!(loaded.ai_engine.retries, 3);
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, crate::CoachError::Config(_)));
    }
}
