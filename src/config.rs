//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Lead submission endpoint
    pub lead_endpoint: Option<String>,
    /// Minimum swipe travel (device-independent pixels) to trigger navigation
    pub swipe_threshold_px: Option<f32>,
    /// Wheel cooldown between accepted transitions, in milliseconds
    pub wheel_cooldown_ms: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "aquaform", "aquaform-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
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

    /// Gesture thresholds with configured overrides applied
    pub fn gesture_config(&self) -> crate::state::GestureConfig {
        let defaults = crate::state::GestureConfig::default();
        crate::state::GestureConfig {
            swipe_threshold: self.swipe_threshold_px.unwrap_or(defaults.swipe_threshold),
            wheel_cooldown: self
                .wheel_cooldown_ms
                .map(std::time::Duration::from_millis)
                .unwrap_or(defaults.wheel_cooldown),
        }
    }
}
