//! DBDESK Settings System
//!
//! Provides application settings with persistence, including:
//! - View settings (where the last active section is remembered)
//! - Logging settings (filters and outputs)
//! - The durable key-value store backing remembered state

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod settings_file;
mod store;

pub use settings_file::*;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DbdeskSettings {
    pub view: ViewSettings,
    pub logging: LoggingSettings,
}

impl DbdeskSettings {
    /// Load settings from `path`, falling back to defaults if the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        serde_json::from_str(&content).with_context(|| "Failed to parse settings JSON")
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!("Saved settings to {:?}", path);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Storage key under which the last active section is remembered
    pub selection_key: String,
    /// Recompute the toolbar's active flags on every registration instead of
    /// keeping the section that was active when the view was opened
    pub reactive_trigger_flags: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            selection_key: "contentview_previous".to_string(),
            reactive_trigger_flags: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter used when RUST_LOG is not set
    pub default_filter: String,
    pub console_logs: bool,
    pub json_logs: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            default_filter: "info,dbdesk_core=debug,dbdesk_settings=info,dbdesk_view=debug"
                .to_string(),
            console_logs: true,
            json_logs: true,
        }
    }
}
