//! List Configuration
//!
//! Every field has a default, so a partial object deserializes cleanly.

use serde::{Deserialize, Serialize};

/// Name of the persisted entry unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "items";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Key of the single persisted entry
    pub storage_key: String,
    /// Max log level name (error, warn, info, debug, trace, off)
    pub log_level: String,
    pub messages: Messages,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: "info".to_string(),
            messages: Messages::default(),
        }
    }
}

impl ListConfig {
    /// Parsed log level, falling back to `Info` on unknown names
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Text shown in alert and confirmation dialogs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub empty_input: String,
    pub duplicate_item: String,
    pub confirm_remove: String,
    pub confirm_clear: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            empty_input: "Please add an item".to_string(),
            duplicate_item: "That item already exists!".to_string(),
            confirm_remove: "Are you sure?".to_string(),
            confirm_clear: "Clear all items?".to_string(),
        }
    }
}
