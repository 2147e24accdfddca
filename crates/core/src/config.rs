//! Page-level configuration for the learn widgets.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Local-storage key the progress record lives under.
pub const DEFAULT_STORAGE_KEY: &str = "sc-learning-progress";

/// Delay before the copy status text is cleared.
pub const DEFAULT_STATUS_CLEAR_MS: u32 = 2000;

/// Configuration shared by all three widgets.
///
/// Every field has a default, so a partial object (or `{}`) deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnConfig {
    /// Storage key for the persisted progress record
    pub storage_key: String,
    /// Milliseconds before the copy status is cleared
    pub status_clear_ms: u32,
    /// Status text after a successful copy
    pub copied_message: String,
    /// Status text after every clipboard backend failed
    pub failed_message: String,
    /// CSS class given to generated slide dots
    pub dot_class: String,
    /// CSS class marking the dot of the current slide
    pub active_class: String,
    /// Prefix of each dot's aria-label, followed by the 1-based step
    pub dot_label_prefix: String,
    /// Filter directive for the log subscriber
    pub log_level: String,
}

impl Default for LearnConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            status_clear_ms: DEFAULT_STATUS_CLEAR_MS,
            copied_message: "Copied.".to_string(),
            failed_message: "Copy failed.".to_string(),
            dot_class: "slide-dot".to_string(),
            active_class: "active".to_string(),
            dot_label_prefix: "Go to step".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl LearnConfig {
    /// Parse a configuration object from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the text is not a JSON object of the
    /// expected shape, or if the storage key is empty.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str::<Self>(raw)
            .map_err(|e| Error::invalid_config(e.to_string()))
            .and_then(Self::validated)
    }

    /// Reject configurations the widgets cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for an empty storage key.
    pub fn validated(self) -> Result<Self> {
        if self.storage_key.trim().is_empty() {
            return Err(Error::invalid_config("storage_key must not be empty"));
        }
        Ok(self)
    }

    /// Accessible label for the dot of slide `index` (0-based).
    #[must_use]
    pub fn dot_label(&self, index: usize) -> String {
        format!("{} {}", self.dot_label_prefix, index.saturating_add(1))
    }
}
