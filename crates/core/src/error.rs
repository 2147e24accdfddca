//! Core error types for the learn page widgets.
//!
//! Every failure here is recoverable. Components swallow these at their
//! boundary (see [`crate::result::ResultExt`]) and degrade to an empty or
//! no-op state.

use thiserror::Error;

/// Core error type for learn widget operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Storage errors
    #[error("storage is not available: {reason}")]
    StorageUnavailable { reason: String },

    #[error("failed to read storage key '{key}': {reason}")]
    StorageReadFailed { key: String, reason: String },

    #[error("failed to write storage key '{key}': {reason}")]
    StorageWriteFailed { key: String, reason: String },

    // Parsing errors
    #[error("JSON parse error: {reason}")]
    JsonParseFailed { reason: String },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    // Clipboard errors
    #[error("clipboard backend '{backend}' is not available")]
    ClipboardUnavailable { backend: String },

    #[error("clipboard backend '{backend}' failed: {reason}")]
    ClipboardWriteFailed { backend: String, reason: String },

    #[error("no clipboard backend succeeded")]
    CopyFailed,

    // Slideshow errors
    #[error("slide index {index} out of range for {count} slides")]
    SlideOutOfRange { index: usize, count: usize },

    #[error("slideshow needs at least one slide")]
    NoSlides,
}

impl Error {
    /// Create a storage read error.
    pub fn storage_read_failed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::StorageReadFailed {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a storage write error.
    pub fn storage_write_failed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::StorageWriteFailed {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a JSON parse error.
    pub fn json_parse_failed(reason: impl Into<String>) -> Self {
        Self::JsonParseFailed {
            reason: reason.into(),
        }
    }

    /// Create an invalid config error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a clipboard write error.
    pub fn clipboard_write_failed(backend: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ClipboardWriteFailed {
            backend: backend.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::storage_read_failed("sc-learning-progress", "SecurityError");
        assert_eq!(
            err.to_string(),
            "failed to read storage key 'sc-learning-progress': SecurityError"
        );

        let err = Error::SlideOutOfRange { index: 7, count: 3 };
        assert_eq!(err.to_string(), "slide index 7 out of range for 3 slides");

        let err = Error::clipboard_write_failed("async", "NotAllowedError");
        assert_eq!(
            err.to_string(),
            "clipboard backend 'async' failed: NotAllowedError"
        );
    }
}
