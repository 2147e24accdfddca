//! Error types for DOM wiring
//!
//! JS exceptions arrive as opaque `JsValue`s; they are flattened to strings
//! here so errors stay `Clone + PartialEq` like the rest of the crate.

use wasm_bindgen::{JsCast, JsValue};

/// Errors that can occur while binding widgets to the page
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomError {
    /// No window object (not running in a browser)
    #[error("window is not available")]
    NoWindow,

    /// No document object
    #[error("document is not available")]
    NoDocument,

    /// `querySelector` rejected the selector
    #[error("query '{selector}' failed: {reason}")]
    QueryFailed { selector: String, reason: String },

    /// Element creation failed
    #[error("failed to create <{tag}>: {reason}")]
    CreateFailed { tag: String, reason: String },

    /// Element was not of the expected type
    #[error("element matching '{selector}' is not {expected}")]
    WrongElementType {
        selector: String,
        expected: &'static str,
    },

    /// `addEventListener` failed
    #[error("failed to attach '{event}' listener: {reason}")]
    ListenerFailed { event: String, reason: String },

    /// Any other DOM call that threw
    #[error("{operation} failed: {reason}")]
    OperationFailed {
        operation: &'static str,
        reason: String,
    },
}

impl DomError {
    pub fn query_failed(selector: &str, error: &JsValue) -> Self {
        Self::QueryFailed {
            selector: selector.to_string(),
            reason: describe_js(error),
        }
    }

    pub fn operation_failed(operation: &'static str, error: &JsValue) -> Self {
        Self::OperationFailed {
            operation,
            reason: describe_js(error),
        }
    }
}

/// Result type alias for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// Human-readable description of a thrown JS value.
#[must_use]
pub fn describe_js(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return format!(
            "{}: {}",
            String::from(error.name()),
            String::from(error.message())
        );
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
