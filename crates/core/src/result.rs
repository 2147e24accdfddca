//! Result type definition and extension traits.
//!
//! Widgets never surface errors to the page. These combinators turn a failed
//! operation into a logged fallback instead of an unwrap.

use crate::error::Error;

/// The standard Result type for learn widget operations.
///
/// # Examples
///
/// ```
/// use learn_core::{Error, Result, ResultExt};
///
/// fn read() -> Result<u32> {
///     Err(Error::json_parse_failed("expected value"))
/// }
///
/// assert_eq!(read().or_default_logged(0), 0);
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait providing logging fallbacks for Results.
pub trait ResultExt<T> {
    /// Convert a Result to an Option, logging the error if present.
    fn into_option_logged(self) -> Option<T>;

    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Operation failed: {}", e);
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Operation failed, using default: {}", e);
                default
            }
        }
    }
}

/// Extension trait for Option types.
pub trait OptionExt<T> {
    /// Tap into None without consuming the Option.
    fn tap_none<F: FnOnce()>(self, f: F) -> Self;
}

impl<T> OptionExt<T> for Option<T> {
    fn tap_none<F: FnOnce()>(self, f: F) -> Self {
        if self.is_none() {
            f();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_into_option_ok() {
        let result: Result<i32> = Ok(42);
        assert_eq!(result.into_option_logged(), Some(42));
    }

    #[test]
    fn test_result_into_option_err() {
        let result: Result<i32> = Err(Error::CopyFailed);
        assert_eq!(result.into_option_logged(), None);
    }

    #[test]
    fn test_result_or_default_logged_err() {
        let result: Result<i32> = Err(Error::json_parse_failed("eof"));
        assert_eq!(result.or_default_logged(99), 99);
    }

    #[test]
    fn test_tap_none() {
        let mut called = false;
        let opt: Option<i32> = None;
        let _ = opt.tap_none(|| called = true);
        assert!(called);
    }
}
