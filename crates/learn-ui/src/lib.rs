//! WASM widgets for the learn page
//!
//! Attaches three independent behaviours to an existing page, discovering
//! their elements by `data-*` markers:
//!
//! - progress tracker: `data-guide` checkboxes persisted to `localStorage`
//! - copy button: `data-copy` with async-clipboard and legacy fallback
//! - slideshow: `.slideshow` carousel with prev/next and generated dots
//!
//! ## Module Structure
//! - `components`: the three widgets
//! - `clipboard`: browser clipboard backends and the feature probe
//! - `storage`: `localStorage` progress store
//! - `config`: page configuration override
//! - `logging`: `tracing` subscriber writing to the console
//! - `dom`: marker selectors and DOM helpers
//! - `error`: error types

#![forbid(unsafe_code)]

pub mod clipboard;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod storage;

use std::rc::Rc;

use learn_core::LearnConfig;

pub use components::{CopyWidget, ProgressWidget, SlideshowWidget};
pub use error::{DomError, DomResult};

/// Widgets attached to the page. Each is `None` when its markup is absent
/// or could not be wired.
pub struct LearnPage {
    pub progress: Option<Rc<ProgressWidget>>,
    pub copy: Option<Rc<CopyWidget>>,
    pub slideshow: Option<Rc<SlideshowWidget>>,
}

/// Attach every widget to the current document.
///
/// A widget that fails to wire is logged and skipped; the others still
/// attach.
///
/// # Errors
///
/// Returns an error only when there is no window or document.
pub fn start(config: &LearnConfig) -> DomResult<LearnPage> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    let progress =
        ProgressWidget::attach(&window, dom::Scope::Document(&document), config).map(Some);
    let copy = CopyWidget::attach(&window, &document, config);
    let slideshow = SlideshowWidget::attach(&document, config);

    Ok(LearnPage {
        progress: skip_failed("progress tracker", progress),
        copy: skip_failed("copy button", copy),
        slideshow: skip_failed("slideshow", slideshow),
    })
}

fn skip_failed<T>(widget: &str, result: DomResult<Option<T>>) -> Option<T> {
    result.unwrap_or_else(|e| {
        tracing::error!("Failed to attach {}: {}", widget, e);
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_failed_keeps_success() {
        assert_eq!(skip_failed("slideshow", Ok(Some(3))), Some(3));
        assert_eq!(skip_failed::<u8>("slideshow", Ok(None)), None);
    }

    #[test]
    fn test_skip_failed_swallows_error() {
        let result: DomResult<Option<u8>> = Err(DomError::NoDocument);
        assert_eq!(skip_failed("copy button", result), None);
    }
}
