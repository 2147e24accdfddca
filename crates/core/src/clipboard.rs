//! Clipboard capability and the ordered fallback chain.
//!
//! Backends are probed once by the shell and handed to [`CopyChain`] in
//! preference order. A copy tries each in turn and stops at the first
//! success.

use async_trait::async_trait;

use crate::error::Error;
use crate::result::Result;

/// One way of putting text on the system clipboard.
#[async_trait(?Send)]
pub trait Clipboard {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Write `text` to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment rejects or cannot perform the
    /// write.
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Result of a copy attempt, as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Copied)
    }
}

/// Clipboard backends in the order they should be tried.
#[derive(Default)]
pub struct CopyChain {
    backends: Vec<Box<dyn Clipboard>>,
}

impl CopyChain {
    #[must_use]
    pub fn new(backends: Vec<Box<dyn Clipboard>>) -> Self {
        Self { backends }
    }

    #[must_use]
    pub fn with_backend(mut self, backend: Box<dyn Clipboard>) -> Self {
        self.backends.push(backend);
        self
    }

    /// Names of the configured backends, in try order.
    #[must_use]
    pub fn backend_names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|backend| backend.name()).collect()
    }

    /// Try each backend until one accepts `text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CopyFailed`] when every backend failed or none is
    /// configured.
    pub async fn write_text(&self, text: &str) -> Result<&'static str> {
        for backend in &self.backends {
            match backend.write_text(text).await {
                Ok(()) => {
                    tracing::debug!(backend = backend.name(), "Copied {} bytes", text.len());
                    return Ok(backend.name());
                }
                Err(e) => {
                    tracing::warn!(backend = backend.name(), "Clipboard backend failed: {}", e);
                }
            }
        }
        Err(Error::CopyFailed)
    }

    /// Copy `text` and reduce the result to what the status line shows.
    pub async fn copy(&self, text: &str) -> CopyOutcome {
        match self.write_text(text).await {
            Ok(_) => CopyOutcome::Copied,
            Err(_) => CopyOutcome::Failed,
        }
    }
}

/// Text to copy from a source element's text content.
#[must_use]
pub fn copy_source_text(text_content: &str) -> &str {
    text_content.trim()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::arithmetic_side_effects)]

    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct Recording {
        name: &'static str,
        succeed: bool,
        calls: Rc<RefCell<Vec<(&'static str, String)>>>,
    }

    #[async_trait(?Send)]
    impl Clipboard for Recording {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn write_text(&self, text: &str) -> Result<()> {
            self.calls.borrow_mut().push((self.name, text.to_string()));
            if self.succeed {
                Ok(())
            } else {
                Err(Error::clipboard_write_failed(self.name, "denied"))
            }
        }
    }

    fn chain(
        outcomes: &[(&'static str, bool)],
    ) -> (CopyChain, Rc<RefCell<Vec<(&'static str, String)>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let backends = outcomes
            .iter()
            .map(|&(name, succeed)| {
                Box::new(Recording {
                    name,
                    succeed,
                    calls: Rc::clone(&calls),
                }) as Box<dyn Clipboard>
            })
            .collect();
        (CopyChain::new(backends), calls)
    }

    #[tokio::test]
    async fn test_first_backend_success_stops_chain() {
        let (chain, calls) = chain(&[("async", true), ("legacy", true)]);
        let used = chain.write_text("cargo run").await.expect("copy should succeed");
        assert_eq!(used, "async");
        assert_eq!(calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_falls_back_on_failure() {
        let (chain, calls) = chain(&[("async", false), ("legacy", true)]);
        assert_eq!(chain.copy("cargo run").await, CopyOutcome::Copied);
        assert_eq!(
            *calls.borrow(),
            vec![("async", "cargo run".to_string()), ("legacy", "cargo run".to_string())]
        );
    }

    #[tokio::test]
    async fn test_all_backends_fail() {
        let (chain, _) = chain(&[("async", false), ("legacy", false)]);
        assert_eq!(chain.copy("x").await, CopyOutcome::Failed);
        assert!(matches!(chain.write_text("x").await, Err(Error::CopyFailed)));
    }

    #[tokio::test]
    async fn test_empty_chain_fails() {
        let chain = CopyChain::default();
        assert!(chain.backend_names().is_empty());
        assert_eq!(chain.copy("x").await, CopyOutcome::Failed);
    }

    #[test]
    fn test_copy_source_text_is_trimmed() {
        assert_eq!(copy_source_text("  foo  "), "foo");
        assert_eq!(copy_source_text("\n  cargo build\n"), "cargo build");
    }
}
