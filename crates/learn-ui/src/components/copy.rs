//! Copy-to-clipboard button for the command block
//!
//! Clicking `data-copy` copies the trimmed text of `data-copy-target` and
//! shows the outcome in `data-copy-status` for a short while.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use learn_core::{CopyChain, CopyOutcome, LearnConfig, StatusLine, copy_source_text};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Window};

use crate::clipboard::probe_backends;
use crate::dom::{self, Scope, markers};
use crate::error::DomResult;

/// Copy button state: the source, the status line and the backend chain.
pub struct CopyWidget {
    target: Option<Element>,
    status: Option<Element>,
    line: RefCell<StatusLine>,
    chain: CopyChain,
    config: LearnConfig,
}

impl CopyWidget {
    /// Wire the `data-copy` trigger, if the page has one.
    ///
    /// # Errors
    ///
    /// Returns an error if a query or listener registration throws.
    pub fn attach(
        window: &Window,
        document: &Document,
        config: &LearnConfig,
    ) -> DomResult<Option<Rc<Self>>> {
        let scope = Scope::Document(document);
        let Some(trigger) = scope.query(markers::COPY)? else {
            return Ok(None);
        };

        let widget = Rc::new(Self::new(
            scope.query(markers::COPY_TARGET)?,
            scope.query(markers::COPY_STATUS)?,
            probe_backends(window, document),
            config.clone(),
        ));

        let handle = Rc::clone(&widget);
        dom::listen(&trigger, "click", move |_| {
            let widget = Rc::clone(&handle);
            spawn_local(async move {
                widget.copy().await;
            });
        })?;

        tracing::info!(backends = ?widget.chain.backend_names(), "Copy button attached");
        Ok(Some(widget))
    }

    #[must_use]
    pub fn new(
        target: Option<Element>,
        status: Option<Element>,
        chain: CopyChain,
        config: LearnConfig,
    ) -> Self {
        Self {
            target,
            status,
            line: RefCell::new(StatusLine::new()),
            chain,
            config,
        }
    }

    /// Copy the target's text and report the outcome.
    ///
    /// Returns `None` without doing anything when the page has no copy
    /// target.
    pub async fn copy(self: Rc<Self>) -> Option<CopyOutcome> {
        let target = self.target.as_ref()?;
        let content = target.text_content().unwrap_or_default();
        let text = copy_source_text(&content);

        let outcome = self.chain.copy(text).await;
        self.report(outcome);
        Some(outcome)
    }

    #[must_use]
    pub fn status_text(&self) -> String {
        self.line.borrow().text().to_string()
    }

    fn report(self: &Rc<Self>, outcome: CopyOutcome) {
        let Some(status) = &self.status else {
            return;
        };

        let ticket = self.line.borrow_mut().show(outcome, &self.config);
        dom::set_text(status, self.line.borrow().text());

        let widget = Rc::clone(self);
        Timeout::new(self.config.status_clear_ms, move || {
            let cleared = widget.line.borrow_mut().clear(ticket);
            if let (true, Some(status)) = (cleared, &widget.status) {
                dom::set_text(status, "");
            }
        })
        .forget();
    }
}
