//! Checklist progress tracker
//!
//! Binds every `<input data-guide="id">` to the persisted progress record and
//! keeps the `data-progress` fill and `data-progress-text` counter in sync.

use std::cell::RefCell;
use std::rc::Rc;

use learn_core::{LearnConfig, OptionExt, ProgressSession, ProgressSummary};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, Window};

use crate::dom::{self, Scope, markers};
use crate::error::DomResult;
use crate::storage::LocalStorageStore;

/// Tracker bound to its inputs and display elements.
pub struct ProgressWidget {
    inputs: Vec<HtmlInputElement>,
    fill: Option<HtmlElement>,
    text: Option<Element>,
    session: RefCell<ProgressSession<LocalStorageStore>>,
}

impl ProgressWidget {
    /// Restore saved progress onto the page and wire up change and reset
    /// handlers.
    ///
    /// Runs even with no tracked inputs: the counter then reads
    /// `0/0 complete`.
    ///
    /// # Errors
    ///
    /// Returns an error if a query or listener registration throws.
    pub fn attach(window: &Window, scope: Scope<'_>, config: &LearnConfig) -> DomResult<Rc<Self>> {
        let inputs = tracked_inputs(scope)?;
        let ids: Vec<String> = inputs
            .iter()
            .map(|input| input.get_attribute(markers::GUIDE_ATTR).unwrap_or_default())
            .collect();

        let fill = scope
            .query_html(markers::PROGRESS_FILL)?
            .tap_none(|| tracing::debug!("No progress fill element"));
        let text = scope.query(markers::PROGRESS_TEXT)?;

        let store = LocalStorageStore::open(window);
        let (session, summary) = ProgressSession::load(store, config.storage_key.as_str(), ids);

        let widget = Rc::new(Self {
            inputs,
            fill,
            text,
            session: RefCell::new(session),
        });
        widget.sync_inputs();
        widget.render(summary);

        for (position, input) in widget.inputs.iter().enumerate() {
            let handle = Rc::clone(&widget);
            let source = input.clone();
            dom::listen(input, "change", move |_| {
                handle.on_change(position, source.checked());
            })?;
        }

        if let Some(reset) = scope.query(markers::RESET)? {
            let handle = Rc::clone(&widget);
            dom::listen(&reset, "click", move |_| {
                handle.reset();
            })?;
        }

        tracing::info!(
            tracked = widget.inputs.len(),
            done = summary.done,
            "Progress tracker attached"
        );
        Ok(widget)
    }

    /// Record a toggled input and re-render.
    pub fn on_change(&self, position: usize, checked: bool) -> ProgressSummary {
        let summary = self.session.borrow_mut().set_checked(position, checked);
        self.render(summary);
        summary
    }

    /// Uncheck every input, persist and re-render.
    pub fn reset(&self) -> ProgressSummary {
        let summary = self.session.borrow_mut().reset();
        self.sync_inputs();
        self.render(summary);
        summary
    }

    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        self.session.borrow().tracker().summary()
    }

    #[must_use]
    pub fn inputs(&self) -> &[HtmlInputElement] {
        &self.inputs
    }

    fn sync_inputs(&self) {
        let session = self.session.borrow();
        for (input, item) in self.inputs.iter().zip(session.tracker().items()) {
            input.set_checked(item.checked);
        }
    }

    fn render(&self, summary: ProgressSummary) {
        if let Some(fill) = &self.fill {
            if let Err(e) = dom::set_style(fill, "width", &summary.fill_width()) {
                tracing::warn!("Failed to update progress fill: {}", e);
            }
        }
        if let Some(text) = &self.text {
            dom::set_text(text, &summary.counter_text());
        }
    }
}

/// Elements marked `data-guide` that are inputs, in document order.
fn tracked_inputs(scope: Scope<'_>) -> DomResult<Vec<HtmlInputElement>> {
    Ok(scope
        .query_all(markers::GUIDE)?
        .into_iter()
        .filter_map(|element| match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(input),
            Err(other) => {
                tracing::warn!(
                    tag = %other.tag_name(),
                    "Ignoring non-input element marked data-guide"
                );
                None
            }
        })
        .collect())
}
