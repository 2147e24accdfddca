//! DOM lookup by attribute markers and listener plumbing
//!
//! All lookups return `Result<Option<_>>`: the `Err` side is a DOM call that
//! threw, `None` is an element that simply is not on the page.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::{DomError, DomResult};

/// Attribute markers the widgets look for.
pub mod markers {
    pub const GUIDE: &str = "[data-guide]";
    pub const GUIDE_ATTR: &str = "data-guide";
    pub const PROGRESS_FILL: &str = "[data-progress]";
    pub const PROGRESS_TEXT: &str = "[data-progress-text]";
    pub const RESET: &str = "[data-reset]";

    pub const COPY: &str = "[data-copy]";
    pub const COPY_TARGET: &str = "[data-copy-target]";
    pub const COPY_STATUS: &str = "[data-copy-status]";

    pub const SLIDESHOW: &str = ".slideshow";
    pub const TRACK: &str = "[data-track]";
    pub const SLIDE: &str = "[data-slide]";
    pub const PREV: &str = "[data-prev]";
    pub const NEXT: &str = "[data-next]";
    pub const DOTS: &str = "[data-dots]";
    pub const COUNTER: &str = "[data-counter]";
}

/// Get the browser window.
///
/// # Errors
///
/// Returns [`DomError::NoWindow`] outside a browser context.
pub fn window() -> DomResult<Window> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Get the window's document.
///
/// # Errors
///
/// Returns [`DomError::NoDocument`] if the window has no document.
pub fn document(window: &Window) -> DomResult<Document> {
    window.document().ok_or(DomError::NoDocument)
}

/// Where a selector is evaluated.
#[derive(Debug, Clone, Copy)]
pub enum Scope<'a> {
    Document(&'a Document),
    Element(&'a Element),
}

impl Scope<'_> {
    /// First element matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::QueryFailed`] if the selector is invalid.
    pub fn query(self, selector: &str) -> DomResult<Option<Element>> {
        let found = match self {
            Self::Document(document) => document.query_selector(selector),
            Self::Element(element) => element.query_selector(selector),
        };
        found.map_err(|e| DomError::query_failed(selector, &e))
    }

    /// Every element matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::QueryFailed`] if the selector is invalid.
    pub fn query_all(self, selector: &str) -> DomResult<Vec<Element>> {
        let list = match self {
            Self::Document(document) => document.query_selector_all(selector),
            Self::Element(element) => element.query_selector_all(selector),
        }
        .map_err(|e| DomError::query_failed(selector, &e))?;

        Ok((0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    /// First element matching `selector`, as an `HtmlElement`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the match is not an HTML
    /// element (for example an SVG node).
    pub fn query_html(self, selector: &str) -> DomResult<Option<HtmlElement>> {
        self.query(selector)?
            .map(|element| {
                element
                    .dyn_into::<HtmlElement>()
                    .map_err(|_| DomError::WrongElementType {
                        selector: selector.to_string(),
                        expected: "an HTML element",
                    })
            })
            .transpose()
    }
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
///
/// # Errors
///
/// Returns [`DomError::ListenerFailed`] if `addEventListener` throws.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> DomResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| DomError::ListenerFailed {
            event: event.to_string(),
            reason: crate::error::describe_js(&e),
        })?;

    // Widgets live as long as the page
    closure.forget();
    Ok(())
}

/// Set one inline style property.
///
/// # Errors
///
/// Returns [`DomError::OperationFailed`] if the style declaration rejects it.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> DomResult<()> {
    element
        .style()
        .set_property(property, value)
        .map_err(|e| DomError::operation_failed("style.setProperty", &e))
}

/// Replace an element's text content.
pub fn set_text(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}
