//! Browser clipboard backends and the feature probe that orders them
//!
//! - [`AsyncClipboard`]: `navigator.clipboard.writeText`, secure contexts only
//! - [`LegacyClipboard`]: hidden textarea + `document.execCommand("copy")`
//!
//! `execCommand` is deprecated and may disappear from browsers; the legacy
//! backend is best-effort and reports failure instead of assuming success.

use async_trait::async_trait;
use learn_core::{Clipboard, CopyChain, Error, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlDocument, HtmlElement, HtmlTextAreaElement, Window};

use crate::error::describe_js;

const ASYNC: &str = "async";
const LEGACY: &str = "legacy";

/// Asynchronous Clipboard API backend.
pub struct AsyncClipboard {
    clipboard: web_sys::Clipboard,
}

impl AsyncClipboard {
    /// Backend for `window`, if it is a secure context exposing
    /// `navigator.clipboard`.
    #[must_use]
    pub fn probe(window: &Window) -> Option<Self> {
        if !window.is_secure_context() {
            tracing::debug!("Insecure context, async clipboard disabled");
            return None;
        }

        js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
            .map(|value| Self {
                clipboard: value.unchecked_into::<web_sys::Clipboard>(),
            })
    }
}

#[async_trait(?Send)]
impl Clipboard for AsyncClipboard {
    fn name(&self) -> &'static str {
        ASYNC
    }

    async fn write_text(&self, text: &str) -> Result<()> {
        JsFuture::from(self.clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| Error::clipboard_write_failed(ASYNC, describe_js(&e)))
    }
}

/// `execCommand("copy")` backend.
pub struct LegacyClipboard {
    document: HtmlDocument,
}

impl LegacyClipboard {
    #[must_use]
    pub fn new(document: &Document) -> Self {
        Self {
            // execCommand lives on Document.prototype in current browsers
            document: document.clone().unchecked_into::<HtmlDocument>(),
        }
    }

    fn helper(&self, text: &str) -> Result<HtmlTextAreaElement> {
        let helper = self
            .document
            .create_element("textarea")
            .map_err(|e| Error::clipboard_write_failed(LEGACY, describe_js(&e)))?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| Error::clipboard_write_failed(LEGACY, "textarea cast failed"))?;

        helper.set_value(text);
        helper.set_read_only(true);

        let style = HtmlElement::style(&helper);
        style
            .set_property("position", "absolute")
            .and_then(|()| style.set_property("left", "-9999px"))
            .map_err(|e| Error::clipboard_write_failed(LEGACY, describe_js(&e)))?;

        Ok(helper)
    }
}

#[async_trait(?Send)]
impl Clipboard for LegacyClipboard {
    fn name(&self) -> &'static str {
        LEGACY
    }

    async fn write_text(&self, text: &str) -> Result<()> {
        let body = self.document.body().ok_or(Error::ClipboardUnavailable {
            backend: LEGACY.to_string(),
        })?;
        let helper = self.helper(text)?;

        body.append_child(&helper)
            .map_err(|e| Error::clipboard_write_failed(LEGACY, describe_js(&e)))?;
        helper.select();

        let copied = self.document.exec_command("copy");

        // The holder is removed whatever the copy command did
        if let Err(e) = body.remove_child(&helper) {
            tracing::debug!("Failed to remove copy helper: {}", describe_js(&e));
        }

        copied
            .map_err(|e| Error::clipboard_write_failed(LEGACY, describe_js(&e)))
            .and_then(command_outcome)
    }
}

/// `execCommand` reports a refused copy by returning `false`.
fn command_outcome(copied: bool) -> Result<()> {
    if copied {
        Ok(())
    } else {
        Err(Error::clipboard_write_failed(
            LEGACY,
            "copy command was refused",
        ))
    }
}

/// Build the backend chain for this page: async first when available, then
/// the legacy fallback.
#[must_use]
pub fn probe_backends(window: &Window, document: &Document) -> CopyChain {
    let chain = match AsyncClipboard::probe(window) {
        Some(modern) => CopyChain::default().with_backend(Box::new(modern)),
        None => CopyChain::default(),
    };
    let chain = chain.with_backend(Box::new(LegacyClipboard::new(document)));

    tracing::debug!(backends = ?chain.backend_names(), "Clipboard backends probed");
    chain
}
