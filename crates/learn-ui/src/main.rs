//! WASM entry point
//!
//! Trunk compiles this binary and runs it once the page has loaded. It reads
//! the page configuration, installs console logging and attaches the widgets.

use learn_ui::{config, logging};

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    let window = web_sys::window();
    let loaded = config::page_config(window.as_ref());
    let config = loaded.clone().unwrap_or_default();

    logging::init_logging(&config.log_level);
    if let Err(e) = loaded {
        tracing::warn!("Ignoring page configuration: {}", e);
    }

    if let Err(e) = learn_ui::start(&config) {
        web_sys::console::error_1(&format!("Learn widgets failed to start: {e}").into());
    }
}
