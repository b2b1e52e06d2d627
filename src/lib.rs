use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

pub mod components;
pub mod constants;
pub mod dom_utils;
pub mod error;
pub mod models;
pub mod network;
pub mod toast;
pub mod utils;

pub use components::chat_widget::{ChatbotWidget, WidgetOptions};
pub use components::training_dashboard::mount_training_dashboard;

thread_local! {
    // Widget created from a `[data-chatbot]` element. Nothing on the page
    // holds a handle to it, so it lives here.
    static AUTO_WIDGET: RefCell<Option<ChatbotWidget>> = RefCell::new(None);
}

// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    // The module may load before the markup it enhances.
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once_into_js(move || auto_init(&doc));
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        auto_init(&document);
    }
    Ok(())
}

/// Attach whatever the page asks for through its markup.
fn auto_init(document: &Document) {
    match ChatbotWidget::auto_init(document) {
        Ok(Some(widget)) => AUTO_WIDGET.with(|slot| *slot.borrow_mut() = Some(widget)),
        Ok(None) => {}
        Err(e) => log::error!("chat widget auto-init failed: {:?}", e),
    }

    if let Err(e) = components::training_dashboard::auto_mount(document) {
        log::error!("training dashboard mount failed: {:?}", e);
    }
}
