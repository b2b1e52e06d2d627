//! Shared modal helper used by the dashboard's add/view dialogs.
//!
//! Keeps creation / show / hide logic in one place so each dialog only
//! supplies its body and footer buttons.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils::{self, El};

pub struct Modal {
    /// Backdrop container; hidden until `show`.
    pub backdrop: Element,
    /// Where callers put their markup.
    pub body: Element,
    pub footer: Element,
    /// Header close button.
    pub close: Element,
}

impl Modal {
    /// Build `<div id="{id}" class="modal hidden">` with a titled content
    /// box inside `host`.
    pub fn build(document: &Document, host: &Element, id: &str, title: &str) -> Result<Self, JsValue> {
        let close = El::new(document, "button")?
            .class("modal-close")
            .attr("type", "button")?
            .attr("aria-label", "Close")?
            .text("✕")
            .build();
        let header = El::new(document, "div")?
            .class("modal-header")
            .child(&El::new(document, "h3")?.class("modal-title").text(title).build())?
            .child(&close)?
            .build();
        let body = El::new(document, "div")?.class("modal-body").build();
        let footer = El::new(document, "div")?.class("modal-footer").build();

        let content = El::new(document, "div")?
            .class("modal-content")
            .children([&header, &body, &footer])?
            .build();
        let backdrop = El::new(document, "div")?
            .id(id)
            .class("modal hidden")
            .attr("role", "dialog")?
            .child(&content)?
            .build();
        host.append_child(&backdrop)?;

        Ok(Self { backdrop, body, footer, close })
    }

    pub fn show(&self) {
        dom_utils::show(&self.backdrop);
    }

    pub fn hide(&self) {
        dom_utils::hide(&self.backdrop);
    }
}
