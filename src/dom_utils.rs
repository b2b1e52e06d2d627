//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! All markup in this crate is produced through [`El`]: user or server text
//! only ever reaches the page through `textContent` or attribute setters, so
//! there is no string templating and nothing to escape by hand.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

/// Builder over a freshly created element.
pub struct El {
    el: Element,
}

impl El {
    pub fn new(document: &Document, tag: &str) -> Result<Self, JsValue> {
        Ok(Self { el: document.create_element(tag)? })
    }

    pub fn id(self, id: &str) -> Self {
        self.el.set_id(id);
        self
    }

    pub fn class(self, class_name: &str) -> Self {
        self.el.set_class_name(class_name);
        self
    }

    /// Set the text content. The only way text enters an element.
    pub fn text(self, text: &str) -> Self {
        self.el.set_text_content(Some(text));
        self
    }

    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        self.el.set_attribute(name, value)?;
        Ok(self)
    }

    pub fn child(self, child: &Element) -> Result<Self, JsValue> {
        self.el.append_child(child)?;
        Ok(self)
    }

    pub fn children<'a>(self, children: impl IntoIterator<Item = &'a Element>) -> Result<Self, JsValue> {
        for child in children {
            self.el.append_child(child)?;
        }
        Ok(self)
    }

    pub fn build(self) -> Element {
        self.el
    }
}

/// Remove the `hidden` class so the element becomes visible.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1("hidden");
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().add_1("hidden");
}

pub fn set_visible(el: &Element, visible: bool) {
    if visible {
        show(el);
    } else {
        hide(el);
    }
}

/// Mark one element of a group as active.
pub fn set_active(el: &Element, active: bool) {
    let _ = if active {
        el.class_list().add_1("active")
    } else {
        el.class_list().remove_1("active")
    };
}

/// Drop every child node.
pub fn clear(el: &Element) {
    el.set_text_content(None);
}

/// Find a descendant that must exist.
pub fn require(root: &Element, selector: &str) -> Result<Element, JsValue> {
    root.query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("missing element: {}", selector)))
}

/// Current value of an `<input>`, `<textarea>` or `<select>`; empty for
/// anything else.
pub fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

pub fn set_field_value(el: &Element, value: &str) {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    }
}

/// Enable or disable a form control.
pub fn set_disabled(el: &Element, disabled: bool) {
    let _ = if disabled {
        el.set_attribute("disabled", "")
    } else {
        el.remove_attribute("disabled")
    };
}

pub fn focus(el: &Element) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
}

/// Append a `<style id="{id}">` to the document head once per page.
pub fn inject_style(document: &Document, id: &str, css: &str) -> Result<(), JsValue> {
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let style = El::new(document, "style")?.id(id).text(css).build();
    match document.head() {
        Some(head) => head.append_child(&style)?,
        None => document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .append_child(&style)?,
    };
    Ok(())
}

/// Scroll a container to its bottom edge.
pub fn scroll_to_bottom(el: &Element) {
    el.set_scroll_top(el.scroll_height());
}

// ---------------------------------------------------------------------------
// Event listeners
// ---------------------------------------------------------------------------

/// An event listener that unregisters itself when dropped.
///
/// Components keep their listeners in a `Vec<Listener>` instead of calling
/// `Closure::forget`, so tearing a component down frees its callbacks.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
