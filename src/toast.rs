//! Transient on-page notices.
//! One notice is visible at a time: showing a new one removes the previous.
//! Errors stay until dismissed, everything else fades after a few seconds.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::constants::NOTICE_DISMISS_MS;
use crate::dom_utils::{self, El};

const TOAST_CSS: &str = "
.toast{display:flex;align-items:center;justify-content:space-between;gap:12px;padding:10px 16px;margin-bottom:12px;border-radius:4px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.1);opacity:0;animation:toast-in .2s forwards}
.toast-success{background:#16a34a}
.toast-error{background:#dc2626}
.toast-info{background:#2563eb}
.toast-warning{background:#d97706}
.toast-close{background:none;border:none;color:inherit;cursor:pointer;font-size:14px}
@keyframes toast-in{to{opacity:1}}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastKind {
    fn class_name(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Info => "toast toast-info",
            ToastKind::Warning => "toast toast-warning",
            ToastKind::Error => "toast toast-error",
        }
    }

    /// Delay before the notice removes itself; `None` means it stays until
    /// the user closes it.
    pub fn dismiss_after(&self) -> Option<u32> {
        match self {
            ToastKind::Error => None,
            _ => Some(NOTICE_DISMISS_MS),
        }
    }
}

/// A notice waiting to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }
}

/// Show `notice` at the top of `host`, replacing whatever notice is there.
pub fn show(host: &Element, notice: &Notice) {
    if let Err(e) = try_show(host, notice) {
        log::warn!("failed to show notice {:?}: {:?}", notice.message, e);
    }
}

fn try_show(host: &Element, notice: &Notice) -> Result<(), JsValue> {
    let document = host
        .owner_document()
        .ok_or_else(|| JsValue::from_str("notice host is detached"))?;
    ensure_styles(&document)?;

    let existing = host.query_selector_all(".toast")?;
    for i in 0..existing.length() {
        if let Some(node) = existing.item(i) {
            if let Some(parent) = node.parent_node() {
                let _ = parent.remove_child(&node);
            }
        }
    }

    let close = El::new(&document, "button")?
        .class("toast-close")
        .attr("type", "button")?
        .attr("aria-label", "Dismiss")?
        .text("✕")
        .build();
    let toast = El::new(&document, "div")?
        .class(notice.kind.class_name())
        .attr("role", "alert")?
        .child(&El::new(&document, "span")?.class("toast-text").text(&notice.message).build())?
        .child(&close)?
        .build();

    // Newest on top.
    host.prepend_with_node_1(&toast)?;

    let toast_for_close = toast.clone();
    let on_close = Closure::once_into_js(move || toast_for_close.remove());
    close.add_event_listener_with_callback("click", on_close.unchecked_ref())?;

    if let Some(delay) = notice.kind.dismiss_after() {
        let toast: HtmlElement = toast.unchecked_into();
        Timeout::new(delay, move || {
            if toast.parent_node().is_some() {
                toast.remove();
            }
        })
        .forget();
    }
    Ok(())
}

fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    dom_utils::inject_style(document, "toast-styles", TOAST_CSS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_persist_until_dismissed() {
        assert_eq!(ToastKind::Error.dismiss_after(), None);
    }

    #[test]
    fn other_kinds_dismiss_after_five_seconds() {
        for kind in [ToastKind::Success, ToastKind::Info, ToastKind::Warning] {
            assert_eq!(kind.dismiss_after(), Some(5_000));
        }
    }

    #[test]
    fn constructors_set_kind() {
        assert_eq!(Notice::warning("x").kind, ToastKind::Warning);
        assert_eq!(Notice::error("y").message, "y");
    }
}
