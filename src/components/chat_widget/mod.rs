//! Embeddable chat widget.
//!
//! `ChatbotWidget` is the JS-facing handle. Conversation state lives in
//! [`state::ChatState`]; every user action becomes a [`Message`], the reducer
//! returns [`Command`]s, and `execute` runs them once the state borrow has
//! been released.

pub mod messages;
pub mod options;
pub mod state;
mod styles;
mod view;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, Document, HtmlElement, KeyboardEvent};

use crate::dom_utils::Listener;
use crate::network::ChatApi;
use messages::{Command, Message};
pub use options::{Position, Theme, WidgetOptions};
use state::ChatState;
use view::WidgetView;

struct Inner {
    state: ChatState,
    view: Option<WidgetView>,
    api: ChatApi,
    abort: Option<AbortController>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
pub struct ChatbotWidget {
    inner: Rc<RefCell<Inner>>,
}

#[wasm_bindgen]
impl ChatbotWidget {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<ChatbotWidget, JsValue> {
        let options = WidgetOptions::from_js(options)?;
        Self::with_options(options)
    }

    pub fn open(&self) {
        dispatch(&self.inner, Message::Open);
    }

    pub fn close(&self) {
        dispatch(&self.inner, Message::Close);
    }

    pub fn toggle(&self) {
        dispatch(&self.inner, Message::Toggle);
    }

    /// Send whatever is in the input box.
    #[wasm_bindgen(js_name = sendMessage)]
    pub fn send_message(&self) {
        send_from_input(&self.inner);
    }

    #[wasm_bindgen(js_name = clearConversation)]
    pub fn clear_conversation(&self) {
        dispatch(&self.inner, Message::ClearConversation);
    }

    #[wasm_bindgen(js_name = setModel)]
    pub fn set_model(&self, model: String) {
        dispatch(&self.inner, Message::SetModel(model));
    }

    /// Remove the widget from the page and release its listeners.
    pub fn destroy(&self) {
        dispatch(&self.inner, Message::Destroy);
        let mut inner = self.inner.borrow_mut();
        inner.listeners.clear();
        if let Some(view) = inner.view.take() {
            view.detach();
            log::info!("chat widget destroyed");
        }
    }

    #[wasm_bindgen(getter, js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.inner.borrow().state.is_open
    }

    #[wasm_bindgen(getter, js_name = conversationId)]
    pub fn conversation_id(&self) -> String {
        self.inner.borrow().state.conversation_id.clone()
    }
}

impl ChatbotWidget {
    pub fn with_options(options: WidgetOptions) -> Result<ChatbotWidget, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let view = WidgetView::mount(&document, &options)?;
        let state = ChatState::new(&options.model);
        let welcome: Vec<Command> = state.messages.iter().cloned().map(Command::AppendMessage).collect();

        let inner = Rc::new(RefCell::new(Inner {
            state,
            view: Some(view),
            api: ChatApi::new(&options.api_url),
            abort: None,
            listeners: Vec::new(),
        }));
        execute(&inner, welcome);

        let listeners = bind_events(&inner)?;
        inner.borrow_mut().listeners = listeners;

        log::info!("chat widget mounted ({})", options.api_url);
        Ok(ChatbotWidget { inner })
    }

    /// Build a widget from the first `[data-chatbot]` element on the page.
    pub fn auto_init(document: &Document) -> Result<Option<ChatbotWidget>, JsValue> {
        let host = match document.query_selector("[data-chatbot]")? {
            Some(el) => el,
            None => return Ok(None),
        };
        let dataset = host
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str("[data-chatbot] is not an HTML element"))?
            .dataset();
        let options = WidgetOptions::from_dataset(|key| dataset.get(key));
        Self::with_options(options).map(Some)
    }
}

fn bind_events(inner: &Rc<RefCell<Inner>>) -> Result<Vec<Listener>, JsValue> {
    let borrowed = inner.borrow();
    let view = borrowed
        .view
        .as_ref()
        .ok_or_else(|| JsValue::from_str("widget has no view"))?;

    let mut listeners = Vec::with_capacity(4);

    let weak = Rc::downgrade(inner);
    listeners.push(Listener::new(&view.toggle, "click", move |_| {
        with_inner(&weak, |inner| dispatch(inner, Message::Toggle));
    })?);

    let weak = Rc::downgrade(inner);
    listeners.push(Listener::new(&view.close, "click", move |_| {
        with_inner(&weak, |inner| dispatch(inner, Message::Close));
    })?);

    let weak = Rc::downgrade(inner);
    listeners.push(Listener::new(&view.send, "click", move |_| {
        with_inner(&weak, send_from_input);
    })?);

    let weak = Rc::downgrade(inner);
    listeners.push(Listener::new(&view.input, "keydown", move |event| {
        let enter = event
            .dyn_ref::<KeyboardEvent>()
            .map(|k| k.key() == "Enter" && !k.is_composing())
            .unwrap_or(false);
        if enter {
            event.prevent_default();
            with_inner(&weak, send_from_input);
        }
    })?);

    Ok(listeners)
}

fn with_inner(weak: &Weak<RefCell<Inner>>, f: impl FnOnce(&Rc<RefCell<Inner>>)) {
    if let Some(inner) = weak.upgrade() {
        f(&inner);
    }
}

fn send_from_input(inner: &Rc<RefCell<Inner>>) {
    let text = inner.borrow().view.as_ref().map(|v| v.input_text()).unwrap_or_default();
    dispatch(inner, Message::Send(text));
}

fn dispatch(inner: &Rc<RefCell<Inner>>, msg: Message) {
    let commands = inner.borrow_mut().state.update(msg);
    execute(inner, commands);
}

fn execute(inner: &Rc<RefCell<Inner>>, commands: Vec<Command>) {
    for cmd in commands {
        match cmd {
            Command::AbortPending => {
                if let Some(controller) = inner.borrow_mut().abort.take() {
                    controller.abort();
                }
            }
            Command::SendRequest { ticket, request } => {
                let controller = match AbortController::new() {
                    Ok(c) => Some(c),
                    Err(e) => {
                        log::warn!("AbortController unavailable: {:?}", e);
                        None
                    }
                };
                let signal = controller.as_ref().map(|c| c.signal());
                let api = {
                    let mut inner = inner.borrow_mut();
                    inner.abort = controller;
                    inner.api.clone()
                };

                let weak = Rc::downgrade(inner);
                spawn_local(async move {
                    let result = api.send(&request, signal.as_ref()).await;
                    with_inner(&weak, |inner| dispatch(inner, Message::ReplyReceived { ticket, result }));
                });
            }
            other => {
                if other == Command::SetComposing(false) {
                    inner.borrow_mut().abort = None;
                }
                let inner = inner.borrow();
                if let Some(view) = inner.view.as_ref() {
                    if let Err(e) = view.apply(&other) {
                        log::warn!("chat widget render failed: {:?}", e);
                    }
                }
            }
        }
    }
}
