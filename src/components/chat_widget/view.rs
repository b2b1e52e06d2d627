//! DOM side of the widget. Builds the markup once and applies reducer
//! commands to it; holds no conversation state of its own.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use super::messages::{ChatMessage, Command};
use super::options::WidgetOptions;
use super::styles;
use crate::dom_utils::{self, El};
use crate::utils::clock_label;

pub struct WidgetView {
    pub root: Element,
    pub toggle: Element,
    pub close: Element,
    pub input: Element,
    pub send: Element,
    container: Element,
    transcript: Element,
    typing: Element,
}

impl WidgetView {
    /// Build the widget and attach it to `document.body`.
    pub fn mount(document: &Document, options: &WidgetOptions) -> Result<Self, JsValue> {
        styles::inject(document)?;

        let toggle = El::new(document, "button")?
            .class("chatbot-toggle")
            .attr("type", "button")?
            .attr("aria-label", "Open chat")?
            .text("💬")
            .build();
        let close = El::new(document, "button")?
            .class("chatbot-close")
            .attr("type", "button")?
            .attr("aria-label", "Close chat")?
            .text("✕")
            .build();
        let header = El::new(document, "div")?
            .class("chatbot-header")
            .child(&El::new(document, "div")?.class("chatbot-title").text(&options.title).build())?
            .child(&close)?
            .build();

        let transcript = El::new(document, "div")?.class("chatbot-messages").build();

        let input = El::new(document, "input")?
            .class("chatbot-input")
            .attr("type", "text")?
            .attr("placeholder", &options.placeholder)?
            .build();
        let send = El::new(document, "button")?
            .class("chatbot-send")
            .attr("type", "button")?
            .attr("aria-label", "Send message")?
            .text("➤")
            .build();
        let input_area = El::new(document, "div")?
            .class("chatbot-input-area")
            .child(&input)?
            .child(&send)?
            .build();

        let container = El::new(document, "div")?
            .class("chatbot-container hidden")
            .children([&header, &transcript, &input_area])?
            .build();

        let root = El::new(document, "div")?
            .class(&format!(
                "chatbot-widget {} {}",
                options.position.class_name(),
                options.theme.class_name()
            ))
            .child(&toggle)?
            .child(&container)?
            .build();

        let mut dots = Vec::with_capacity(3);
        for _ in 0..3 {
            dots.push(El::new(document, "span")?.class("typing-dot").build());
        }
        let typing = El::new(document, "div")?
            .class("chatbot-message ai chatbot-typing")
            .child(&El::new(document, "div")?.class("typing-indicator").children(dots.iter())?.build())?
            .build();

        document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .append_child(&root)?;

        Ok(Self { root, toggle, close, input, send, container, transcript, typing })
    }

    /// Current text of the input box.
    pub fn input_text(&self) -> String {
        dom_utils::field_value(&self.input)
    }

    /// Apply a DOM command. Network commands are handled by the caller.
    pub fn apply(&self, cmd: &Command) -> Result<(), JsValue> {
        match cmd {
            Command::SetPanelVisible(visible) => dom_utils::set_visible(&self.container, *visible),
            Command::FocusInput => dom_utils::focus(&self.input),
            Command::ClearInput => dom_utils::set_field_value(&self.input, ""),
            Command::AppendMessage(message) => self.append(message)?,
            Command::ClearTranscript => dom_utils::clear(&self.transcript),
            Command::SetComposing(on) => self.set_composing(*on)?,
            Command::SendRequest { .. } | Command::AbortPending => {}
        }
        Ok(())
    }

    fn append(&self, message: &ChatMessage) -> Result<(), JsValue> {
        let document = self
            .root
            .owner_document()
            .ok_or_else(|| JsValue::from_str("widget is detached"))?;
        let bubble = El::new(&document, "div")?
            .class(&format!("chatbot-message {}", message.sender.class_name()))
            .attr("title", &clock_label(&message.timestamp))?
            .child(&El::new(&document, "div")?.class("message-content").text(&message.content).build())?
            .build();
        self.transcript.append_child(&bubble)?;
        dom_utils::scroll_to_bottom(&self.transcript);
        Ok(())
    }

    fn set_composing(&self, on: bool) -> Result<(), JsValue> {
        dom_utils::set_disabled(&self.input, on);
        dom_utils::set_disabled(&self.send, on);
        if on {
            // Appending an attached node moves it, keeping the indicator last.
            self.transcript.append_child(&self.typing)?;
            dom_utils::scroll_to_bottom(&self.transcript);
        } else {
            self.typing.remove();
        }
        Ok(())
    }

    pub fn detach(&self) {
        self.root.remove();
    }
}
