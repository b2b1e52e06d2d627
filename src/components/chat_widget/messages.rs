// The events the widget reacts to, and the side effects its reducer asks
// the DOM layer to perform.

use chrono::{DateTime, Utc};

use crate::error::ApiError;
use crate::models::{ChatReply, ChatRequest};
use crate::network::Ticket;

/// Who wrote a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    /// CSS modifier used for the message bubble.
    pub fn class_name(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "ai",
        }
    }
}

/// One entry of the visible transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self { sender, content: content.into(), timestamp: Utc::now() }
    }
}

#[derive(Debug)]
pub enum Message {
    Open,
    Close,
    Toggle,
    /// Raw text from the input box.
    Send(String),
    ReplyReceived {
        ticket: Ticket,
        result: Result<ChatReply, ApiError>,
    },
    ClearConversation,
    SetModel(String),
    /// The widget is being torn down; whatever is in flight is abandoned.
    Destroy,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetPanelVisible(bool),
    FocusInput,
    ClearInput,
    AppendMessage(ChatMessage),
    ClearTranscript,
    /// Show or hide the composing indicator; controls are disabled while it
    /// is shown.
    SetComposing(bool),
    SendRequest {
        ticket: Ticket,
        request: ChatRequest,
    },
    /// Abort the request currently on the wire.
    AbortPending,
}
