//! Widget state and its reducer.
//!
//! `update` never touches the DOM or the network: it mutates the state and
//! returns the [`Command`]s the widget shell executes afterwards.

use super::messages::{ChatMessage, Command, Message, Sender};
use crate::constants::{HTTP_FAILURE_MESSAGE, TRANSPORT_FAILURE_MESSAGE, WELCOME_MESSAGE};
use crate::error::ApiError;
use crate::models::ChatRequest;
use crate::network::InFlight;

/// Mint a fresh conversation token.
pub fn new_conversation_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Debug)]
pub struct ChatState {
    pub is_open: bool,
    pub model: String,
    pub conversation_id: String,
    pub messages: Vec<ChatMessage>,
    in_flight: InFlight,
}

impl ChatState {
    pub fn new(model: &str) -> Self {
        Self {
            is_open: false,
            model: model.to_string(),
            conversation_id: new_conversation_id(),
            messages: vec![ChatMessage::new(Sender::Assistant, WELCOME_MESSAGE)],
            in_flight: InFlight::new(),
        }
    }

    /// A reply is being waited for.
    pub fn is_composing(&self) -> bool {
        self.in_flight.is_pending()
    }

    pub fn update(&mut self, msg: Message) -> Vec<Command> {
        let mut cmds = Vec::new();
        match msg {
            Message::Open => self.set_open(true, &mut cmds),
            Message::Close => self.set_open(false, &mut cmds),
            Message::Toggle => {
                let open = !self.is_open;
                self.set_open(open, &mut cmds);
            }
            Message::Send(raw) => {
                let text = raw.trim();
                if text.is_empty() {
                    return cmds;
                }

                let (ticket, superseded) = self.in_flight.start();
                if superseded {
                    log::debug!("new message supersedes the reply still in flight");
                    cmds.push(Command::AbortPending);
                }

                let outgoing = ChatMessage::new(Sender::User, text);
                self.messages.push(outgoing.clone());
                cmds.push(Command::AppendMessage(outgoing));
                cmds.push(Command::ClearInput);
                cmds.push(Command::SetComposing(true));
                cmds.push(Command::SendRequest {
                    ticket,
                    request: ChatRequest {
                        message: text.to_string(),
                        model: self.model.clone(),
                        conversation_id: self.conversation_id.clone(),
                    },
                });
            }
            Message::ReplyReceived { ticket, result } => {
                if !self.in_flight.settle(ticket) {
                    log::debug!("dropping reply for a superseded message");
                    return cmds;
                }
                cmds.push(Command::SetComposing(false));

                let reply = match result {
                    Ok(reply) => {
                        if let Some(id) = reply.conversation_id.filter(|id| !id.is_empty()) {
                            self.conversation_id = id;
                        }
                        ChatMessage::new(Sender::Assistant, reply.response)
                    }
                    Err(err) => {
                        log::warn!("chat request failed: {}", err);
                        ChatMessage::new(Sender::Assistant, failure_text(&err))
                    }
                };
                self.messages.push(reply.clone());
                cmds.push(Command::AppendMessage(reply));
                cmds.push(Command::FocusInput);
            }
            Message::ClearConversation => {
                if self.in_flight.cancel() {
                    cmds.push(Command::AbortPending);
                    cmds.push(Command::SetComposing(false));
                }
                self.conversation_id = new_conversation_id();
                let welcome = ChatMessage::new(Sender::Assistant, WELCOME_MESSAGE);
                self.messages = vec![welcome.clone()];
                cmds.push(Command::ClearTranscript);
                cmds.push(Command::AppendMessage(welcome));
            }
            Message::SetModel(model) => {
                self.model = model;
            }
            Message::Destroy => {
                if self.in_flight.cancel() {
                    cmds.push(Command::AbortPending);
                }
            }
        }
        cmds
    }

    fn set_open(&mut self, open: bool, cmds: &mut Vec<Command>) {
        if self.is_open == open {
            return;
        }
        self.is_open = open;
        cmds.push(Command::SetPanelVisible(open));
        if open {
            cmds.push(Command::FocusInput);
        }
    }
}

/// Canned transcript text for a failed send.
pub fn failure_text(err: &ApiError) -> &'static str {
    match err {
        ApiError::Http { .. } | ApiError::Remote(_) => HTTP_FAILURE_MESSAGE,
        ApiError::Transport(_) | ApiError::Decode(_) | ApiError::Aborted => TRANSPORT_FAILURE_MESSAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatReply;
    use crate::network::Ticket;

    fn reply(text: &str, id: Option<&str>) -> ChatReply {
        ChatReply {
            response: text.to_string(),
            conversation_id: id.map(str::to_string),
            model: None,
            timestamp: None,
            tokens_used: None,
        }
    }

    fn sent_ticket(cmds: &[Command]) -> (Ticket, ChatRequest) {
        cmds.iter()
            .find_map(|c| match c {
                Command::SendRequest { ticket, request } => Some((*ticket, request.clone())),
                _ => None,
            })
            .expect("no request issued")
    }

    fn contents(state: &ChatState) -> Vec<(Sender, &str)> {
        state.messages.iter().map(|m| (m.sender, m.content.as_str())).collect()
    }

    #[test]
    fn starts_with_single_welcome_message() {
        let state = ChatState::new("m");
        assert_eq!(contents(&state), vec![(Sender::Assistant, WELCOME_MESSAGE)]);
        assert!(!state.is_open);
        assert!(!state.is_composing());
    }

    #[test]
    fn blank_input_sends_nothing() {
        let mut state = ChatState::new("m");
        for input in ["", "   ", "\n\t "] {
            let cmds = state.update(Message::Send(input.to_string()));
            assert!(cmds.is_empty());
        }
        assert_eq!(state.messages.len(), 1);
        assert!(!state.is_composing());
    }

    #[test]
    fn send_appends_trimmed_user_message_and_requests_reply() {
        let mut state = ChatState::new("gpt");
        let cmds = state.update(Message::Send("  hi there  ".into()));

        let (_, request) = sent_ticket(&cmds);
        assert_eq!(request.message, "hi there");
        assert_eq!(request.model, "gpt");
        assert_eq!(request.conversation_id, state.conversation_id);
        assert!(cmds.contains(&Command::SetComposing(true)));
        assert!(cmds.contains(&Command::ClearInput));
        assert_eq!(state.messages.last().map(|m| m.sender), Some(Sender::User));
        assert!(state.is_composing());
    }

    #[test]
    fn successful_reply_appends_one_assistant_message_and_adopts_id() {
        let mut state = ChatState::new("m");
        let (ticket, _) = sent_ticket(&state.update(Message::Send("hello".into())));
        let cmds = state.update(Message::ReplyReceived { ticket, result: Ok(reply("hey", Some("server-id"))) });

        assert_eq!(
            contents(&state),
            vec![(Sender::Assistant, WELCOME_MESSAGE), (Sender::User, "hello"), (Sender::Assistant, "hey")]
        );
        assert_eq!(state.conversation_id, "server-id");
        assert_eq!(cmds.first(), Some(&Command::SetComposing(false)));

        let (_, next) = sent_ticket(&state.update(Message::Send("again".into())));
        assert_eq!(next.conversation_id, "server-id");
    }

    #[test]
    fn reply_without_id_keeps_current_token() {
        let mut state = ChatState::new("m");
        let before = state.conversation_id.clone();
        let (ticket, _) = sent_ticket(&state.update(Message::Send("x".into())));
        state.update(Message::ReplyReceived { ticket, result: Ok(reply("y", None)) });
        assert_eq!(state.conversation_id, before);
    }

    #[test]
    fn http_failure_appends_one_canned_message() {
        let mut state = ChatState::new("m");
        let (ticket, _) = sent_ticket(&state.update(Message::Send("q".into())));
        state.update(Message::ReplyReceived { ticket, result: Err(ApiError::Http { status: 500 }) });

        assert_eq!(
            contents(&state),
            vec![(Sender::Assistant, WELCOME_MESSAGE), (Sender::User, "q"), (Sender::Assistant, HTTP_FAILURE_MESSAGE)]
        );
        assert!(!state.is_composing());
    }

    #[test]
    fn transport_failure_uses_connection_message() {
        let mut state = ChatState::new("m");
        let before = state.conversation_id.clone();
        let (ticket, _) = sent_ticket(&state.update(Message::Send("q".into())));
        state.update(Message::ReplyReceived { ticket, result: Err(ApiError::Transport("offline".into())) });

        assert_eq!(state.messages.len(), 3);
        assert_eq!(state.messages[2].content, TRANSPORT_FAILURE_MESSAGE);
        assert_eq!(state.conversation_id, before);
    }

    #[test]
    fn clear_resets_transcript_and_mints_new_token() {
        let mut state = ChatState::new("m");
        let (ticket, _) = sent_ticket(&state.update(Message::Send("q".into())));
        state.update(Message::ReplyReceived { ticket, result: Ok(reply("a", Some("old"))) });

        let cmds = state.update(Message::ClearConversation);
        assert_eq!(contents(&state), vec![(Sender::Assistant, WELCOME_MESSAGE)]);
        assert_ne!(state.conversation_id, "old");
        assert!(!state.conversation_id.is_empty());
        assert_eq!(cmds.first(), Some(&Command::ClearTranscript));
    }

    #[test]
    fn clear_twice_never_reuses_a_token() {
        let mut state = ChatState::new("m");
        let first = state.conversation_id.clone();
        state.update(Message::ClearConversation);
        let second = state.conversation_id.clone();
        state.update(Message::ClearConversation);
        assert_ne!(first, second);
        assert_ne!(second, state.conversation_id);
    }

    #[test]
    fn destroy_abandons_pending_reply() {
        let mut state = ChatState::new("m");
        let (ticket, _) = sent_ticket(&state.update(Message::Send("q".into())));

        let cmds = state.update(Message::Destroy);
        assert_eq!(cmds, vec![Command::AbortPending]);
        assert!(!state.is_composing());

        let late = state.update(Message::ReplyReceived { ticket, result: Err(ApiError::Aborted) });
        assert!(late.is_empty());
        assert_eq!(state.messages.last().map(|m| m.content.as_str()), Some("q"));
    }

    #[test]
    fn destroy_when_idle_aborts_nothing() {
        let mut state = ChatState::new("m");
        assert!(state.update(Message::Destroy).is_empty());
    }

    #[test]
    fn newer_send_supersedes_pending_reply() {
        let mut state = ChatState::new("m");
        let (first, _) = sent_ticket(&state.update(Message::Send("one".into())));
        let cmds = state.update(Message::Send("two".into()));
        assert_eq!(cmds.first(), Some(&Command::AbortPending));
        let (second, _) = sent_ticket(&cmds);

        let stale = state.update(Message::ReplyReceived { ticket: first, result: Err(ApiError::Aborted) });
        assert!(stale.is_empty());
        assert_eq!(state.messages.len(), 3);
        assert!(state.is_composing());

        state.update(Message::ReplyReceived { ticket: second, result: Ok(reply("for two", None)) });
        assert_eq!(state.messages.last().map(|m| m.content.as_str()), Some("for two"));
    }

    #[test]
    fn clear_while_pending_drops_late_reply() {
        let mut state = ChatState::new("m");
        let (ticket, _) = sent_ticket(&state.update(Message::Send("q".into())));
        let cmds = state.update(Message::ClearConversation);
        assert!(cmds.contains(&Command::AbortPending));
        assert!(cmds.contains(&Command::SetComposing(false)));

        let late = state.update(Message::ReplyReceived { ticket, result: Ok(reply("late", Some("x"))) });
        assert!(late.is_empty());
        assert_eq!(state.messages.len(), 1);
        assert_ne!(state.conversation_id, "x");
    }

    #[test]
    fn visibility_operations_are_idempotent() {
        let mut state = ChatState::new("m");
        assert_eq!(state.update(Message::Open), vec![Command::SetPanelVisible(true), Command::FocusInput]);
        assert!(state.update(Message::Open).is_empty());
        assert_eq!(state.update(Message::Toggle), vec![Command::SetPanelVisible(false)]);
        assert!(state.update(Message::Close).is_empty());
        assert!(!state.is_open);
    }

    #[test]
    fn set_model_applies_to_next_send() {
        let mut state = ChatState::new("old-model");
        assert!(state.update(Message::SetModel("new-model".into())).is_empty());
        let (_, request) = sent_ticket(&state.update(Message::Send("hi".into())));
        assert_eq!(request.model, "new-model");
    }
}
