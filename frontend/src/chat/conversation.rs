use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use yew::Reducible;

use crate::chat::responder::generate_response;
use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// Sequence number assigned in append order, so ids sort the same way the log does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msg-{:06}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

/// Append-only chat log plus the widget flags.
///
/// At most one reply is ever in flight: `awaiting` holds the user message
/// being answered and doubles as the typing indicator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    awaiting: Option<MessageId>,
    is_open: bool,
    next_id: u64,
}

impl Conversation {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.awaiting.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The user message whose reply is pending, if any.
    pub fn awaiting(&self) -> Option<MessageId> {
        self.awaiting
    }

    /// Shows the widget. The very first open of an empty log greets the user.
    /// Returns whether the greeting was added.
    pub fn open(&mut self) -> bool {
        self.is_open = true;
        if self.messages.is_empty() {
            self.push(config::GREETING.to_string(), Sender::Bot);
            return true;
        }
        false
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Logs a user message and starts waiting for the canned reply.
    ///
    /// Blank input is ignored, and so is anything sent while a reply is
    /// still pending. The returned id is what `deliver_reply` expects.
    pub fn submit(&mut self, input: &str) -> Option<MessageId> {
        if input.trim().is_empty() || self.is_typing() {
            return None;
        }
        let id = self.push(input.to_string(), Sender::User);
        self.awaiting = Some(id);
        Some(id)
    }

    /// Appends the bot's answer to `to` and clears the typing flag.
    /// Stale or unknown ids are ignored.
    pub fn deliver_reply(&mut self, to: MessageId) -> bool {
        if self.awaiting != Some(to) {
            return false;
        }
        let Some(question) = self.messages.iter().find(|m| m.id == to) else {
            return false;
        };
        let answer = generate_response(&question.text).to_string();
        self.push(answer, Sender::Bot);
        self.awaiting = None;
        true
    }

    fn push(&mut self, text: String, sender: Sender) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            text,
            sender,
            timestamp: Utc::now(),
        });
        id
    }
}

pub enum ChatAction {
    Open,
    Close,
    Submit(String),
    Deliver(MessageId),
}

impl Reducible for Conversation {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ChatAction::Open => {
                if next.open() {
                    log::debug!("Chat opened, greeting added");
                }
            }
            ChatAction::Close => next.close(),
            ChatAction::Submit(text) => {
                if next.submit(&text).is_none() {
                    return self;
                }
            }
            ChatAction::Deliver(id) => {
                if !next.deliver_reply(id) {
                    log::warn!("Dropping reply for {}: no longer awaited", id);
                    return self;
                }
            }
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::responder::Reply;

    #[test]
    fn test_first_open_greets_once() {
        let mut convo = Conversation::default();
        assert!(convo.open());
        assert_eq!(convo.messages().len(), 1);
        assert_eq!(convo.messages()[0].text, "Hi! How can I help you today?");
        assert_eq!(convo.messages()[0].sender, Sender::Bot);

        convo.close();
        assert!(!convo.is_open());
        assert!(!convo.open());
        assert_eq!(convo.messages().len(), 1);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut convo = Conversation::default();
        assert_eq!(convo.submit(""), None);
        assert_eq!(convo.submit("   "), None);
        assert_eq!(convo.submit("\n\t"), None);
        assert!(convo.messages().is_empty());
        assert!(!convo.is_typing());
    }

    #[test]
    fn test_submit_then_deliver() {
        let mut convo = Conversation::default();
        convo.open();

        let id = convo.submit("Is this secure?").unwrap();
        assert!(convo.is_typing());
        assert_eq!(convo.messages().len(), 2);
        assert_eq!(convo.messages()[1].sender, Sender::User);
        assert_eq!(convo.messages()[1].text, "Is this secure?");

        assert!(convo.deliver_reply(id));
        assert!(!convo.is_typing());
        let last = convo.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.text, Reply::Security.text());
    }

    #[test]
    fn test_user_text_is_logged_verbatim() {
        let mut convo = Conversation::default();
        convo.submit("  How?  ").unwrap();
        assert_eq!(convo.messages()[0].text, "  How?  ");
    }

    #[test]
    fn test_submit_while_typing_is_ignored() {
        let mut convo = Conversation::default();
        let first = convo.submit("how").unwrap();
        assert_eq!(convo.submit("price"), None);
        assert_eq!(convo.messages().len(), 1);

        convo.deliver_reply(first);
        assert!(convo.submit("price").is_some());
    }

    #[test]
    fn test_stale_delivery_is_ignored() {
        let mut convo = Conversation::default();
        let id = convo.submit("hello").unwrap();
        assert!(convo.deliver_reply(id));
        assert!(!convo.deliver_reply(id));
        assert_eq!(convo.messages().len(), 2);
    }

    #[test]
    fn test_ids_follow_append_order() {
        let mut convo = Conversation::default();
        convo.open();
        let id = convo.submit("pay").unwrap();
        convo.deliver_reply(id);

        let ids: Vec<MessageId> = convo.messages().iter().map(|m| m.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(ids[0].to_string(), "msg-000000");
        assert_eq!(ids[2].to_string(), "msg-000002");
    }

    #[test]
    fn test_open_flag_does_not_touch_log() {
        let mut convo = Conversation::default();
        convo.submit("how").unwrap();
        assert!(!convo.open());
        assert!(convo.is_open());
        assert_eq!(convo.messages().len(), 1);
    }

    #[test]
    fn test_reducer_keeps_state_on_rejected_submit() {
        let convo = Rc::new(Conversation::default());
        let next = convo.clone().reduce(ChatAction::Submit("   ".to_string()));
        assert!(Rc::ptr_eq(&convo, &next));

        let next = next.reduce(ChatAction::Submit("cost".to_string()));
        assert!(next.is_typing());
        let id = next.messages()[0].id;
        let next = next.reduce(ChatAction::Deliver(id));
        assert_eq!(next.messages()[1].text, Reply::Valuation.text());
    }
}
