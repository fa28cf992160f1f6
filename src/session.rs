//! Conversation session log
//!
//! An append-only, single-writer transcript of one chat surface. Sessions are
//! ephemeral: they live for the process and are never persisted or shared.

use crate::intent::{self, Topic};
use crate::models::SiteRecord;
use crate::responder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Greeting seeded as message 1 of every session
pub const WELCOME_MESSAGE: &str =
    "Hello! I can help you understand air quality data. Ask me anything!";

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// One transcript entry, immutable once appended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Monotonically increasing id within the session, starting at 1
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of exchanged messages for one chat surface.
///
/// Appends must come from a single logical owner; there is no deletion or
/// mutation API.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ConversationSession {
    /// Create a session pre-seeded with the assistant's welcome message
    #[must_use]
    pub fn new() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        session.append(Sender::Assistant, WELCOME_MESSAGE.to_string());
        session
    }

    fn append(&mut self, sender: Sender, text: String) -> &ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            text,
            sender,
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.messages.push(message);
        self.messages.last().expect("message just appended")
    }

    /// Append a message authored by the user
    pub fn append_user(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.append(Sender::User, text.into())
    }

    /// Append a message authored by the assistant
    pub fn append_assistant(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.append(Sender::Assistant, text.into())
    }

    /// Ordered view over the transcript, oldest first
    pub fn history(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    /// Number of messages in the transcript
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// One assistant turn: log the user's input, match it to a topic,
    /// generate the reply against the selected site (if any) and log that
    /// too. Returns the matched topic and the appended assistant message.
    pub fn exchange(&mut self, input: &str, context: Option<&SiteRecord>) -> (Topic, &ChatMessage) {
        self.append_user(input);
        let topic = intent::match_intent(input);
        let reply = responder::generate(topic, context);
        tracing::debug!(?topic, "assistant reply generated");
        (topic, self.append_assistant(reply))
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_seeded_with_welcome() {
        let session = ConversationSession::new();
        assert_eq!(session.len(), 1);

        let first = session.history().next().unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.sender, Sender::Assistant);
        assert_eq!(first.text, WELCOME_MESSAGE);
    }

    #[test]
    fn test_append_preserves_order_and_ids_increase() {
        let mut session = ConversationSession::new();
        session.append_user("first");
        session.append_assistant("second");
        session.append_user("third");

        let ids: Vec<u64> = session.history().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let texts: Vec<&str> = session.history().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec![WELCOME_MESSAGE, "first", "second", "third"]);
    }

    #[test]
    fn test_history_is_restartable() {
        let mut session = ConversationSession::new();
        session.append_user("hello");

        let first_pass: Vec<u64> = session.history().map(|m| m.id).collect();
        let second_pass: Vec<u64> = session.history().map(|m| m.id).collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn test_exchange_appends_both_sides() {
        let mut session = ConversationSession::new();
        let (topic, reply) = session.exchange("forecast", None);

        assert_eq!(topic, Topic::Forecast);
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(reply.id, 3);
        assert_eq!(
            reply.text,
            "Please select a monitoring site to view forecast data."
        );
        assert_eq!(session.len(), 3);

        let user_message = session.history().nth(1).unwrap();
        assert_eq!(user_message.sender, Sender::User);
        assert_eq!(user_message.text, "forecast");
    }
}
