//! Caller-owned chat history
//!
//! The engine is stateless; message history lives here and is passed
//! around explicitly by whoever drives the conversation.

use super::reply::compose_reply;
use crate::context::extract;
use crate::engine::recommend;
use serde::{Deserialize, Serialize};

pub const GREETING: &str = "Hi! I'm your Farm Assistant. Tell me your soil texture (sandy/clay/loam), \
rainfall (low/moderate/high), and pH (e.g., pH 6.5). \
Example: \"What should I grow in sandy soil with low rainfall?\"";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

/// One conversation: greeting first, then alternating user/bot turns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: Role::Bot,
                text: GREETING.to_string(),
            }],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Answer one question. Blank input is ignored and leaves the history
    /// untouched; otherwise the question and reply are appended.
    pub fn ask(&mut self, question: &str) -> Option<&ChatMessage> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }

        let ctx = extract(question);
        let reply = compose_reply(&ctx, &recommend(&ctx));

        self.messages.push(ChatMessage {
            role: Role::User,
            text: question.to_string(),
        });
        self.messages.push(ChatMessage {
            role: Role::Bot,
            text: reply,
        });
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Bot);
        assert_eq!(session.messages()[0].text, GREETING);
    }

    #[test]
    fn test_blank_question_ignored() {
        let mut session = ChatSession::new();
        assert!(session.ask("   ").is_none());
        assert!(session.ask("").is_none());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_ask_appends_turns() {
        let mut session = ChatSession::new();
        let reply = session.ask("  sandy soil with low rainfall ").cloned().unwrap();
        assert_eq!(reply.role, Role::Bot);
        assert!(reply.text.contains("Pearl millet"));

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].text, "sandy soil with low rainfall");
    }
}
