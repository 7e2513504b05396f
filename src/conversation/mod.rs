//! Conversation Adapter
//!
//! Thin layer between a chat front end and the pure pipeline: canned
//! quick questions, reply text composition, and a caller-owned session
//! holding message history. Presentation timing (the "thinking" delay)
//! belongs to the caller, see `api_server`.

pub mod quick_questions;
pub mod reply;
pub mod session;

pub use quick_questions::{QUICK_QUESTIONS, quick_question};
pub use reply::compose_reply;
pub use session::{ChatMessage, ChatSession, Role, GREETING};
