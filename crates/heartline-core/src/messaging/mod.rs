//! Messaging domain module.
//!
//! # Module Structure
//!
//! - `model`: `Message` and `Conversation`
//! - `thread`: In-memory message list for the open conversation
//! - `repository`: Backend interface for conversations and messages

mod model;
mod repository;
mod thread;

pub use model::{Conversation, Message, OUTGOING_SENDER};
pub use repository::ConversationRepository;
pub use thread::MessageThread;
