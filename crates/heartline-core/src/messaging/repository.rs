use async_trait::async_trait;

use super::model::{Conversation, Message};
use crate::error::Result;

/// Backend for conversations and their messages.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Conversation list for a user, most recent first.
    async fn fetch_conversations(&self, user_id: &str) -> Result<Vec<Conversation>>;

    /// Messages of one conversation, oldest first.
    async fn fetch_messages(&self, conversation_id: u32) -> Result<Vec<Message>>;

    /// Delivers a message the client has already added to its thread.
    async fn send_message(&self, conversation_id: u32, message: &Message) -> Result<()>;
}
