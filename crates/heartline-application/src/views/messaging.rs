//! Messaging page: conversation list, open thread and compose box.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use heartline_core::messaging::{Conversation, ConversationRepository, Message, MessageThread};
use heartline_core::subscription::{Entitlements, Feature};
use heartline_core::suggestion::SuggestionSource;
use heartline_core::{HeartlineError, Result};

use crate::rizz::RizzAi;

/// Messaging view state.
///
/// Selecting a conversation replaces the thread with the messages loaded for
/// it; nothing carries over between conversations. The Rizz AI widget lives
/// here and is dropped with the view.
pub struct MessagingView {
    repository: Arc<dyn ConversationRepository>,
    entitlements: Entitlements,
    conversations: Vec<Conversation>,
    selected: Option<u32>,
    thread: MessageThread,
    compose: String,
    rizz: RizzAi,
    rizz_visible: bool,
    in_video_call: bool,
}

impl MessagingView {
    /// Loads the conversation list for `user_id`.
    pub async fn load(
        repository: Arc<dyn ConversationRepository>,
        suggestions: Arc<dyn SuggestionSource>,
        suggestion_delay: Duration,
        user_id: &str,
        entitlements: Entitlements,
    ) -> Result<Self> {
        let conversations = repository.fetch_conversations(user_id).await?;
        tracing::debug!(count = conversations.len(), "Conversations loaded");
        Ok(Self {
            repository,
            entitlements,
            conversations,
            selected: None,
            thread: MessageThread::default(),
            compose: String::new(),
            rizz: RizzAi::new(suggestions, suggestion_delay),
            rizz_visible: false,
            in_video_call: false,
        })
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn selected(&self) -> Option<&Conversation> {
        let id = self.selected?;
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn messages(&self) -> &[Message] {
        self.thread.messages()
    }

    pub fn compose(&self) -> &str {
        &self.compose
    }

    pub fn set_compose(&mut self, text: impl Into<String>) {
        self.compose = text.into();
    }

    /// Opens a conversation and loads its messages.
    pub async fn select(&mut self, conversation_id: u32) -> Result<()> {
        if !self.conversations.iter().any(|c| c.id == conversation_id) {
            return Err(HeartlineError::not_found("conversation", conversation_id));
        }
        let messages = self.repository.fetch_messages(conversation_id).await?;
        self.thread = MessageThread::new(messages);
        self.selected = Some(conversation_id);
        self.in_video_call = false;
        tracing::debug!(conversation_id, messages = self.thread.len(), "Conversation opened");
        Ok(())
    }

    /// Sends the compose text to the open conversation.
    ///
    /// Blank input is ignored and returns `Ok(None)`; other text is stored as
    /// typed. The message is appended locally before the repository is told
    /// about it; on a repository error the local copy stays and the compose
    /// box is still cleared.
    pub async fn send(&mut self) -> Result<Option<Message>> {
        let Some(conversation_id) = self.selected else {
            return Err(HeartlineError::validation(
                "conversation",
                "no conversation selected",
            ));
        };
        let Some(message) = self
            .thread
            .append_outgoing(&self.compose, Utc::now())
            .cloned()
        else {
            return Ok(None);
        };
        self.compose.clear();
        self.repository.send_message(conversation_id, &message).await?;
        tracing::debug!(conversation_id, id = message.id, "Message sent");
        Ok(Some(message))
    }

    pub fn entitlements(&self) -> Entitlements {
        self.entitlements
    }

    /// Applies a tier change without reloading the page.
    ///
    /// Losing access to Rizz AI hides the widget and drops any pending
    /// suggestion. Losing access to video calls hangs up.
    pub fn set_entitlements(&mut self, entitlements: Entitlements) {
        self.entitlements = entitlements;
        if !entitlements.allows(Feature::RizzAi) && self.rizz_visible {
            self.rizz_visible = false;
            self.rizz.cancel();
        }
        if !entitlements.allows(Feature::VideoCall) {
            self.in_video_call = false;
        }
    }

    pub fn can_use_rizz(&self) -> bool {
        self.entitlements.allows(Feature::RizzAi)
    }

    pub fn can_video_call(&self) -> bool {
        self.entitlements.allows(Feature::VideoCall)
    }

    pub fn is_rizz_visible(&self) -> bool {
        self.rizz_visible
    }

    /// Shows or hides the Rizz AI widget. Hiding it drops any pending
    /// suggestion.
    pub fn toggle_rizz(&mut self) -> Result<bool> {
        self.entitlements.require(Feature::RizzAi)?;
        self.rizz_visible = !self.rizz_visible;
        if !self.rizz_visible {
            self.rizz.cancel();
        }
        Ok(self.rizz_visible)
    }

    pub fn rizz(&self) -> &RizzAi {
        &self.rizz
    }

    pub fn rizz_mut(&mut self) -> Result<&mut RizzAi> {
        if !self.rizz_visible {
            return Err(HeartlineError::validation("rizz", "Rizz AI is not open"));
        }
        Ok(&mut self.rizz)
    }

    /// Submits `context` to Rizz AI. Returns whether a request was started.
    pub fn request_suggestion(&mut self, context: impl Into<String>) -> Result<bool> {
        let rizz = self.rizz_mut()?;
        rizz.set_input(context);
        Ok(rizz.submit())
    }

    /// Waits for the pending suggestion and puts it in the compose box.
    ///
    /// Returns `Ok(None)` without waiting when the widget is hidden.
    pub async fn settle_suggestion(&mut self) -> Result<Option<String>> {
        if !self.rizz_visible {
            return Ok(None);
        }
        let suggestion = self.rizz.settle().await?;
        if let Some(text) = &suggestion {
            self.compose = text.clone();
        }
        Ok(suggestion)
    }

    pub fn is_in_video_call(&self) -> bool {
        self.in_video_call
    }

    /// Starts a video call with the open conversation's contact.
    pub fn start_video_call(&mut self) -> Result<&Conversation> {
        self.entitlements.require(Feature::VideoCall)?;
        let id = self.selected.ok_or_else(|| {
            HeartlineError::validation("conversation", "no conversation selected")
        })?;
        self.in_video_call = true;
        tracing::info!(conversation_id = id, "Video call started");
        self.selected()
            .ok_or_else(|| HeartlineError::not_found("conversation", id))
    }

    pub fn end_video_call(&mut self) -> bool {
        std::mem::replace(&mut self.in_video_call, false)
    }
}
