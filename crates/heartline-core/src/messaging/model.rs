//! Conversation message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sender label used for messages typed by the signed-in user.
pub const OUTGOING_SENDER: &str = "You";

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub sender: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(
        id: u64,
        sender: impl Into<String>,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            sender: sender.into(),
            content: content.into(),
            timestamp,
        }
    }

    pub fn is_outgoing(&self) -> bool {
        self.sender == OUTGOING_SENDER
    }

    /// `HH:MM` label shown under the bubble.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Entry in the conversation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: u32,
    pub name: String,
    pub last_message: String,
    pub unread_count: u32,
}

impl Conversation {
    pub fn has_unread(&self) -> bool {
        self.unread_count > 0
    }
}
