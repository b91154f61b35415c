use chrono::{DateTime, Utc};

use super::model::{Message, OUTGOING_SENDER};

/// Messages of the open conversation, oldest first.
///
/// Ids only grow: an outgoing message always gets an id above every id
/// already in the thread.
#[derive(Debug, Clone, Default)]
pub struct MessageThread {
    messages: Vec<Message>,
}

impl MessageThread {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn next_id(&self) -> u64 {
        self.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1
    }

    /// Appends a message from the user.
    ///
    /// Whitespace-only input is ignored and leaves the thread untouched.
    /// Content is stored exactly as passed in.
    pub fn append_outgoing(&mut self, content: &str, now: DateTime<Utc>) -> Option<&Message> {
        if content.trim().is_empty() {
            return None;
        }
        let message = Message::new(self.next_id(), OUTGOING_SENDER, content, now);
        self.messages.push(message);
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_blank_input_is_ignored() {
        let mut thread = MessageThread::default();
        for blank in ["", "   ", "\n\t "] {
            assert!(thread.append_outgoing(blank, Utc::now()).is_none());
        }
        assert!(thread.is_empty());
    }

    #[test]
    fn test_ids_strictly_increase() {
        let now = Utc::now();
        let mut thread = MessageThread::new(vec![
            Message::new(1, "Sarah", "Hey", now - Duration::hours(1)),
            Message::new(2, OUTGOING_SENDER, "Hi", now - Duration::minutes(50)),
        ]);

        let mut last = 2;
        for text in ["one", "two", "three"] {
            let message = thread.append_outgoing(text, now).unwrap();
            assert!(message.id > last);
            assert_eq!(message.sender, "You");
            last = message.id;
        }
        assert_eq!(thread.len(), 5);
    }

    #[test]
    fn test_ids_clear_gaps_in_loaded_history() {
        let now = Utc::now();
        let mut thread = MessageThread::new(vec![Message::new(10, "Mike", "Yo", now)]);
        assert_eq!(thread.append_outgoing("hey", now).unwrap().id, 11);
    }
}
