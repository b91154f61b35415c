//! Conversation reply suggestions.

use async_trait::async_trait;

use crate::error::Result;

/// Produces a reply suggestion for a described conversation.
///
/// The bundled source picks from a fixed list; a language model backend can
/// implement the same trait.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn suggest(&self, context: &str) -> Result<String>;
}
