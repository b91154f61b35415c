//! Fixed reply suggestions standing in for a language model.

use async_trait::async_trait;
use rand::seq::SliceRandom;

use heartline_core::suggestion::SuggestionSource;
use heartline_core::{HeartlineError, Result};

pub const CANNED_SUGGESTIONS: [&str; 5] = [
    "That's really interesting! Can you tell me more about how that experience shaped your perspective?",
    "I love your take on that. What inspired you to develop such a unique point of view?",
    "Your passion for this topic is contagious! Have you considered turning it into a creative project?",
    "I'm fascinated by your approach. How do you think this idea could be applied to solve real-world problems?",
    "Your insights are truly thought-provoking. How do you stay so well-informed on these subjects?",
];

/// Ignores the context and returns one of [`CANNED_SUGGESTIONS`] uniformly at random.
#[derive(Debug, Clone, Default)]
pub struct CannedSuggestionSource;

#[async_trait]
impl SuggestionSource for CannedSuggestionSource {
    async fn suggest(&self, context: &str) -> Result<String> {
        tracing::debug!(context_len = context.len(), "Picking canned suggestion");
        CANNED_SUGGESTIONS
            .choose(&mut rand::thread_rng())
            .map(|s| s.to_string())
            .ok_or_else(|| HeartlineError::internal("suggestion list is empty"))
    }
}
