//! Rizz AI reply suggestion widget.
//!
//! Submitting a context starts a background task that waits for the
//! configured delay and then asks a [`SuggestionSource`] for a reply. The task
//! is tied to the widget: dropping the widget, or calling
//! [`RizzAi::cancel`], cancels it before anything is delivered.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};

use heartline_core::suggestion::SuggestionSource;
use heartline_core::{HeartlineError, Result};

struct PendingSuggestion {
    // Cancels the task when the pending entry is dropped.
    _guard: DropGuard,
    handle: JoinHandle<Option<Result<String>>>,
}

pub struct RizzAi {
    input: String,
    minimized: bool,
    pending: Option<PendingSuggestion>,
    source: Arc<dyn SuggestionSource>,
    delay: Duration,
}

impl RizzAi {
    pub fn new(source: Arc<dyn SuggestionSource>, delay: Duration) -> Self {
        Self {
            input: String::new(),
            minimized: false,
            pending: None,
            source,
            delay,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    /// Collapses or restores the widget. Has no effect on a pending suggestion.
    pub fn toggle_minimized(&mut self) -> bool {
        self.minimized = !self.minimized;
        self.minimized
    }

    /// Starts generating a suggestion for the current input.
    ///
    /// Returns `false` without doing anything when the input is blank or a
    /// suggestion is already being generated.
    pub fn submit(&mut self) -> bool {
        if self.input.trim().is_empty() || self.is_loading() {
            return false;
        }

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let source = Arc::clone(&self.source);
        let context = self.input.clone();
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => None,
                result = async {
                    tokio::time::sleep(delay).await;
                    source.suggest(&context).await
                } => Some(result),
            }
        });

        tracing::debug!(delay_ms = delay.as_millis() as u64, "Suggestion requested");
        self.pending = Some(PendingSuggestion {
            _guard: token.drop_guard(),
            handle,
        });
        true
    }

    /// Waits for the pending suggestion.
    ///
    /// On success the input is cleared and the suggestion returned. `None`
    /// means nothing was pending or the request was cancelled. On failure the
    /// input is kept so the user can retry.
    pub async fn settle(&mut self) -> Result<Option<String>> {
        let Some(pending) = self.pending.take() else {
            return Ok(None);
        };
        let PendingSuggestion { _guard, handle } = pending;

        let outcome = handle
            .await
            .map_err(|e| HeartlineError::internal(format!("suggestion task failed: {e}")))?;
        drop(_guard);

        match outcome {
            Some(Ok(suggestion)) => {
                self.input.clear();
                tracing::debug!("Suggestion delivered");
                Ok(Some(suggestion))
            }
            Some(Err(err)) => {
                tracing::warn!(error = %err, "Suggestion source failed");
                Err(err)
            }
            None => Ok(None),
        }
    }

    /// Drops any pending suggestion without delivering it.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.pending.take().is_some();
        if cancelled {
            tracing::debug!("Pending suggestion cancelled");
        }
        cancelled
    }
}
