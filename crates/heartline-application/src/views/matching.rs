//! Matching page: swipe through a queue of candidates.

use std::collections::VecDeque;
use std::sync::Arc;

use heartline_core::profile::{CandidateSource, Profile, ProfileModal};
use heartline_core::subscription::Tier;
use heartline_core::{HeartlineError, Result};

/// Decision taken on a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Like,
    Pass,
}

pub struct MatchingView {
    source: Arc<dyn CandidateSource>,
    queue: VecDeque<Profile>,
    liked: Vec<Profile>,
    passed: usize,
    modal: Option<ProfileModal>,
    tier: Tier,
}

impl MatchingView {
    pub async fn load(source: Arc<dyn CandidateSource>, count: usize, tier: Tier) -> Result<Self> {
        let queue: VecDeque<Profile> = source.fetch_candidate_queue(count).await?.into();
        tracing::debug!(count = queue.len(), "Candidate queue loaded");
        Ok(Self {
            source,
            queue,
            liked: Vec::new(),
            passed: 0,
            modal: None,
            tier,
        })
    }

    pub fn current(&self) -> Option<&Profile> {
        self.queue.front()
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn liked(&self) -> &[Profile] {
        &self.liked
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn set_tier(&mut self, tier: Tier) {
        self.tier = tier;
    }

    /// Decides on the current candidate and moves to the next one.
    ///
    /// Returns the candidate that was decided on. Closes an open modal.
    pub fn swipe(&mut self, swipe: Swipe) -> Result<Profile> {
        let profile = self
            .queue
            .pop_front()
            .ok_or_else(|| HeartlineError::validation("candidate", "no candidates left"))?;
        self.modal = None;
        match swipe {
            Swipe::Like => {
                tracing::info!(profile_id = profile.id, "Candidate liked");
                self.liked.push(profile.clone());
            }
            Swipe::Pass => {
                tracing::debug!(profile_id = profile.id, "Candidate passed");
                self.passed += 1;
            }
        }
        Ok(profile)
    }

    pub fn like(&mut self) -> Result<Profile> {
        self.swipe(Swipe::Like)
    }

    pub fn pass(&mut self) -> Result<Profile> {
        self.swipe(Swipe::Pass)
    }

    /// Appends one random candidate to the back of the queue.
    pub async fn discover(&mut self) -> Result<&Profile> {
        let profile = self.source.random_profile().await?;
        self.queue.push_back(profile);
        self.queue
            .back()
            .ok_or_else(|| HeartlineError::internal("candidate queue empty after push"))
    }

    /// Opens the detail modal for the current candidate.
    pub fn view_profile(&mut self) -> Result<&mut ProfileModal> {
        let profile = self
            .current()
            .cloned()
            .ok_or_else(|| HeartlineError::validation("candidate", "no candidates left"))?;
        let modal = ProfileModal::open(profile, self.tier)?;
        Ok(self.modal.insert(modal))
    }

    pub fn modal(&self) -> Option<&ProfileModal> {
        self.modal.as_ref()
    }

    pub fn modal_mut(&mut self) -> Option<&mut ProfileModal> {
        self.modal.as_mut()
    }

    pub fn close_profile(&mut self) -> bool {
        self.modal.take().is_some()
    }
}
