//! Virtual date planner.

use chrono::{DateTime, Utc};
use serde::Serialize;

use heartline_core::{HeartlineError, Result};

/// A kind of date that works over video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateIdea {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub duration_minutes: u16,
}

static DATE_IDEAS: [DateIdea; 5] = [
    DateIdea {
        id: 1,
        title: "Cook-along dinner",
        description: "Pick a recipe, shop separately and cook it together on camera.",
        duration_minutes: 90,
    },
    DateIdea {
        id: 2,
        title: "Movie night",
        description: "Start the same film at the same time and chat through it.",
        duration_minutes: 120,
    },
    DateIdea {
        id: 3,
        title: "Museum tour",
        description: "Walk through a museum's online collection side by side.",
        duration_minutes: 60,
    },
    DateIdea {
        id: 4,
        title: "Trivia duel",
        description: "Take turns asking questions from a shared quiz.",
        duration_minutes: 45,
    },
    DateIdea {
        id: 5,
        title: "Stargazing call",
        description: "Open a sky map app and find constellations from both windows.",
        duration_minutes: 45,
    },
];

pub fn date_ideas() -> &'static [DateIdea] {
    &DATE_IDEAS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedDate {
    pub id: u32,
    pub idea: DateIdea,
    pub with: String,
    pub at: DateTime<Utc>,
}

/// Dates planned in this session, soonest first.
#[derive(Debug, Clone)]
pub struct VirtualDatePlanner {
    planned: Vec<PlannedDate>,
    next_id: u32,
}

impl Default for VirtualDatePlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualDatePlanner {
    pub fn new() -> Self {
        Self {
            planned: Vec::new(),
            next_id: 1,
        }
    }

    pub fn planned(&self) -> &[PlannedDate] {
        &self.planned
    }

    /// Plans `idea_id` with `with` at `at`, which must be after `now`.
    pub fn plan(
        &mut self,
        idea_id: u32,
        with: &str,
        at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<&PlannedDate> {
        let idea = *DATE_IDEAS
            .iter()
            .find(|i| i.id == idea_id)
            .ok_or_else(|| HeartlineError::not_found("date idea", idea_id))?;
        let with = with.trim();
        if with.is_empty() {
            return Err(HeartlineError::validation("with", "name a date partner"));
        }
        if at <= now {
            return Err(HeartlineError::validation("at", "date must be in the future"));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.planned.push(PlannedDate {
            id,
            idea,
            with: with.to_string(),
            at,
        });
        self.planned.sort_by_key(|p| p.at);
        tracing::info!(id, idea = idea.title, %at, "Virtual date planned");

        self.planned
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| HeartlineError::internal("planned date missing after insert"))
    }

    pub fn cancel(&mut self, id: u32) -> Result<PlannedDate> {
        let index = self
            .planned
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| HeartlineError::not_found("planned date", id))?;
        tracing::debug!(id, "Virtual date cancelled");
        Ok(self.planned.remove(index))
    }
}
