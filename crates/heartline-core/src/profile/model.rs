//! Profile domain model.

use serde::{Deserialize, Serialize};

use crate::error::{HeartlineError, Result};

/// A free-form answer to one icebreaker question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcebreakerAnswer {
    pub question: String,
    pub answer: String,
}

impl IcebreakerAnswer {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A personal goal with a completion percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthGoal {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Completion in percent, 0 to 100.
    pub progress: u8,
}

impl GrowthGoal {
    pub fn set_progress(&mut self, progress: u8) -> Result<()> {
        if progress > 100 {
            return Err(HeartlineError::validation(
                "progress",
                format!("{progress} is outside 0-100"),
            ));
        }
        self.progress = progress;
        Ok(())
    }
}

/// Someone shown to the user as a potential match.
///
/// Profiles are handed out by a [`CandidateSource`](super::CandidateSource)
/// and never mutated by the views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub location: String,
    pub bio: String,
    /// Photo references in display order.
    pub photos: Vec<String>,
    pub interests: Vec<String>,
    pub values: Vec<String>,
    /// 0 to 100.
    pub compatibility_score: u8,
    pub premium: bool,
    pub icebreaker_answers: Vec<IcebreakerAnswer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_goals: Option<Vec<GrowthGoal>>,
}

impl Profile {
    /// `name, age` headline used by cards and the modal.
    pub fn headline(&self) -> String {
        format!("{}, {}", self.name, self.age)
    }

    pub fn has_growth_goals(&self) -> bool {
        self.growth_goals.as_ref().is_some_and(|g| !g.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_progress_bounds() {
        let mut goal = GrowthGoal {
            id: 1,
            title: "Run".to_string(),
            description: "Half marathon".to_string(),
            progress: 40,
        };
        goal.set_progress(100).unwrap();
        assert_eq!(goal.progress, 100);

        let err = goal.set_progress(101).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(goal.progress, 100);
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let profile = Profile {
            id: 1,
            name: "Sam".to_string(),
            age: 30,
            location: "Austin, TX".to_string(),
            bio: String::new(),
            photos: vec!["a.jpg".to_string()],
            interests: vec![],
            values: vec![],
            compatibility_score: 80,
            premium: false,
            icebreaker_answers: vec![],
            growth_goals: None,
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["compatibilityScore"], 80);
        assert!(json.get("growthGoals").is_none());
        assert_eq!(profile.headline(), "Sam, 30");
        assert!(!profile.has_growth_goals());
    }
}
