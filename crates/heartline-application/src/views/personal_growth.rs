//! Personal growth page.

use std::sync::Arc;

use heartline_core::profile::{CandidateSource, GrowthGoal};
use heartline_core::{HeartlineError, Result};

#[derive(Debug, Clone)]
pub struct PersonalGrowthView {
    goals: Vec<GrowthGoal>,
}

impl PersonalGrowthView {
    pub async fn load(source: Arc<dyn CandidateSource>) -> Result<Self> {
        let goals = source.fetch_growth_goals().await?;
        Ok(Self::new(goals))
    }

    pub fn new(goals: Vec<GrowthGoal>) -> Self {
        Self { goals }
    }

    pub fn goals(&self) -> &[GrowthGoal] {
        &self.goals
    }

    /// Sets a goal's progress, in percent.
    pub fn update_progress(&mut self, goal_id: u32, progress: u8) -> Result<&GrowthGoal> {
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| HeartlineError::not_found("growth goal", goal_id))?;
        goal.set_progress(progress)?;
        tracing::debug!(goal_id, progress, "Growth goal updated");
        Ok(goal)
    }

    /// Mean progress over all goals, or 0 with no goals.
    pub fn average_progress(&self) -> f32 {
        if self.goals.is_empty() {
            return 0.0;
        }
        let total: u32 = self.goals.iter().map(|g| u32::from(g.progress)).sum();
        total as f32 / self.goals.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goals() -> Vec<GrowthGoal> {
        [(1, 60), (2, 40), (3, 25)]
            .into_iter()
            .map(|(id, progress)| GrowthGoal {
                id,
                title: format!("Goal {id}"),
                description: String::new(),
                progress,
            })
            .collect()
    }

    #[test]
    fn test_update_progress() {
        let mut view = PersonalGrowthView::new(goals());
        assert_eq!(view.update_progress(2, 100).unwrap().progress, 100);
        assert!(view.update_progress(2, 101).unwrap_err().is_validation());
        assert_eq!(view.goals()[1].progress, 100);
        assert!(view.update_progress(7, 10).unwrap_err().is_not_found());
    }

    #[test]
    fn test_average_progress() {
        let view = PersonalGrowthView::new(goals());
        assert!((view.average_progress() - 41.666_668).abs() < 1e-4);
        assert_eq!(PersonalGrowthView::new(vec![]).average_progress(), 0.0);
    }
}
