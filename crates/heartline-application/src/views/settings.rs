//! Settings page.

use heartline_core::config::AppConfig;
use heartline_core::subscription::{GatingPolicy, SubscriptionPlan, Tier, plan_for, plans};
use heartline_core::Result;

use super::paywall::choose_plan;
use crate::shell::ShellCommand;

#[derive(Debug, Clone)]
pub struct SettingsView {
    tier: Tier,
    policy: GatingPolicy,
    suggestion_delay_ms: u64,
}

impl SettingsView {
    pub fn new(tier: Tier, config: &AppConfig) -> Self {
        Self {
            tier,
            policy: config.gating_policy,
            suggestion_delay_ms: config.suggestion_delay_ms,
        }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn set_tier(&mut self, tier: Tier) {
        self.tier = tier;
    }

    pub fn policy(&self) -> GatingPolicy {
        self.policy
    }

    pub fn suggestion_delay_ms(&self) -> u64 {
        self.suggestion_delay_ms
    }

    /// The plan currently held, `None` on the free tier.
    pub fn current_plan(&self) -> Option<&'static SubscriptionPlan> {
        plan_for(self.tier)
    }

    pub fn plans(&self) -> &'static [SubscriptionPlan] {
        plans()
    }

    pub fn upgrade(&self, tier: Tier) -> Result<ShellCommand> {
        choose_plan(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_plan() {
        let mut view = SettingsView::new(Tier::Free, &AppConfig::default());
        assert!(view.current_plan().is_none());
        view.set_tier(Tier::Elite);
        assert_eq!(view.current_plan().unwrap().price_label(), "$999.99");
        assert_eq!(view.suggestion_delay_ms(), 1500);
    }

    #[test]
    fn test_upgrade_matches_paywall() {
        let view = SettingsView::new(Tier::Basic, &AppConfig::default());
        assert_eq!(
            view.upgrade(Tier::Elite).unwrap(),
            ShellCommand::Upgrade(Tier::Elite)
        );
        assert!(view.upgrade(Tier::Free).is_err());
    }
}
