//! Plan picker shared by the paywall and the settings page.

use heartline_core::subscription::{Feature, SubscriptionPlan, Tier, plans};
use heartline_core::{HeartlineError, Result};

use crate::shell::ShellCommand;

/// Shown instead of a premium page the user is not entitled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaywallView {
    feature: Feature,
}

impl PaywallView {
    pub fn new(feature: Feature) -> Self {
        Self { feature }
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }

    pub fn headline(&self) -> String {
        format!("Upgrade to unlock {}", self.feature)
    }

    pub fn plans(&self) -> &'static [SubscriptionPlan] {
        plans()
    }

    pub fn choose(&self, tier: Tier) -> Result<ShellCommand> {
        choose_plan(tier)
    }
}

/// Turns a plan choice into the upgrade command. Only paid tiers are offered.
pub fn choose_plan(tier: Tier) -> Result<ShellCommand> {
    if !tier.is_paid() {
        return Err(HeartlineError::validation(
            "tier",
            format!("{tier} is not a purchasable plan"),
        ));
    }
    Ok(ShellCommand::Upgrade(tier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_emits_upgrade() {
        let paywall = PaywallView::new(Feature::Icebreakers);
        assert_eq!(paywall.headline(), "Upgrade to unlock Icebreaker Games");
        assert_eq!(
            paywall.choose(Tier::Premium).unwrap(),
            ShellCommand::Upgrade(Tier::Premium)
        );
        assert!(paywall.choose(Tier::Free).unwrap_err().is_validation());
        assert_eq!(paywall.plans().len(), 3);
    }
}
