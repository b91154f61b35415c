use serde::{Deserialize, Serialize};

use super::tier::{Feature, Tier};
use crate::error::{HeartlineError, Result};

/// How premium features are gated.
///
/// `Threshold` gives every feature a minimum tier and lets anything above it
/// through. `Legacy` keeps the historical rules: navigation pages check the
/// user's premium flag while the conversation widgets require exactly the
/// premium tier, so elite subscribers lose them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatingPolicy {
    #[default]
    Threshold,
    Legacy,
}

/// Snapshot of what the current user is allowed to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entitlements {
    tier: Tier,
    user_premium: bool,
    policy: GatingPolicy,
}

impl Entitlements {
    pub fn new(tier: Tier, user_premium: bool, policy: GatingPolicy) -> Self {
        Self {
            tier,
            user_premium,
            policy,
        }
    }

    /// Entitlements for a tier where the premium flag is derived from it.
    pub fn for_tier(tier: Tier, policy: GatingPolicy) -> Self {
        Self::new(tier, tier.is_paid(), policy)
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn policy(&self) -> GatingPolicy {
        self.policy
    }

    /// Lowest tier that unlocks `feature` under the active policy.
    pub fn required_tier(&self, feature: Feature) -> Tier {
        match (self.policy, feature) {
            (_, Feature::PersonalGrowth)
            | (_, Feature::Icebreakers)
            | (_, Feature::VirtualDate)
            | (_, Feature::VideoChat) => Tier::Basic,
            (GatingPolicy::Threshold, Feature::RizzAi) => Tier::Basic,
            (GatingPolicy::Threshold, Feature::VideoCall) => Tier::Premium,
            (GatingPolicy::Legacy, Feature::RizzAi | Feature::VideoCall) => Tier::Premium,
        }
    }

    pub fn allows(&self, feature: Feature) -> bool {
        match self.policy {
            GatingPolicy::Threshold => self.tier >= self.required_tier(feature),
            GatingPolicy::Legacy => match feature {
                Feature::RizzAi | Feature::VideoCall => self.tier == Tier::Premium,
                _ => self.user_premium,
            },
        }
    }

    /// Like [`allows`](Self::allows) but produces an `Entitlement` error.
    pub fn require(&self, feature: Feature) -> Result<()> {
        if self.allows(feature) {
            Ok(())
        } else {
            tracing::warn!(%feature, tier = %self.tier, "Feature locked for tier");
            Err(HeartlineError::entitlement(
                feature,
                self.required_tier(feature),
            ))
        }
    }
}
