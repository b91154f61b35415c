use serde::Serialize;

use super::tier::Tier;

/// A purchasable plan as shown on the paywall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionPlan {
    pub tier: Tier,
    pub name: &'static str,
    /// Monthly price in cents.
    pub price_cents: u32,
    pub features: &'static [&'static str],
}

impl SubscriptionPlan {
    /// Price formatted as `$14.99`.
    pub fn price_label(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

const PLANS: [SubscriptionPlan; 3] = [
    SubscriptionPlan {
        tier: Tier::Basic,
        name: "Basic",
        price_cents: 1499,
        features: &[
            "Access to Rizz AI for smart conversation suggestions",
            "Personal Growth tools",
            "Icebreaker Games",
            "Ad-free experience",
        ],
    },
    SubscriptionPlan {
        tier: Tier::Premium,
        name: "Premium",
        price_cents: 4999,
        features: &[
            "All Basic features",
            "Video Chat functionality",
            "Virtual Date Planner",
            "See who likes you",
            "Unlimited likes",
            "Advanced filters",
        ],
    },
    SubscriptionPlan {
        tier: Tier::Elite,
        name: "Elite",
        price_cents: 99999,
        features: &[
            "All Premium features",
            "Super Like Blast (message everyone within 50 miles)",
            "Priority customer support",
            "Exclusive events access",
            "Profile boost once a week",
        ],
    },
];

/// The three paid plans in display order.
pub fn plans() -> &'static [SubscriptionPlan] {
    &PLANS
}

pub fn plan_for(tier: Tier) -> Option<&'static SubscriptionPlan> {
    plans().iter().find(|p| p.tier == tier)
}
