//! User domain model.
//!
//! The signed-in account as the client sees it.

use serde::{Deserialize, Serialize};

use crate::subscription::Tier;

/// The signed-in user.
///
/// `premium` is never set directly; it is derived from the subscription
/// tier every time the tier changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub premium: bool,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            premium: false,
        }
    }
}

impl User {
    /// Re-derives the premium flag for a new tier.
    pub fn apply_tier(&mut self, tier: Tier) {
        self.premium = tier.is_paid();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_is_not_premium() {
        let user = User::default();
        assert_eq!(user.id, "1");
        assert!(!user.premium);
    }

    #[test]
    fn test_apply_tier() {
        let mut user = User::default();
        for tier in [Tier::Basic, Tier::Premium, Tier::Elite] {
            user.apply_tier(tier);
            assert!(user.premium);
        }
        user.apply_tier(Tier::Free);
        assert!(!user.premium);
    }
}
