use async_trait::async_trait;

use super::tier::Tier;
use crate::error::Result;

/// Backend that records a tier change.
///
/// No payment is taken; implementations only confirm or reject the switch.
#[async_trait]
pub trait SubscriptionService: Send + Sync {
    async fn upgrade_subscription(&self, tier: Tier) -> Result<()>;
}
