use async_trait::async_trait;

use super::model::{GrowthGoal, Profile};
use crate::error::Result;

/// Source of profiles to browse.
///
/// The bundled implementation serves fixed records; a real backend can be
/// swapped in without touching the views.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Looks up one profile. Unknown ids are `NotFound`.
    async fn fetch_profile(&self, id: u32) -> Result<Profile>;

    /// Returns up to `count` candidates in presentation order.
    async fn fetch_candidate_queue(&self, count: usize) -> Result<Vec<Profile>>;

    /// Picks one profile at random.
    async fn random_profile(&self) -> Result<Profile>;

    /// Growth goals of the signed-in user.
    async fn fetch_growth_goals(&self) -> Result<Vec<GrowthGoal>>;
}
