use async_trait::async_trait;

use super::model::{PersonalInfo, PhotoUpload};
use crate::error::Result;

/// Backend that reviews a finished verification wizard.
#[async_trait]
pub trait VerificationService: Send + Sync {
    async fn submit_verification(
        &self,
        photos: &[PhotoUpload],
        personal_info: &PersonalInfo,
    ) -> Result<()>;
}
