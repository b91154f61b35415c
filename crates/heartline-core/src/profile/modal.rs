//! Detail overlay for a single profile.

use super::model::{GrowthGoal, Profile};
use crate::error::{HeartlineError, Result};
use crate::subscription::Tier;

/// Photo carousel plus profile details.
///
/// Navigation wraps in both directions. Fullscreen only changes layout.
#[derive(Debug, Clone)]
pub struct ProfileModal {
    profile: Profile,
    tier: Tier,
    photo_index: usize,
    fullscreen: bool,
}

impl ProfileModal {
    /// Opens the modal on the first photo.
    ///
    /// A profile without photos cannot be displayed.
    pub fn open(profile: Profile, tier: Tier) -> Result<Self> {
        if profile.photos.is_empty() {
            return Err(HeartlineError::validation(
                "photos",
                format!("profile {} has no photos to display", profile.id),
            ));
        }
        Ok(Self {
            profile,
            tier,
            photo_index: 0,
            fullscreen: false,
        })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn photo_index(&self) -> usize {
        self.photo_index
    }

    pub fn photo_count(&self) -> usize {
        self.profile.photos.len()
    }

    pub fn current_photo(&self) -> &str {
        &self.profile.photos[self.photo_index]
    }

    pub fn next_photo(&mut self) -> usize {
        self.photo_index = (self.photo_index + 1) % self.photo_count();
        self.photo_index
    }

    pub fn prev_photo(&mut self) -> usize {
        let len = self.photo_count();
        self.photo_index = (self.photo_index + len - 1) % len;
        self.photo_index
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    /// Growth goals are visible to paying subscribers when the profile has any.
    pub fn visible_growth_goals(&self) -> Option<&[GrowthGoal]> {
        if !self.tier.is_paid() {
            return None;
        }
        self.profile
            .growth_goals
            .as_deref()
            .filter(|goals| !goals.is_empty())
    }
}
