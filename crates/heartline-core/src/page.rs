//! Top-level pages reachable from the navigation bar.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::subscription::Feature;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Page {
    Verification,
    Profile,
    #[default]
    Matching,
    Messaging,
    PersonalGrowth,
    Icebreakers,
    VirtualDate,
    VideoChat,
    Settings,
}

/// Navigation bar entries, left to right.
pub const NAV_BAR: [Page; 8] = [
    Page::Profile,
    Page::Matching,
    Page::Messaging,
    Page::PersonalGrowth,
    Page::Icebreakers,
    Page::VirtualDate,
    Page::VideoChat,
    Page::Settings,
];

impl Page {
    /// Resolves a page key, falling back to `Matching` for unknown keys.
    pub fn from_key(key: &str) -> Page {
        key.parse().unwrap_or_default()
    }

    /// The feature a page sits behind, if it is a premium page.
    pub fn gated_feature(self) -> Option<Feature> {
        match self {
            Page::PersonalGrowth => Some(Feature::PersonalGrowth),
            Page::Icebreakers => Some(Feature::Icebreakers),
            Page::VirtualDate => Some(Feature::VirtualDate),
            Page::VideoChat => Some(Feature::VideoChat),
            _ => None,
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Verification => "Verify",
            Page::Profile => "Profile",
            Page::Matching => "Match",
            Page::Messaging => "Messages",
            Page::PersonalGrowth => "Growth",
            Page::Icebreakers => "Icebreakers",
            Page::VirtualDate => "Virtual Date",
            Page::VideoChat => "Video Chat",
            Page::Settings => "Settings",
        }
    }
}
