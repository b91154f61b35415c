use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Subscription level, ordered from cheapest to most expensive.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Tier {
    #[default]
    Free,
    Basic,
    Premium,
    Elite,
}

impl Tier {
    /// Any tier other than `Free`.
    pub fn is_paid(self) -> bool {
        self != Tier::Free
    }

    /// The tier after this one in `[free, basic, premium, elite]`, wrapping.
    pub fn next(self) -> Tier {
        let all: Vec<Tier> = Tier::iter().collect();
        let index = all.iter().position(|t| *t == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    /// Tiers a user can buy.
    pub fn paid() -> impl Iterator<Item = Tier> {
        Tier::iter().filter(|t| t.is_paid())
    }
}

/// Something a tier can unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    #[strum(to_string = "Personal Growth")]
    PersonalGrowth,
    #[strum(to_string = "Icebreaker Games")]
    Icebreakers,
    #[strum(to_string = "Virtual Date Planner")]
    VirtualDate,
    /// The video chat page reached from the navigation bar.
    #[strum(to_string = "Video Chat")]
    VideoChat,
    /// The suggestion widget inside a conversation.
    #[strum(to_string = "Rizz AI")]
    RizzAi,
    /// The call button in a conversation header.
    #[strum(to_string = "Video Call")]
    VideoCall,
}
