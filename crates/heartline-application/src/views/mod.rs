//! Feature views mounted by the [`App`](crate::App).
//!
//! # Module Structure
//!
//! - `messaging`: Conversations, thread, compose box and the Rizz AI widget
//! - `matching`: Candidate queue and the profile modal
//! - `personal_growth`, `virtual_date`, `video_chat`: Premium pages
//! - `user_profile`, `settings`: Account pages
//! - `paywall`: Plan picker shown in place of locked pages
//!
//! The verification wizard and the icebreaker game need no backend and are
//! used straight from `heartline_core`.

mod matching;
mod messaging;
mod paywall;
mod personal_growth;
mod settings;
mod user_profile;
mod video_chat;
mod virtual_date;

pub use matching::{MatchingView, Swipe};
pub use messaging::MessagingView;
pub use paywall::{PaywallView, choose_plan};
pub use personal_growth::PersonalGrowthView;
pub use settings::SettingsView;
pub use user_profile::UserProfileView;
pub use video_chat::{CallState, VideoChatView};
pub use virtual_date::{DateIdea, PlannedDate, VirtualDatePlanner, date_ideas};

use heartline_core::icebreaker::IcebreakerGame;
use heartline_core::verification::VerificationWizard;
use heartline_core::{HeartlineError, Result};

/// The view currently on screen. Replacing it drops the previous view and
/// everything it owns.
pub enum MountedView {
    Verification(VerificationWizard),
    Paywall(PaywallView),
    Profile(UserProfileView),
    Matching(MatchingView),
    Messaging(MessagingView),
    PersonalGrowth(PersonalGrowthView),
    Icebreakers(IcebreakerGame),
    VirtualDate(VirtualDatePlanner),
    VideoChat(VideoChatView),
    Settings(SettingsView),
}

macro_rules! view_accessor {
    ($name:ident, $variant:ident, $ty:ty, $label:literal) => {
        pub fn $name(&mut self) -> Result<&mut $ty> {
            match self {
                MountedView::$variant(view) => Ok(view),
                other => Err(HeartlineError::validation(
                    "view",
                    format!("{} is not open (showing {})", $label, other.name()),
                )),
            }
        }
    };
}

impl MountedView {
    pub fn name(&self) -> &'static str {
        match self {
            MountedView::Verification(_) => "verification",
            MountedView::Paywall(_) => "paywall",
            MountedView::Profile(_) => "profile",
            MountedView::Matching(_) => "matching",
            MountedView::Messaging(_) => "messaging",
            MountedView::PersonalGrowth(_) => "personal growth",
            MountedView::Icebreakers(_) => "icebreakers",
            MountedView::VirtualDate(_) => "virtual date",
            MountedView::VideoChat(_) => "video chat",
            MountedView::Settings(_) => "settings",
        }
    }

    view_accessor!(wizard, Verification, VerificationWizard, "verification");
    view_accessor!(paywall, Paywall, PaywallView, "paywall");
    view_accessor!(matching, Matching, MatchingView, "matching");
    view_accessor!(messaging, Messaging, MessagingView, "messaging");
    view_accessor!(growth, PersonalGrowth, PersonalGrowthView, "personal growth");
    view_accessor!(icebreakers, Icebreakers, IcebreakerGame, "icebreakers");
    view_accessor!(virtual_date, VirtualDate, VirtualDatePlanner, "virtual date");
    view_accessor!(video_chat, VideoChat, VideoChatView, "video chat");
    view_accessor!(settings, Settings, SettingsView, "settings");
}
