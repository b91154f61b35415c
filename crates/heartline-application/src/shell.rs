//! Root shell state.
//!
//! All top-level state changes go through [`ShellState::apply`], which takes a
//! [`ShellCommand`] and reports what changed as a [`ShellEvent`].

use serde::Serialize;

use heartline_core::page::Page;
use heartline_core::subscription::{Entitlements, Feature, GatingPolicy, Tier};
use heartline_core::user::User;

/// Commands accepted by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Switch page. No validation: gating happens when rendering.
    Navigate(Page),
    /// Switch page by key; unknown keys land on the matching page.
    NavigateKey(String),
    /// Set the tier and re-derive `user.premium`.
    Upgrade(Tier),
    /// Advance to the next tier in `[free, basic, premium, elite]`, wrapping.
    ToggleSubscription,
    /// The verification wizard finished.
    MarkVerified,
}

/// What a command changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    PageChanged { from: Page, to: Page },
    TierChanged { from: Tier, to: Tier },
    Verified,
    Unchanged,
}

/// What the shell renders right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    /// Shown until the user is verified, whatever page is selected.
    Verification,
    /// A premium page the user is not entitled to.
    Paywall(Feature),
    Page(Page),
}

#[derive(Debug, Clone, Serialize)]
pub struct ShellState {
    current_page: Page,
    is_verified: bool,
    subscription: Tier,
    user: User,
    #[serde(skip)]
    policy: GatingPolicy,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(GatingPolicy::default())
    }
}

impl ShellState {
    pub fn new(policy: GatingPolicy) -> Self {
        Self {
            current_page: Page::Matching,
            is_verified: false,
            subscription: Tier::Free,
            user: User::default(),
            policy,
        }
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn is_verified(&self) -> bool {
        self.is_verified
    }

    pub fn subscription(&self) -> Tier {
        self.subscription
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn policy(&self) -> GatingPolicy {
        self.policy
    }

    pub fn entitlements(&self) -> Entitlements {
        Entitlements::new(self.subscription, self.user.premium, self.policy)
    }

    /// Header line under the app title.
    pub fn header_label(&self) -> String {
        format!("Current Subscription: {}", self.subscription)
    }

    pub fn active_view(&self) -> ActiveView {
        if !self.is_verified {
            return ActiveView::Verification;
        }
        match self.current_page.gated_feature() {
            Some(feature) if !self.entitlements().allows(feature) => ActiveView::Paywall(feature),
            _ => ActiveView::Page(self.current_page),
        }
    }

    pub fn apply(&mut self, command: ShellCommand) -> ShellEvent {
        let event = match command {
            ShellCommand::Navigate(page) => self.navigate(page),
            ShellCommand::NavigateKey(key) => self.navigate(Page::from_key(&key)),
            ShellCommand::Upgrade(tier) => self.set_tier(tier),
            ShellCommand::ToggleSubscription => self.set_tier(self.subscription.next()),
            ShellCommand::MarkVerified => {
                if self.is_verified {
                    ShellEvent::Unchanged
                } else {
                    self.is_verified = true;
                    ShellEvent::Verified
                }
            }
        };
        tracing::debug!(?event, "Shell command applied");
        event
    }

    fn navigate(&mut self, page: Page) -> ShellEvent {
        let from = self.current_page;
        self.current_page = page;
        if from == page {
            ShellEvent::Unchanged
        } else {
            tracing::info!(%from, to = %page, "Navigated");
            ShellEvent::PageChanged { from, to: page }
        }
    }

    fn set_tier(&mut self, tier: Tier) -> ShellEvent {
        let from = self.subscription;
        self.subscription = tier;
        self.user.apply_tier(tier);
        if from == tier {
            ShellEvent::Unchanged
        } else {
            tracing::info!(%from, to = %tier, premium = self.user.premium, "Subscription changed");
            ShellEvent::TierChanged { from, to: tier }
        }
    }
}
