//! Application root: the shell plus the view mounted for it.

use std::sync::Arc;

use heartline_core::config::AppConfig;
use heartline_core::icebreaker::IcebreakerGame;
use heartline_core::messaging::ConversationRepository;
use heartline_core::page::Page;
use heartline_core::profile::CandidateSource;
use heartline_core::subscription::SubscriptionService;
use heartline_core::suggestion::SuggestionSource;
use heartline_core::verification::{VerificationService, VerificationWizard, WizardOutcome};
use heartline_core::Result;

use crate::shell::{ActiveView, ShellCommand, ShellEvent, ShellState};
use crate::views::{
    MatchingView, MessagingView, MountedView, PaywallView, PersonalGrowthView, SettingsView,
    UserProfileView, VideoChatView, VirtualDatePlanner,
};

/// Backends the views talk to.
#[derive(Clone)]
pub struct Services {
    pub candidates: Arc<dyn CandidateSource>,
    pub conversations: Arc<dyn ConversationRepository>,
    pub verification: Arc<dyn VerificationService>,
    pub subscription: Arc<dyn SubscriptionService>,
    pub suggestions: Arc<dyn SuggestionSource>,
}

impl Services {
    /// Uses one provider for every backend except suggestions.
    pub fn from_provider<P>(provider: Arc<P>, suggestions: Arc<dyn SuggestionSource>) -> Self
    where
        P: CandidateSource
            + ConversationRepository
            + VerificationService
            + SubscriptionService
            + 'static,
    {
        Self {
            candidates: provider.clone(),
            conversations: provider.clone(),
            verification: provider.clone(),
            subscription: provider,
            suggestions,
        }
    }
}

/// The running client.
///
/// Holds the [`ShellState`] and exactly one mounted view. Every shell change
/// goes through [`App::dispatch`]; when it changes what should be on screen
/// the old view is dropped and a new one mounted.
pub struct App {
    shell: ShellState,
    active: ActiveView,
    view: MountedView,
    services: Services,
    config: AppConfig,
}

impl App {
    pub fn new(services: Services, config: AppConfig) -> Self {
        let shell = ShellState::new(config.gating_policy);
        Self {
            active: shell.active_view(),
            shell,
            view: MountedView::Verification(VerificationWizard::new()),
            services,
            config,
        }
    }

    pub fn shell(&self) -> &ShellState {
        &self.shell
    }

    pub fn active_view(&self) -> ActiveView {
        self.active
    }

    pub fn view(&self) -> &MountedView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut MountedView {
        &mut self.view
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Applies a shell command.
    ///
    /// Tier changes are confirmed with the subscription backend first; if it
    /// refuses, nothing changes. If the new view cannot be mounted the shell
    /// is restored and the previous view stays.
    pub async fn dispatch(&mut self, command: ShellCommand) -> Result<ShellEvent> {
        let target_tier = match &command {
            ShellCommand::Upgrade(tier) => Some(*tier),
            ShellCommand::ToggleSubscription => Some(self.shell.subscription().next()),
            _ => None,
        };
        if let Some(tier) = target_tier {
            if tier != self.shell.subscription() {
                self.services.subscription.upgrade_subscription(tier).await?;
            }
        }

        let previous = self.shell.clone();
        let event = self.shell.apply(command);

        let active = self.shell.active_view();
        if active != self.active {
            match self.mount(active).await {
                Ok(view) => {
                    tracing::debug!(from = self.view.name(), to = view.name(), "View mounted");
                    self.view = view;
                    self.active = active;
                }
                Err(err) => {
                    tracing::warn!(error = %err, ?active, "Failed to mount view");
                    self.shell = previous;
                    return Err(err);
                }
            }
        } else if matches!(event, ShellEvent::TierChanged { .. }) {
            self.refresh_tier();
        }
        Ok(event)
    }

    pub async fn navigate(&mut self, page: Page) -> Result<ShellEvent> {
        self.dispatch(ShellCommand::Navigate(page)).await
    }

    /// Presses the wizard's submit button.
    ///
    /// Finishing the last step sends everything to the verification backend
    /// and then marks the shell verified. A backend failure reopens the
    /// wizard on its review step.
    pub async fn submit_verification(&mut self) -> Result<WizardOutcome> {
        let wizard = self.view.wizard()?;
        let outcome = wizard.submit()?;
        if outcome == WizardOutcome::Completed {
            if let Err(err) = self
                .services
                .verification
                .submit_verification(wizard.photos(), wizard.personal_info())
                .await
            {
                tracing::warn!(error = %err, "Verification rejected");
                wizard.reopen();
                return Err(err);
            }
            self.dispatch(ShellCommand::MarkVerified).await?;
        }
        Ok(outcome)
    }

    async fn mount(&self, active: ActiveView) -> Result<MountedView> {
        let tier = self.shell.subscription();
        let page = match active {
            ActiveView::Verification => {
                return Ok(MountedView::Verification(VerificationWizard::new()));
            }
            ActiveView::Paywall(feature) => {
                return Ok(MountedView::Paywall(PaywallView::new(feature)));
            }
            ActiveView::Page(page) => page,
        };

        let view = match page {
            Page::Verification => MountedView::Verification(VerificationWizard::new()),
            Page::Profile => {
                MountedView::Profile(UserProfileView::new(self.shell.user().clone(), tier))
            }
            Page::Matching => MountedView::Matching(
                MatchingView::load(
                    self.services.candidates.clone(),
                    self.config.candidate_queue_size,
                    tier,
                )
                .await?,
            ),
            Page::Messaging => MountedView::Messaging(
                MessagingView::load(
                    self.services.conversations.clone(),
                    self.services.suggestions.clone(),
                    self.config.suggestion_delay(),
                    &self.shell.user().id,
                    self.shell.entitlements(),
                )
                .await?,
            ),
            Page::PersonalGrowth => MountedView::PersonalGrowth(
                PersonalGrowthView::load(self.services.candidates.clone()).await?,
            ),
            Page::Icebreakers => MountedView::Icebreakers(IcebreakerGame::new()),
            Page::VirtualDate => MountedView::VirtualDate(VirtualDatePlanner::new()),
            Page::VideoChat => MountedView::VideoChat(VideoChatView::new()),
            Page::Settings => MountedView::Settings(SettingsView::new(tier, &self.config)),
        };
        Ok(view)
    }

    fn refresh_tier(&mut self) {
        let tier = self.shell.subscription();
        match &mut self.view {
            MountedView::Profile(view) => view.update(self.shell.user().clone(), tier),
            MountedView::Matching(view) => view.set_tier(tier),
            MountedView::Messaging(view) => view.set_entitlements(self.shell.entitlements()),
            MountedView::Settings(view) => view.set_tier(tier),
            _ => {}
        }
    }
}
