//! End-to-end flows through the shell, the mounted views and the mock backend.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use heartline_application::{ActiveView, App, ShellCommand, ShellEvent, Services};
use heartline_core::config::AppConfig;
use heartline_core::icebreaker::GamePhase;
use heartline_core::page::Page;
use heartline_core::subscription::{Feature, GatingPolicy, Tier};
use heartline_core::suggestion::SuggestionSource;
use heartline_core::verification::{PersonalInfoField, PhotoUpload, WizardOutcome};
use heartline_core::{HeartlineError, Result};
use heartline_infrastructure::{CANNED_SUGGESTIONS, CannedSuggestionSource, MockDataService};

struct CountingSource {
    calls: AtomicUsize,
}

#[async_trait]
impl SuggestionSource for CountingSource {
    async fn suggest(&self, _context: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("Ask about their weekend".to_string())
    }
}

fn app_with(provider: MockDataService, config: AppConfig) -> (App, Arc<MockDataService>) {
    let provider = Arc::new(provider);
    let services = Services::from_provider(provider.clone(), Arc::new(CannedSuggestionSource));
    (App::new(services, config), provider)
}

async fn complete_verification(app: &mut App) -> Result<WizardOutcome> {
    let wizard = app.view_mut().wizard()?;
    wizard.add_photos([PhotoUpload::new("me.jpg", 2048)]);
    app.submit_verification().await?;

    let wizard = app.view_mut().wizard()?;
    wizard.set_field(PersonalInfoField::Name, "John Doe");
    wizard.set_field(PersonalInfoField::Birthdate, "1990-01-01");
    wizard.set_field(PersonalInfoField::Gender, "Man");
    wizard.set_field(PersonalInfoField::Interests, "Hiking, Jazz");
    wizard.set_field(PersonalInfoField::Bio, "Hi there");
    app.submit_verification().await?;

    app.submit_verification().await
}

async fn verified_app(config: AppConfig) -> (App, Arc<MockDataService>) {
    let (mut app, provider) = app_with(MockDataService::new(), config);
    complete_verification(&mut app).await.unwrap();
    (app, provider)
}

#[tokio::test]
async fn test_verification_unlocks_matching() {
    let (mut app, _) = app_with(MockDataService::new(), AppConfig::default());
    assert_eq!(app.active_view(), ActiveView::Verification);

    assert_eq!(
        complete_verification(&mut app).await.unwrap(),
        WizardOutcome::Completed
    );
    assert!(app.shell().is_verified());
    assert_eq!(app.active_view(), ActiveView::Page(Page::Matching));

    let matching = app.view_mut().matching().unwrap();
    assert_eq!(matching.remaining(), 3);
    assert_eq!(matching.current().unwrap().name, "Sarah Smith");
}

#[tokio::test]
async fn test_rejected_verification_can_be_resubmitted() {
    let provider = MockDataService::new()
        .with_verification_failure(HeartlineError::transient("verification backend down"));
    let (mut app, _) = app_with(provider, AppConfig::default());

    let err = complete_verification(&mut app).await.unwrap_err();
    assert!(err.is_retryable());
    assert!(!app.shell().is_verified());

    let wizard = app.view_mut().wizard().unwrap();
    assert!(!wizard.is_completed());
    assert_eq!(wizard.personal_info().interest_list(), vec!["Hiking", "Jazz"]);
}

#[tokio::test]
async fn test_free_user_sees_paywall_until_upgrade() {
    let (mut app, _) = verified_app(AppConfig::default()).await;

    app.navigate(Page::Icebreakers).await.unwrap();
    assert_eq!(
        app.active_view(),
        ActiveView::Paywall(Feature::Icebreakers)
    );

    let command = app.view_mut().paywall().unwrap().choose(Tier::Basic).unwrap();
    let event = app.dispatch(command).await.unwrap();
    assert_eq!(
        event,
        ShellEvent::TierChanged {
            from: Tier::Free,
            to: Tier::Basic
        }
    );
    assert!(app.shell().user().premium);
    assert_eq!(app.active_view(), ActiveView::Page(Page::Icebreakers));

    let game = app.view_mut().icebreakers().unwrap();
    assert_eq!(game.phase(), GamePhase::NotStarted);
}

#[tokio::test]
async fn test_failed_upgrade_changes_nothing() {
    let provider = MockDataService::new().with_upgrade_failure(HeartlineError::session("expired"));
    let (mut app, _) = app_with(provider, AppConfig::default());
    complete_verification(&mut app).await.unwrap();
    app.navigate(Page::PersonalGrowth).await.unwrap();

    let err = app.dispatch(ShellCommand::ToggleSubscription).await.unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(app.shell().subscription(), Tier::Free);
    assert!(!app.shell().user().premium);
    assert_eq!(
        app.active_view(),
        ActiveView::Paywall(Feature::PersonalGrowth)
    );
}

#[tokio::test]
async fn test_unknown_page_key_lands_on_matching() {
    let (mut app, _) = verified_app(AppConfig::default()).await;
    app.navigate(Page::Settings).await.unwrap();
    app.dispatch(ShellCommand::NavigateKey("nowhere".into()))
        .await
        .unwrap();
    assert_eq!(app.shell().current_page(), Page::Matching);
    assert!(app.view_mut().matching().is_ok());
}

#[tokio::test]
async fn test_messaging_send_reaches_backend() {
    let (mut app, provider) = verified_app(AppConfig::default()).await;
    app.navigate(Page::Messaging).await.unwrap();

    let messaging = app.view_mut().messaging().unwrap();
    assert_eq!(messaging.conversations().len(), 3);
    messaging.select(1).await.unwrap();
    assert_eq!(messaging.messages().len(), 3);

    messaging.set_compose(" \t ");
    assert!(messaging.send().await.unwrap().is_none());
    assert_eq!(messaging.messages().len(), 3);

    messaging.set_compose("Brunch on Sunday?");
    let sent = messaging.send().await.unwrap().unwrap();
    assert_eq!(sent.id, 4);
    assert!(sent.is_outgoing());

    let delivered = provider.sent_messages();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].0, 1);
    assert_eq!(delivered[0].1.content, "Brunch on Sunday?");
}

#[tokio::test(start_paused = true)]
async fn test_leaving_messaging_cancels_pending_suggestion() {
    let source = Arc::new(CountingSource {
        calls: AtomicUsize::new(0),
    });
    let provider = Arc::new(MockDataService::new());
    let services = Services::from_provider(provider, source.clone());
    let mut app = App::new(services, AppConfig::default());
    complete_verification(&mut app).await.unwrap();
    app.dispatch(ShellCommand::Upgrade(Tier::Basic)).await.unwrap();
    app.navigate(Page::Messaging).await.unwrap();

    let messaging = app.view_mut().messaging().unwrap();
    messaging.select(2).await.unwrap();
    messaging.toggle_rizz().unwrap();
    assert!(messaging.request_suggestion("weekend plans").unwrap());

    app.navigate(Page::Settings).await.unwrap();
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_canned_suggestion_lands_in_compose() {
    let (mut app, _) = verified_app(AppConfig::default()).await;
    app.dispatch(ShellCommand::Upgrade(Tier::Premium)).await.unwrap();
    app.navigate(Page::Messaging).await.unwrap();

    let messaging = app.view_mut().messaging().unwrap();
    messaging.select(3).await.unwrap();
    messaging.toggle_rizz().unwrap();
    messaging.request_suggestion("she paints").unwrap();
    let suggestion = messaging.settle_suggestion().await.unwrap().unwrap();
    assert!(CANNED_SUGGESTIONS.contains(&suggestion.as_str()));
    assert_eq!(messaging.compose(), suggestion);
}

#[tokio::test]
async fn test_elite_keeps_messaging_extras_under_threshold_policy() {
    let (mut app, _) = verified_app(AppConfig::default()).await;
    app.dispatch(ShellCommand::Upgrade(Tier::Elite)).await.unwrap();
    app.navigate(Page::Messaging).await.unwrap();

    let messaging = app.view_mut().messaging().unwrap();
    messaging.select(1).await.unwrap();
    assert!(messaging.toggle_rizz().unwrap());
    assert_eq!(messaging.start_video_call().unwrap().name, "Sarah");
}

#[tokio::test]
async fn test_legacy_policy_requires_exact_premium_in_messaging() {
    let config = AppConfig {
        gating_policy: GatingPolicy::Legacy,
        ..AppConfig::default()
    };
    let (mut app, _) = verified_app(config).await;
    app.dispatch(ShellCommand::Upgrade(Tier::Elite)).await.unwrap();
    app.navigate(Page::Messaging).await.unwrap();

    let messaging = app.view_mut().messaging().unwrap();
    messaging.select(1).await.unwrap();
    assert!(messaging.toggle_rizz().unwrap_err().is_entitlement());
    assert!(messaging.start_video_call().unwrap_err().is_entitlement());

    app.dispatch(ShellCommand::Upgrade(Tier::Premium)).await.unwrap();
    let messaging = app.view_mut().messaging().unwrap();
    assert!(messaging.toggle_rizz().unwrap());
    assert!(messaging.can_video_call());

    // Elite still opens premium pages under the legacy rules.
    app.navigate(Page::VideoChat).await.unwrap();
    assert_eq!(app.active_view(), ActiveView::Page(Page::VideoChat));
}

#[tokio::test]
async fn test_basic_tier_cannot_video_call_under_threshold_policy() {
    let (mut app, _) = verified_app(AppConfig::default()).await;
    app.dispatch(ShellCommand::Upgrade(Tier::Basic)).await.unwrap();
    app.navigate(Page::Messaging).await.unwrap();

    let messaging = app.view_mut().messaging().unwrap();
    messaging.select(1).await.unwrap();
    assert!(messaging.toggle_rizz().unwrap());
    let err = messaging.start_video_call().unwrap_err();
    assert_eq!(
        err,
        HeartlineError::entitlement(Feature::VideoCall, Tier::Premium)
    );
}
