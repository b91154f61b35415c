//! Text rendering of the shell and the mounted view.

use colored::Colorize;

use heartline_application::views::{
    CallState, MatchingView, MessagingView, PaywallView, PersonalGrowthView, SettingsView,
    UserProfileView, VideoChatView, VirtualDatePlanner, date_ideas,
};
use heartline_application::{App, MountedView};
use heartline_core::icebreaker::{GamePhase, IcebreakerGame};
use heartline_core::page::NAV_BAR;
use heartline_core::profile::{Profile, ProfileModal};
use heartline_core::subscription::SubscriptionPlan;
use heartline_core::verification::{PersonalInfoField, VerificationWizard};
use strum::IntoEnumIterator;

pub fn render(app: &App) {
    println!();
    println!(
        "{}  {}",
        "Heartline".bright_magenta().bold(),
        app.shell().header_label().bright_black()
    );
    match app.view() {
        MountedView::Verification(wizard) => render_wizard(wizard),
        MountedView::Paywall(paywall) => render_paywall(paywall),
        MountedView::Profile(view) => render_user_profile(view),
        MountedView::Matching(view) => render_matching(view),
        MountedView::Messaging(view) => render_messaging(view),
        MountedView::PersonalGrowth(view) => render_growth(view),
        MountedView::Icebreakers(game) => render_icebreakers(game),
        MountedView::VirtualDate(planner) => render_virtual_date(planner),
        MountedView::VideoChat(view) => render_video_chat(view),
        MountedView::Settings(view) => render_settings(view),
    }
    if app.shell().is_verified() {
        render_nav(app);
    }
}

fn render_nav(app: &App) {
    let current = app.shell().current_page();
    let items: Vec<String> = NAV_BAR
        .iter()
        .map(|page| {
            let label = format!("{} ({})", page.nav_label(), page);
            if *page == current {
                label.bright_magenta().bold().to_string()
            } else {
                label.bright_black().to_string()
            }
        })
        .collect();
    println!();
    println!("{}", items.join(" | "));
}

fn heading(text: &str) {
    println!("{}", text.bright_cyan().bold());
}

fn render_wizard(wizard: &VerificationWizard) {
    heading("Verify Your Profile");
    let step = wizard.step();
    let dots: String = (1..=3)
        .map(|n| if n <= step.number() { '●' } else { '○' })
        .collect();
    println!("{dots}  Step {}: {}", step.number(), step.title());
    println!(
        "  Photos: {}",
        wizard
            .photos()
            .iter()
            .map(|p| p.file_name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    for field in PersonalInfoField::iter() {
        let value = wizard.personal_info().get(field);
        let shown = if value.is_empty() {
            "(empty)".bright_black().to_string()
        } else {
            value.to_string()
        };
        println!("  {field:<10} {shown}");
    }
    println!(
        "{}",
        format!("[{}]  /photo <file> [bytes], /set <field> <value>, /next", wizard.submit_label())
            .bright_black()
    );
}

fn render_plans(plans: &[SubscriptionPlan]) {
    for plan in plans {
        println!(
            "  {} {}  {}",
            plan.name.bold(),
            plan.price_label().green(),
            format!("(/choose {})", plan.tier).bright_black()
        );
        for feature in plan.features {
            println!("    - {feature}");
        }
    }
}

fn render_paywall(paywall: &PaywallView) {
    heading(&paywall.headline());
    render_plans(paywall.plans());
}

fn render_user_profile(view: &UserProfileView) {
    heading("My Profile");
    let user = view.user();
    match view.badge() {
        Some(badge) => println!("  {}  {}", user.name.bold(), badge.yellow()),
        None => println!("  {}", user.name.bold()),
    }
    println!("  Plan: {}", view.tier());
}

fn render_card(profile: &Profile) {
    println!(
        "  {}  {}  {}",
        profile.headline().bold(),
        profile.location.bright_black(),
        format!("{}% match", profile.compatibility_score).green()
    );
    println!("  {}", profile.bio);
    println!("  Interests: {}", profile.interests.join(", "));
}

fn render_modal(modal: &ProfileModal) {
    let profile = modal.profile();
    println!();
    heading(&profile.headline());
    println!(
        "  Photo {}/{}: {}{}",
        modal.photo_index() + 1,
        modal.photo_count(),
        modal.current_photo(),
        if modal.is_fullscreen() { " [fullscreen]" } else { "" }
    );
    println!("  Values: {}", profile.values.join(", "));
    for answer in &profile.icebreaker_answers {
        println!("  Q: {}", answer.question.bright_black());
        println!("  A: {}", answer.answer);
    }
    if let Some(goals) = modal.visible_growth_goals() {
        println!("  Growth goals:");
        for goal in goals {
            println!("    {} {}%", goal.title, goal.progress);
        }
    }
    println!(
        "{}",
        "/photo-next, /photo-prev, /fullscreen, /close".bright_black()
    );
}

fn render_matching(view: &MatchingView) {
    heading("Find a Match");
    match view.current() {
        Some(profile) => render_card(profile),
        None => println!("  No more candidates. Try /discover."),
    }
    println!(
        "  {} left, {} liked",
        view.remaining(),
        view.liked().len()
    );
    if let Some(modal) = view.modal() {
        render_modal(modal);
    } else {
        println!("{}", "/like, /pass, /view, /discover".bright_black());
    }
}

fn render_messaging(view: &MessagingView) {
    heading("Messages");
    let selected = view.selected().map(|c| c.id);
    for conversation in view.conversations() {
        let marker = if Some(conversation.id) == selected { ">" } else { " " };
        let unread = if conversation.has_unread() {
            format!(" ({})", conversation.unread_count).bright_red().to_string()
        } else {
            String::new()
        };
        println!(
            "{marker} [{}] {}{}  {}",
            conversation.id,
            conversation.name.bold(),
            unread,
            conversation.last_message.bright_black()
        );
    }

    if let Some(conversation) = view.selected() {
        println!();
        for message in view.messages() {
            let line = format!("{}: {}", message.sender, message.content);
            let line = if message.is_outgoing() {
                line.green()
            } else {
                line.bright_blue()
            };
            println!("  {}  {}", message.time_label().bright_black(), line);
        }
        if view.is_in_video_call() {
            println!("  {}", format!("In video call with {}", conversation.name).yellow());
        }
    }

    if view.is_rizz_visible() {
        let rizz = view.rizz();
        if rizz.is_minimized() {
            println!("  {}", "Rizz AI (minimized)".magenta());
        } else {
            let status = if rizz.is_loading() { "thinking..." } else { "ready" };
            println!("  {} {}", "Rizz AI".magenta().bold(), status.bright_black());
        }
    }
    if !view.compose().is_empty() {
        println!("  Draft: {}", view.compose());
    }

    let mut hints = vec!["/open <id>", "/send [text]"];
    if view.can_use_rizz() {
        hints.extend(["/rizz", "/suggest <context>", "/rizz-min"]);
    }
    if view.can_video_call() {
        hints.extend(["/call", "/hangup"]);
    }
    println!("{}", hints.join(", ").bright_black());
}

fn progress_bar(progress: u8) -> String {
    let filled = usize::from(progress) / 10;
    format!("{}{}", "#".repeat(filled), ".".repeat(10 - filled))
}

fn render_growth(view: &PersonalGrowthView) {
    heading("Personal Growth");
    for goal in view.goals() {
        println!(
            "  [{}] {:<28} {} {:>3}%",
            goal.id,
            goal.title,
            progress_bar(goal.progress).green(),
            goal.progress
        );
        println!("      {}", goal.description.bright_black());
    }
    println!("  Average: {:.0}%", view.average_progress());
    println!("{}", "/progress <goal id> <0-100>".bright_black());
}

fn render_icebreakers(game: &IcebreakerGame) {
    heading("Icebreaker Games");
    match game.phase() {
        GamePhase::NotStarted => println!("  Ready to break the ice? /start"),
        GamePhase::Asking(question) => {
            println!("  {}", question.text.bold());
            println!(
                "{}",
                format!("  {} questions left. /answer <text>, /skip, /reset", game.remaining())
                    .bright_black()
            );
        }
        GamePhase::Completed => {
            println!("  {}", "Game completed!".green().bold());
            for answer in game.answered() {
                println!("  Q: {}", answer.question.bright_black());
                println!("  A: {}", answer.answer);
            }
            println!("{}", "/start to play again, /reset".bright_black());
        }
    }
}

fn render_virtual_date(planner: &VirtualDatePlanner) {
    heading("Virtual Date Planner");
    for idea in date_ideas() {
        println!(
            "  [{}] {} ({} min)  {}",
            idea.id,
            idea.title.bold(),
            idea.duration_minutes,
            idea.description.bright_black()
        );
    }
    if !planner.planned().is_empty() {
        println!();
        for date in planner.planned() {
            println!(
                "  #{} {} with {} at {}",
                date.id,
                date.idea.title,
                date.with,
                date.at.format("%Y-%m-%d %H:%M UTC")
            );
        }
    }
    println!(
        "{}",
        "/plan <idea id> <hours from now> <name>, /cancel <id>".bright_black()
    );
}

fn render_video_chat(view: &VideoChatView) {
    heading("Video Chat");
    let peer = view.peer().unwrap_or("nobody");
    match view.state() {
        CallState::Idle => println!("  No call. /call <name>"),
        CallState::Connecting => println!("  Calling {peer}... /connect, /hangup"),
        CallState::Connected => {
            println!("  {} {}", "Connected with".green(), peer.bold());
            println!(
                "  Mic {}  Camera {}",
                if view.is_muted() { "off" } else { "on" },
                if view.is_camera_on() { "on" } else { "off" }
            );
            println!("{}", "/mute, /camera, /hangup".bright_black());
        }
        CallState::Ended => println!("  Call with {peer} ended. /call <name>"),
    }
}

fn render_settings(view: &SettingsView) {
    heading("Settings");
    match view.current_plan() {
        Some(plan) => println!("  Plan: {} {}", plan.name.bold(), plan.price_label()),
        None => println!("  Plan: {}", "Free".bold()),
    }
    println!(
        "  Gating: {:?}  Suggestion delay: {} ms",
        view.policy(),
        view.suggestion_delay_ms()
    );
    render_plans(view.plans());
}
