//! Slash command handling.

use std::str::FromStr;

use anyhow::{Result, anyhow, bail};
use chrono::{Duration, Utc};
use colored::Colorize;

use heartline_application::views::Swipe;
use heartline_application::{App, MountedView, ShellCommand, ShellEvent};
use heartline_core::icebreaker::GamePhase;
use heartline_core::page::Page;
use heartline_core::subscription::Tier;
use heartline_core::verification::{PersonalInfoField, PhotoUpload, WizardOutcome};
use strum::IntoEnumIterator;

/// Every command the REPL knows, for completion and hints.
pub const COMMANDS: &[&str] = &[
    "/help",
    "/go",
    "/toggle",
    "/upgrade",
    "/state",
    "/photo",
    "/set",
    "/next",
    "/choose",
    "/like",
    "/pass",
    "/view",
    "/discover",
    "/photo-next",
    "/photo-prev",
    "/fullscreen",
    "/close",
    "/open",
    "/send",
    "/rizz",
    "/rizz-min",
    "/suggest",
    "/call",
    "/connect",
    "/hangup",
    "/mute",
    "/camera",
    "/progress",
    "/start",
    "/answer",
    "/skip",
    "/reset",
    "/plan",
    "/cancel",
];

pub const HELP: &str = "\
/go <page>            switch page (profile, matching, messaging, personalGrowth,
                      icebreakers, virtualDate, videoChat, settings, verification)
/toggle               cycle the subscription tier
/upgrade <tier>       set the subscription tier (free, basic, premium, elite)
/state                print the shell state as JSON
quit | exit           leave
Page commands are listed under each page.";

pub enum Flow {
    Continue,
    Quit,
}

fn split(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    }
}

fn parse<T: FromStr>(value: &str, what: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| anyhow!("invalid {what}: '{value}'"))
}

fn report(event: &ShellEvent) {
    match event {
        ShellEvent::TierChanged { from, to } => {
            println!("{}", format!("Subscription changed: {from} -> {to}").green());
        }
        ShellEvent::Verified => println!("{}", "Profile verified!".green().bold()),
        ShellEvent::PageChanged { .. } | ShellEvent::Unchanged => {}
    }
}

pub async fn execute(app: &mut App, line: &str) -> Result<Flow> {
    let (verb, rest) = split(line);
    match verb {
        "quit" | "exit" => return Ok(Flow::Quit),
        "/help" => println!("{HELP}"),
        "/go" => {
            if rest.is_empty() {
                bail!("usage: /go <page>");
            }
            let event = app
                .dispatch(ShellCommand::NavigateKey(rest.to_string()))
                .await?;
            report(&event);
        }
        "/toggle" => {
            let event = app.dispatch(ShellCommand::ToggleSubscription).await?;
            report(&event);
        }
        "/upgrade" => {
            let tier: Tier = parse(rest, "tier")?;
            let event = app.dispatch(ShellCommand::Upgrade(tier)).await?;
            report(&event);
        }
        "/state" => println!("{}", serde_json::to_string_pretty(app.shell())?),
        _ if verb.starts_with('/') => page_command(app, verb, rest).await?,
        _ => {
            // Plain text sends a message on the messaging page.
            if let MountedView::Messaging(view) = app.view_mut() {
                view.set_compose(line);
                view.send().await?;
            } else {
                bail!("unknown input; type /help");
            }
        }
    }
    Ok(Flow::Continue)
}

async fn page_command(app: &mut App, verb: &str, rest: &str) -> Result<()> {
    match app.view() {
        MountedView::Verification(_) => verification_command(app, verb, rest).await,
        MountedView::Paywall(_) | MountedView::Settings(_) => plan_command(app, verb, rest).await,
        MountedView::Messaging(_) => messaging_command(app, verb, rest).await,
        _ => view_command(app.view_mut(), verb, rest).await,
    }
}

async fn verification_command(app: &mut App, verb: &str, rest: &str) -> Result<()> {
    match verb {
        "/photo" => {
            let (file, size) = split(rest);
            if file.is_empty() {
                bail!("usage: /photo <file> [bytes]");
            }
            let size = if size.is_empty() { 0 } else { parse(size, "size")? };
            app.view_mut()
                .wizard()?
                .add_photos([PhotoUpload::new(file, size)]);
        }
        "/set" => {
            let (field, value) = split(rest);
            let field = PersonalInfoField::from_str(field)
                .map_err(|_| anyhow!("unknown field '{field}'"))?;
            app.view_mut().wizard()?.set_field(field, value);
        }
        "/next" => {
            if app.submit_verification().await? == WizardOutcome::Completed {
                println!("{}", "Profile verified!".green().bold());
            }
        }
        _ => bail!("unknown command {verb}"),
    }
    Ok(())
}

async fn plan_command(app: &mut App, verb: &str, rest: &str) -> Result<()> {
    if verb != "/choose" {
        bail!("unknown command {verb}");
    }
    let tier: Tier = parse(rest, "tier")?;
    let command = match app.view_mut() {
        MountedView::Paywall(paywall) => paywall.choose(tier)?,
        MountedView::Settings(settings) => settings.upgrade(tier)?,
        other => bail!("plans are not shown on {}", other.name()),
    };
    let event = app.dispatch(command).await?;
    report(&event);
    Ok(())
}

async fn messaging_command(app: &mut App, verb: &str, rest: &str) -> Result<()> {
    let view = app.view_mut().messaging()?;
    match verb {
        "/open" => view.select(parse(rest, "conversation id")?).await?,
        "/send" => {
            if !rest.is_empty() {
                view.set_compose(rest);
            }
            view.send().await?;
        }
        "/rizz" => {
            view.toggle_rizz()?;
        }
        "/rizz-min" => {
            view.rizz_mut()?.toggle_minimized();
        }
        "/suggest" => {
            if !view.request_suggestion(rest)? {
                bail!("nothing to suggest from");
            }
            println!("{}", "Rizz AI is thinking...".magenta());
            if let Some(suggestion) = view.settle_suggestion().await? {
                println!("{} {}", "Suggestion:".magenta().bold(), suggestion);
            }
        }
        "/call" => {
            let conversation = view.start_video_call()?;
            println!("{}", format!("Calling {}...", conversation.name).yellow());
        }
        "/hangup" => {
            if !view.end_video_call() {
                bail!("no call in progress");
            }
        }
        _ => bail!("unknown command {verb}"),
    }
    Ok(())
}

async fn view_command(view: &mut MountedView, verb: &str, rest: &str) -> Result<()> {
    match (view, verb) {
        (MountedView::Matching(matching), "/like") => {
            let profile = matching.swipe(Swipe::Like)?;
            println!("{}", format!("You liked {}", profile.name).green());
        }
        (MountedView::Matching(matching), "/pass") => {
            matching.swipe(Swipe::Pass)?;
        }
        (MountedView::Matching(matching), "/discover") => {
            matching.discover().await?;
        }
        (MountedView::Matching(matching), "/view") => {
            matching.view_profile()?;
        }
        (MountedView::Matching(matching), "/close") => {
            matching.close_profile();
        }
        (MountedView::Matching(matching), "/photo-next" | "/photo-prev" | "/fullscreen") => {
            let modal = matching
                .modal_mut()
                .ok_or_else(|| anyhow!("open a profile with /view first"))?;
            match verb {
                "/photo-next" => {
                    modal.next_photo();
                }
                "/photo-prev" => {
                    modal.prev_photo();
                }
                _ => {
                    modal.toggle_fullscreen();
                }
            }
        }
        (MountedView::PersonalGrowth(growth), "/progress") => {
            let (id, pct) = split(rest);
            growth.update_progress(parse(id, "goal id")?, parse(pct, "progress")?)?;
        }
        (MountedView::Icebreakers(game), "/start") => {
            game.start();
        }
        (MountedView::Icebreakers(game), "/answer") => {
            if game.submit_answer(rest)? == GamePhase::Completed {
                println!("{}", "That was the last question!".green());
            }
        }
        (MountedView::Icebreakers(game), "/skip") => {
            game.skip();
        }
        (MountedView::Icebreakers(game), "/reset") => game.reset(),
        (MountedView::VirtualDate(planner), "/plan") => {
            let (idea, rest) = split(rest);
            let (hours, name) = split(rest);
            let now = Utc::now();
            let at = parse::<i64>(hours, "hours")
                .ok()
                .and_then(Duration::try_hours)
                .and_then(|offset| now.checked_add_signed(offset))
                .ok_or_else(|| anyhow!("invalid hours: '{hours}'"))?;
            let date = planner.plan(parse(idea, "idea id")?, name, at, now)?;
            println!(
                "{}",
                format!("Planned {} with {}", date.idea.title, date.with).green()
            );
        }
        (MountedView::VirtualDate(planner), "/cancel") => {
            planner.cancel(parse(rest, "date id")?)?;
        }
        (MountedView::VideoChat(call), "/call") => {
            if rest.is_empty() {
                bail!("usage: /call <name>");
            }
            call.call(rest)?;
        }
        (MountedView::VideoChat(call), "/connect") => {
            call.connect()?;
        }
        (MountedView::VideoChat(call), "/hangup") => {
            call.hang_up()?;
        }
        (MountedView::VideoChat(call), "/mute") => {
            call.toggle_mute()?;
        }
        (MountedView::VideoChat(call), "/camera") => {
            call.toggle_camera()?;
        }
        (view, _) => bail!("{verb} is not available on {}", view.name()),
    }
    Ok(())
}

/// Page keys accepted by `/go`.
pub fn page_keys() -> Vec<String> {
    Page::iter().map(|p| p.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use heartline_application::{ActiveView, Services};
    use heartline_core::config::AppConfig;
    use heartline_infrastructure::{CannedSuggestionSource, MockDataService};

    fn app() -> App {
        let services = Services::from_provider(
            Arc::new(MockDataService::new()),
            Arc::new(CannedSuggestionSource),
        );
        App::new(services, AppConfig::default())
    }

    async fn run(app: &mut App, lines: &[&str]) {
        for line in lines {
            execute(app, line).await.unwrap();
        }
    }

    async fn verified_app() -> App {
        let mut app = app();
        run(
            &mut app,
            &[
                "/photo me.jpg 2048",
                "/next",
                "/set name John Doe",
                "/set birthdate 1990-01-01",
                "/set gender Man",
                "/set interests Hiking, Jazz",
                "/set bio Hi there",
                "/next",
                "/next",
            ],
        )
        .await;
        app
    }

    #[test]
    fn test_split() {
        assert_eq!(split("/set bio  Likes  tea "), ("/set", "bio  Likes  tea"));
        assert_eq!(split("/toggle"), ("/toggle", ""));
    }

    #[test]
    fn test_parse_reports_field() {
        assert_eq!(parse::<u32>("42", "goal id").unwrap(), 42);
        let err = parse::<u32>("forty", "goal id").unwrap_err();
        assert_eq!(err.to_string(), "invalid goal id: 'forty'");
    }

    #[tokio::test]
    async fn test_wizard_commands_verify() {
        let app = verified_app().await;
        assert!(app.shell().is_verified());
        assert_eq!(app.active_view(), ActiveView::Page(Page::Matching));
    }

    #[tokio::test]
    async fn test_plan_rejects_out_of_range_hours() {
        let mut app = verified_app().await;
        run(&mut app, &["/upgrade basic", "/go virtualDate"]).await;

        for hours in ["9999999999999", "-9999999999999", "soon"] {
            let err = execute(&mut app, &format!("/plan 1 {hours} Sarah"))
                .await
                .err()
                .unwrap();
            assert_eq!(err.to_string(), format!("invalid hours: '{hours}'"));
        }

        run(&mut app, &["/plan 1 3 Sarah"]).await;
        let planner = app.view_mut().virtual_date().unwrap();
        assert_eq!(planner.planned().len(), 1);
        assert_eq!(planner.planned()[0].with, "Sarah");
    }

    #[tokio::test]
    async fn test_page_commands_follow_mounted_view() {
        let mut app = verified_app().await;
        assert!(execute(&mut app, "/mute").await.is_err());

        run(&mut app, &["/like", "/view", "/photo-prev"]).await;
        let matching = app.view_mut().matching().unwrap();
        assert_eq!(matching.liked().len(), 1);
        assert_eq!(matching.modal().unwrap().photo_index(), 2);

        run(&mut app, &["/go messaging", "/open 1", "Dinner on Friday?"]).await;
        let messaging = app.view_mut().messaging().unwrap();
        assert_eq!(messaging.messages().len(), 4);
        assert!(execute(&mut app, "/rizz").await.is_err());
    }

    #[tokio::test]
    async fn test_quit_and_unknown_input() {
        let mut app = app();
        assert!(matches!(execute(&mut app, "quit").await.unwrap(), Flow::Quit));
        assert!(execute(&mut app, "hello").await.is_err());
        assert!(execute(&mut app, "/upgrade platinum").await.is_err());
    }
}
