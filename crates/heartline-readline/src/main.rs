use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use strum::IntoEnumIterator;

use heartline_application::{App, Services};
use heartline_core::config::AppConfig;
use heartline_core::subscription::Tier;
use heartline_infrastructure::{CannedSuggestionSource, ConfigService, MockDataService};

mod commands;
mod logging;
mod render;

use commands::{COMMANDS, Flow};

/// rustyline helper: command completion, inline hints and highlighting.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
    pages: Vec<String>,
    tiers: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
            pages: commands::page_keys(),
            tiers: Tier::iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Candidates for the word being typed, and where that word starts.
    fn candidates<'a>(&'a self, line: &str) -> (usize, Vec<&'a String>) {
        let (pool, start) = if let Some(arg) = line.strip_prefix("/go ") {
            (&self.pages, line.len() - arg.len())
        } else if let Some(arg) = line
            .strip_prefix("/upgrade ")
            .or_else(|| line.strip_prefix("/choose "))
        {
            (&self.tiers, line.len() - arg.len())
        } else if line.starts_with('/') && !line.contains(' ') {
            (&self.commands, 0)
        } else {
            return (0, Vec::new());
        };
        let typed = &line[start..];
        let matches = pool.iter().filter(|c| c.starts_with(typed)).collect();
        (start, matches)
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(&line[..pos]);
        let pairs = matches
            .into_iter()
            .map(|c| Pair {
                display: c.clone(),
                replacement: c.clone(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let (start, matches) = self.candidates(line);
        let typed = &line[start..];
        matches
            .into_iter()
            .find(|c| c.len() > typed.len())
            .map(|c| c[typed.len()..].to_string())
    }
}

impl Validator for CliHelper {}

fn load_config() -> (AppConfig, Option<heartline_core::HeartlineError>) {
    match ConfigService::new().and_then(|service| service.load()) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    }
}

/// Heartline terminal client.
///
/// Renders the mounted view after every command. Everything runs against
/// the in-memory mock backend.
#[tokio::main]
async fn main() -> Result<()> {
    let (config, config_error) = load_config();
    logging::init_logging(&config.log_level);
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "Falling back to default configuration");
    }

    let provider = Arc::new(MockDataService::new());
    let services = Services::from_provider(provider, Arc::new(CannedSuggestionSource));
    let mut app = App::new(services, config);

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== Heartline ===".bright_magenta().bold());
    println!(
        "{}",
        "Type '/help' for commands, or 'quit' to exit.".bright_black()
    );
    render::render(&app);

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match commands::execute(&mut app, trimmed).await {
                    Ok(Flow::Quit) => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    Ok(Flow::Continue) => render::render(&app),
                    Err(err) => eprintln!("{}", format!("Error: {err}").red()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    Ok(())
}
