// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interactive terminal greeting.
//!
//! Reads lines with rustyline, maps them to flow events for the current
//! screen, and renders each resulting view.

use colored::Colorize;
use lumiere_config::LumiereConfig;
use lumiere_core::LumiereError;
use lumiere_flow::{Event, GreetingSession, Pacing, Screen};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::render::TerminalRenderer;

/// What a line of input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(Event),
    /// Print the share text of the revealed gift.
    Share,
    Help,
    Quit,
    /// Input that means nothing on this screen.
    Ignored,
}

/// Maps one line of input to a command, given the current screen.
pub fn parse_command(screen: Screen, line: &str) -> Command {
    let input = line.trim();

    match input {
        "/quit" | "/exit" => return Command::Quit,
        "/help" => return Command::Help,
        _ => {}
    }

    let word = input.to_lowercase();
    match screen {
        Screen::Welcome if word.is_empty() || word == "y" || word == "yes" => {
            Command::Event(Event::ConfirmWelcome)
        }
        Screen::ThankYou if word.is_empty() || word == "check" => {
            Command::Event(Event::RequestList)
        }
        Screen::Input => Command::Event(Event::SubmitName(input.to_string())),
        Screen::NotInList if word.is_empty() || word == "collect" => {
            Command::Event(Event::ProceedFromModal)
        }
        Screen::ReadyToOpen if word.is_empty() || word == "open" => {
            Command::Event(Event::RevealGesture)
        }
        Screen::Revealed if word.is_empty() || word == "next" => {
            Command::Event(Event::ContinueAfterReveal)
        }
        Screen::Revealed if word == "share" => Command::Share,
        Screen::EndCard if word.is_empty() || word == "restart" => {
            Command::Event(Event::StartOver)
        }
        _ => Command::Ignored,
    }
}

/// Runs the interactive greeting until the user quits.
pub async fn run_play(
    config: &LumiereConfig,
    url_user: Option<String>,
) -> Result<(), LumiereError> {
    let resolver = crate::build_resolver(config)?;
    let pacing = Pacing {
        min_wait: config.greeting.min_wait(),
        status_interval: config.greeting.status_interval(),
    };
    let mut session = GreetingSession::new(
        resolver,
        url_user.as_deref(),
        pacing,
        config.greeting.reveal_delay(),
    );
    let mut renderer = TerminalRenderer;

    let mut rl = DefaultEditor::new()
        .map_err(|e| LumiereError::Internal(format!("failed to initialize line editor: {e}")))?;

    println!(
        "{}",
        "Lumiere. Press enter to continue, /help for keys, /quit to leave.".bold()
    );
    session.render(&mut renderer);

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.trim());
                }

                match parse_command(session.screen(), &line) {
                    Command::Quit => break,
                    Command::Help => print_help(),
                    Command::Share => match session.view().share_text() {
                        Some(text) => println!("\n{text}\n"),
                        None => println!("{}", "nothing to share yet".dimmed()),
                    },
                    Command::Event(event) => {
                        debug!(event = event.as_ref(), "dispatching");
                        session.dispatch(event, &mut renderer).await;
                    }
                    Command::Ignored => {
                        println!("{}", "(not here, try /help)".dimmed());
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "Merry Christmas!".green());
    Ok(())
}

fn print_help() {
    println!("  {}   act on the current screen", "enter".bold());
    println!("  {}    submit a name on the list screen", "name".bold());
    println!("  {}    open another gift", "next".bold());
    println!("  {}   print the gift to share", "share".bold());
    println!("  {} go back to the start", "restart".bold());
    println!("  {}   leave", "/quit".bold());
}
