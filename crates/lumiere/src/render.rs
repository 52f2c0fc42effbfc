// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal rendering of greeting views.

use colored::Colorize;
use lumiere_catalog::assets;
use lumiere_flow::copy;
use lumiere_flow::{Renderer, Screen, View};

/// Prints each view to stdout as a block of colored lines.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl Renderer for TerminalRenderer {
    fn render(&mut self, view: &View) {
        println!();
        for line in render_lines(view) {
            println!("{line}");
        }
        let hint = hint(view);
        if !hint.is_empty() {
            println!("{}", hint.dimmed());
        }
    }

    fn status(&mut self, line: &str) {
        println!("  {} {}", "*".yellow(), line.italic());
    }
}

/// Formats the body of a screen.
pub fn render_lines(view: &View) -> Vec<String> {
    match view.screen {
        Screen::Welcome => {
            let heading = match &view.greeting_name {
                Some(name) => format!("{}, {name}!", copy::WELCOME_HEADING),
                None => format!("{}!", copy::WELCOME_HEADING),
            };
            vec![
                view.welcome_emblem.to_string(),
                heading.bold().green().to_string(),
            ]
        }
        Screen::ThankYou => {
            let heading = match &view.greeting_name {
                Some(name) => format!("{}, {name}!", copy::THANK_YOU_HEADING),
                None => format!("{}!", copy::THANK_YOU_HEADING),
            };
            let mut lines = vec![heading.yellow().italic().to_string()];
            lines.extend(copy::THANK_YOU_LINES.iter().map(|l| l.to_string()));
            lines
        }
        Screen::Input => vec![
            copy::INPUT_HEADING.bold().to_string(),
            copy::INPUT_PROMPT.to_string(),
        ],
        // Status lines arrive through `Renderer::status` while pacing runs.
        Screen::Processing => vec!["🎁".to_string()],
        Screen::NotInList => {
            let mut lines = vec![
                copy::NOT_IN_LIST_HEADING.bold().red().to_string(),
                format!("Dear {},", view.name),
            ];
            lines.extend(copy::NOT_IN_LIST_LINES.iter().map(|l| l.to_string()));
            lines
        }
        Screen::ReadyToOpen => {
            let caption = if view.opening {
                "The box is opening...".to_string()
            } else {
                view.caption.to_string()
            };
            vec!["🎁".to_string(), caption.bold().to_string()]
        }
        Screen::Revealed => revealed_lines(view),
        Screen::EndCard => match view.end_card {
            Some(card) => {
                let mut lines = vec![card.emblem.to_string(), card.heading.bold().to_string()];
                lines.extend(card.lines.iter().map(|l| l.to_string()));
                lines.push(card.sign_off.italic().to_string());
                lines
            }
            None => vec![copy::START_OVER.to_string()],
        },
    }
}

fn revealed_lines(view: &View) -> Vec<String> {
    let Some(gift) = &view.gift else {
        return Vec::new();
    };

    let mut lines = vec![
        format!("[{}]", view.badge).dimmed().to_string(),
        copy::REVEAL_HEADING.bold().to_string(),
        gift.recipient_name.yellow().italic().to_string(),
        format!("- {} -", view.showcase_tag).dimmed().to_string(),
        gift.gift_name.bold().green().to_string(),
        format!("\"{}\"", gift.message),
    ];
    if let Some(url) = view.model_url {
        let source = if assets::is_sample_model(url) { " (sample)" } else { "" };
        lines.push(format!("model: {url}{source}").dimmed().to_string());
    }
    lines.push(format!("music: {}", view.audio_track).dimmed().to_string());
    lines
}

/// Keys accepted on the current screen.
pub fn hint(view: &View) -> String {
    match view.screen {
        Screen::Welcome => format!("[enter] {}", copy::WELCOME_CONFIRM),
        Screen::ThankYou => format!("[enter] {}", view.check_list_label()),
        Screen::Input => format!("{} [enter] {}", copy::INPUT_PLACEHOLDER, copy::INPUT_SUBMIT),
        Screen::Processing => String::new(),
        Screen::NotInList => format!("[enter] {}", copy::COLLECT_GIFT),
        Screen::ReadyToOpen if view.opening => String::new(),
        Screen::ReadyToOpen => "[enter] open the box".to_string(),
        Screen::Revealed => format!(
            "[enter] {}  [share] {}",
            view.continue_label,
            copy::SHARE_GIFT
        ),
        Screen::EndCard => format!("[enter] {}", copy::START_OVER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumiere_core::{GiftDescriptor, Theme};
    use lumiere_flow::SessionState;

    fn view_of(state: &SessionState) -> View {
        View::derive(state)
    }

    fn joined(view: &View) -> String {
        colored::control::set_override(false);
        render_lines(view).join("\n")
    }

    #[test]
    fn welcome_greets_url_user() {
        let state = SessionState::new(Some("Mina"));
        let text = joined(&view_of(&state));
        assert!(text.contains("Happy Christmas, Mina!"), "got: {text}");
        assert!(text.contains("🎄"));
    }

    #[test]
    fn welcome_without_name() {
        let text = joined(&view_of(&SessionState::new(None)));
        assert!(text.contains("Happy Christmas!"));
    }

    #[test]
    fn not_in_list_addresses_visitor() {
        let mut state = SessionState::new(None);
        state.screen = Screen::NotInList;
        state.input_name = "Zed".into();
        let text = joined(&view_of(&state));
        assert!(text.contains("Dear Zed,"));
        assert!(text.contains("won't do discrimination"));
    }

    #[test]
    fn revealed_shows_gift_and_track() {
        let mut state = SessionState::new(None);
        state.screen = Screen::Revealed;
        state.input_name = "alex".into();
        state.gift = Some(GiftDescriptor {
            recipient_name: "alex".into(),
            gift_name: "A Vintage Record Player".into(),
            message: "Spin it.".into(),
            theme: Theme::Classic,
            is_cataloged: true,
        });
        let view = view_of(&state);
        let text = joined(&view);
        assert!(text.contains("A Vintage Record Player"));
        assert!(text.contains("\"Spin it.\""));
        assert!(text.contains(view.audio_track));
        assert!(hint(&view).contains("[share]"));
    }

    #[test]
    fn processing_has_no_hint() {
        let mut state = SessionState::new(None);
        state.screen = Screen::Processing;
        assert!(hint(&view_of(&state)).is_empty());
    }

    #[test]
    fn processing_leaves_status_lines_to_ticker() {
        let mut state = SessionState::new(None);
        state.screen = Screen::Processing;
        let text = joined(&view_of(&state));
        assert!(!text.contains(copy::STATUS_MESSAGES[0]), "got: {text}");
        assert_eq!(text, "🎁");
    }

    #[test]
    fn thank_you_hint_depends_on_url_name() {
        let mut state = SessionState::new(Some("Mina"));
        state.screen = Screen::ThankYou;
        assert!(hint(&view_of(&state)).contains(copy::CHECK_MY_GIFT));

        let mut state = SessionState::new(None);
        state.screen = Screen::ThankYou;
        assert!(hint(&view_of(&state)).contains(copy::CHECK_GIFT_LIST));
    }
}
