// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Presentation state machine.
//!
//! Screens: welcome -> thank_you -> input -> processing -> (not_in_list) ->
//! ready_to_open -> revealed -> (ready_to_open | end_card | welcome).
//!
//! [`transition`] is a pure function of the current [`SessionState`] and an
//! [`Event`]. It never performs I/O; anything that takes time is returned as
//! an [`Effect`] for the driver to run, and the outcome comes back as another
//! event.

use std::collections::BTreeMap;

use lumiere_catalog::recipients;
use lumiere_catalog::{Script, SpecialRecipient, SPECIAL_RECIPIENTS};
use lumiere_core::{normalize_name, GiftDescriptor};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use tracing::debug;

/// Screen identifiers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Screen {
    /// Initial greeting, personalized when a name arrived via URL.
    #[default]
    Welcome,
    /// Acknowledges the visitor's greeting.
    ThankYou,
    /// Name prompt. Skipped when the name came from the URL.
    Input,
    /// Gift resolution in flight.
    Processing,
    /// Interception letter for names absent from the catalog.
    NotInList,
    /// Gift determined, waiting for the reveal gesture.
    ReadyToOpen,
    /// Gift and message on display.
    Revealed,
    /// Closing card of a scripted recipient.
    EndCard,
}

/// Discrete inputs to the machine.
#[derive(Debug, Clone, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Event {
    ConfirmWelcome,
    RequestList,
    SubmitName(String),
    ResolutionSucceeded(GiftDescriptor),
    ResolutionFailed(String),
    ProceedFromModal,
    RevealGesture,
    RevealFinished,
    ContinueAfterReveal,
    StartOver,
}

/// Work the driver must perform on behalf of the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Resolve `name` with pacing, then feed back `ResolutionSucceeded` or
    /// `ResolutionFailed`.
    Resolve { name: String },
    /// Play the box-opening animation, then feed back `RevealFinished`.
    StartRevealAnimation,
}

/// Per-recipient script progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientProgress {
    /// Extra gifts consumed so far. Never decremented.
    pub cursor: usize,
    /// Whether the one-shot closing card has been shown.
    pub card_shown: bool,
}

/// Everything the machine knows about the current visit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub screen: Screen,
    /// Name typed on the input screen (or copied from the URL).
    pub input_name: String,
    /// Name from the `user` query parameter. Survives every reset.
    pub url_name: Option<String>,
    pub gift: Option<GiftDescriptor>,
    /// Script progress keyed by recipient id.
    pub progress: BTreeMap<String, RecipientProgress>,
    /// A resolution is outstanding.
    pub in_flight: bool,
    /// The reveal animation is running.
    pub opening: bool,
    /// Recipient id whose closing card is on screen.
    pub end_card: Option<String>,
}

impl SessionState {
    /// Starts a session, optionally with a name taken from the URL.
    pub fn new(url_user: Option<&str>) -> Self {
        let url_name = url_user
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        Self {
            input_name: url_name.clone().unwrap_or_default(),
            url_name,
            ..Self::default()
        }
    }

    /// The name currently being greeted.
    ///
    /// A URL-supplied name stays the identity for the whole session. If its
    /// resolution fails and the visitor types a name on the input screen, the
    /// typed name is what gets resolved, but greetings, recipient scripts and
    /// the not-on-list letter keep addressing the URL name.
    pub fn current_name(&self) -> &str {
        self.url_name.as_deref().unwrap_or(&self.input_name)
    }

    /// Normalized identity used for recipient matching.
    pub fn identity(&self) -> String {
        normalize_name(self.current_name())
    }

    /// Progress for `recipient_id`, defaulted when untouched.
    pub fn progress_of(&self, recipient_id: &str) -> RecipientProgress {
        self.progress.get(recipient_id).copied().unwrap_or_default()
    }
}

/// Applies `event` using the built-in recipient table.
pub fn transition(state: SessionState, event: Event) -> (SessionState, Vec<Effect>) {
    transition_with(SPECIAL_RECIPIENTS, state, event)
}

/// Applies `event` against an explicit recipient table.
pub fn transition_with(
    table: &[SpecialRecipient],
    mut state: SessionState,
    event: Event,
) -> (SessionState, Vec<Effect>) {
    let from = state.screen;
    let label = event.as_ref().to_string();
    let mut effects = Vec::new();

    match (from, event) {
        (Screen::Welcome, Event::ConfirmWelcome) => state.screen = Screen::ThankYou,

        (Screen::ThankYou, Event::RequestList) => match state.url_name.clone() {
            Some(name) => effects.push(begin_resolution(&mut state, name)),
            None => state.screen = Screen::Input,
        },

        (Screen::Input, Event::SubmitName(name)) => {
            if name.trim().is_empty() {
                debug!("blank name submitted, staying on input");
            } else {
                state.input_name = name.clone();
                effects.push(begin_resolution(&mut state, name));
            }
        }

        (Screen::Processing, Event::ResolutionSucceeded(gift)) if state.in_flight => {
            state.in_flight = false;
            state.screen = if gift.is_cataloged {
                Screen::ReadyToOpen
            } else {
                Screen::NotInList
            };
            state.gift = Some(gift);
        }

        (Screen::Processing, Event::ResolutionFailed(reason)) if state.in_flight => {
            debug!(reason = %reason, "resolution failed, back to input");
            state.in_flight = false;
            state.gift = None;
            state.screen = Screen::Input;
        }

        (Screen::NotInList, Event::ProceedFromModal) => state.screen = Screen::ReadyToOpen,

        (Screen::ReadyToOpen, Event::RevealGesture) => {
            if state.opening {
                debug!("reveal already in progress");
            } else {
                state.opening = true;
                effects.push(Effect::StartRevealAnimation);
            }
        }

        (Screen::ReadyToOpen, Event::RevealFinished) if state.opening => {
            state.opening = false;
            state.screen = Screen::Revealed;
        }

        (Screen::Revealed | Screen::EndCard, Event::ContinueAfterReveal) => {
            state = continue_after_reveal(table, state);
        }

        (Screen::EndCard, Event::StartOver) => {
            state.progress.clear();
            state.gift = None;
            state.end_card = None;
            state.screen = Screen::Welcome;
        }

        (screen, _) => {
            debug!(screen = %screen, event = %label, "event ignored");
            return (state, effects);
        }
    }

    debug!(from = %from, to = %state.screen, event = %label, "transition");
    (state, effects)
}

fn begin_resolution(state: &mut SessionState, name: String) -> Effect {
    state.screen = Screen::Processing;
    state.in_flight = true;
    state.gift = None;
    Effect::Resolve { name }
}

/// Walks matching recipients in table order; the first one with something
/// left to show wins, otherwise the session is reset.
fn continue_after_reveal(
    table: &[SpecialRecipient],
    mut state: SessionState,
) -> SessionState {
    let identity = state.identity();

    for recipient in recipients::matching(table, &identity) {
        let progress = state
            .progress
            .entry(recipient.id.to_string())
            .or_default();

        match recipient.script {
            Script::Queue(_) => {
                if let Some(gift) = recipient.queued_gift(progress.cursor) {
                    progress.cursor += 1;
                    state.gift = Some(gift.to_descriptor(recipient.display_name, true));
                    state.screen = Screen::ReadyToOpen;
                    return state;
                }
                if state.screen != Screen::EndCard {
                    state.end_card = Some(recipient.id.to_string());
                    state.screen = Screen::EndCard;
                    return state;
                }
            }
            Script::OneShot => {
                if !progress.card_shown {
                    progress.card_shown = true;
                    state.end_card = Some(recipient.id.to_string());
                    state.screen = Screen::EndCard;
                    return state;
                }
            }
        }
    }

    default_reset(state)
}

/// Clears gift and progress and returns to welcome. A URL-supplied name is kept.
fn default_reset(mut state: SessionState) -> SessionState {
    state.gift = None;
    if state.url_name.is_none() {
        state.input_name.clear();
    }
    state.progress.clear();
    state.end_card = None;
    state.opening = false;
    state.in_flight = false;
    state.screen = Screen::Welcome;
    state
}
