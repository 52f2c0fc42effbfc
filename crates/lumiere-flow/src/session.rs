// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session driver.
//!
//! [`GreetingSession`] owns the single [`SessionState`], feeds events through
//! [`transition`], renders every resulting state, and runs the returned
//! effects. Effects produce follow-up events that are processed before
//! `dispatch` returns, so one user action runs to quiescence.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use lumiere_core::GiftResolver;
use tracing::{info, warn};

use crate::machine::{transition, Effect, Event, Screen, SessionState};
use crate::pacing::{resolve_with_pacing, Pacing};
use crate::view::View;

/// Draws views. Implemented by the terminal front end and by tests.
pub trait Renderer: Send {
    /// Called after every state change.
    fn render(&mut self, view: &View);

    /// Called with each rotating status line while a gift is resolving.
    fn status(&mut self, line: &str);
}

pub struct GreetingSession {
    state: SessionState,
    resolver: Arc<dyn GiftResolver>,
    pacing: Pacing,
    reveal_delay: Duration,
}

impl GreetingSession {
    pub fn new(
        resolver: Arc<dyn GiftResolver>,
        url_user: Option<&str>,
        pacing: Pacing,
        reveal_delay: Duration,
    ) -> Self {
        Self {
            state: SessionState::new(url_user),
            resolver,
            pacing,
            reveal_delay,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen
    }

    pub fn view(&self) -> View {
        View::derive(&self.state)
    }

    /// Renders the current state without changing it.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.render(&self.view());
    }

    /// Applies `event` and every follow-up event its effects produce.
    pub async fn dispatch(&mut self, event: Event, renderer: &mut dyn Renderer) {
        let mut pending = VecDeque::from([event]);

        while let Some(event) = pending.pop_front() {
            let before = self.state.clone();
            let (next, effects) = transition(std::mem::take(&mut self.state), event);
            self.state = next;

            if self.state != before {
                renderer.render(&self.view());
            }

            for effect in effects {
                pending.push_back(self.run(effect, renderer).await);
            }
        }
    }

    async fn run(&self, effect: Effect, renderer: &mut dyn Renderer) -> Event {
        match effect {
            Effect::Resolve { name } => {
                let result = resolve_with_pacing(
                    self.resolver.as_ref(),
                    &name,
                    self.pacing,
                    |line| renderer.status(line),
                )
                .await;

                match result {
                    Ok(gift) => {
                        info!(
                            gift = %gift.gift_name,
                            cataloged = gift.is_cataloged,
                            "gift resolved"
                        );
                        Event::ResolutionSucceeded(gift)
                    }
                    Err(e) => {
                        warn!(error = %e, "gift resolution failed");
                        Event::ResolutionFailed(e.to_string())
                    }
                }
            }
            Effect::StartRevealAnimation => {
                tokio::time::sleep(self.reveal_delay).await;
                Event::RevealFinished
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use lumiere_test_utils::MockResolver;

    use super::*;

    #[derive(Default)]
    struct Screens(Vec<Screen>);

    impl Renderer for Screens {
        fn render(&mut self, view: &View) {
            self.0.push(view.screen);
        }

        fn status(&mut self, _line: &str) {}
    }

    fn session(resolver: MockResolver, url_user: Option<&str>) -> GreetingSession {
        GreetingSession::new(
            Arc::new(resolver),
            url_user,
            Pacing::default(),
            Duration::from_millis(1500),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn submit_runs_resolution_to_quiescence() {
        let mut session = session(MockResolver::new(), None);
        let mut screens = Screens::default();

        session.dispatch(Event::ConfirmWelcome, &mut screens).await;
        session.dispatch(Event::RequestList, &mut screens).await;
        session
            .dispatch(Event::SubmitName("Mina".into()), &mut screens)
            .await;

        assert_eq!(session.screen(), Screen::NotInList);
        assert_eq!(
            screens.0,
            vec![
                Screen::ThankYou,
                Screen::Input,
                Screen::Processing,
                Screen::NotInList
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn ignored_event_does_not_render() {
        let mut session = session(MockResolver::new(), None);
        let mut screens = Screens::default();

        session.dispatch(Event::RevealGesture, &mut screens).await;

        assert!(screens.0.is_empty());
        assert_eq!(session.screen(), Screen::Welcome);
    }

    #[tokio::test(start_paused = true)]
    async fn reveal_waits_for_animation() {
        let resolver = MockResolver::new();
        resolver
            .push_gift(MockResolver::gift("Alex", "A Vintage Camera", true))
            .await;
        let mut session = session(resolver, Some("Alex"));
        let mut screens = Screens::default();

        session.dispatch(Event::ConfirmWelcome, &mut screens).await;
        session.dispatch(Event::RequestList, &mut screens).await;
        assert_eq!(session.screen(), Screen::ReadyToOpen);

        let start = tokio::time::Instant::now();
        session.dispatch(Event::RevealGesture, &mut screens).await;
        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert_eq!(session.screen(), Screen::Revealed);
        assert!(!session.state().opening);
    }
}
