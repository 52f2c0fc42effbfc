// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Display flags and copy derived from a [`SessionState`].
//!
//! Nothing here is stored; a [`View`] is rebuilt for every render.

use lumiere_catalog::recipients::{self, EndCard, DEFAULT_BADGE};
use lumiere_catalog::{assets, Script, SpecialRecipient, SPECIAL_RECIPIENTS};
use lumiere_core::{GiftDescriptor, Theme};

use crate::copy;
use crate::machine::{Screen, SessionState};

/// What a renderer needs to draw the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub screen: Screen,
    /// Name from the URL, shown on the welcome and thank-you screens.
    pub greeting_name: Option<String>,
    /// Name the visitor is addressed by on the not-on-list letter.
    pub name: String,
    pub gift: Option<GiftDescriptor>,
    /// A matching recipient still has queued gifts.
    pub has_more_gifts: bool,
    /// A matching recipient has exactly one step left: its closing card.
    pub is_final_gift: bool,
    pub offers_next_gift: bool,
    pub continue_label: &'static str,
    /// Caption under the unopened box.
    pub caption: &'static str,
    pub opening: bool,
    pub welcome_emblem: &'static str,
    pub badge: &'static str,
    pub showcase_tag: &'static str,
    pub model_url: Option<&'static str>,
    pub audio_track: &'static str,
    pub end_card: Option<EndCard>,
}

impl View {
    /// Derives the view using the built-in recipient table.
    pub fn derive(state: &SessionState) -> Self {
        Self::derive_with(SPECIAL_RECIPIENTS, state)
    }

    pub fn derive_with(table: &[SpecialRecipient], state: &SessionState) -> Self {
        let identity = state.identity();
        let matching: Vec<&SpecialRecipient> = recipients::matching(table, &identity).collect();

        let has_more_gifts = matching.iter().any(|r| {
            matches!(r.script, Script::Queue(_)) && state.progress_of(r.id).cursor < r.queue_len()
        });
        let is_final_gift = matching.iter().any(|r| {
            let progress = state.progress_of(r.id);
            match r.script {
                Script::Queue(gifts) => progress.cursor == gifts.len(),
                Script::OneShot => !progress.card_shown,
            }
        });
        let offers_next_gift = has_more_gifts || is_final_gift;

        let gift_name = state.gift.as_ref().map_or("", |g| g.gift_name.as_str());
        let continue_label = match matching.first() {
            Some(r) if offers_next_gift => r.continue_label_for(gift_name),
            _ => copy::OPEN_ANOTHER,
        };

        let caption = if has_more_gifts {
            copy::CAPTION_MORE
        } else if state.gift.as_ref().is_some_and(|g| g.is_cataloged) {
            copy::CAPTION_FOUND
        } else {
            copy::CAPTION_GENERIC
        };

        let badge = matching.first().map_or(DEFAULT_BADGE, |r| r.badge);
        let theme = state.gift.as_ref().map(|g| g.theme);
        let showcase_tag = match theme {
            Some(Theme::Inspiration) => copy::TAG_WISDOM,
            _ => copy::TAG_DEFAULT,
        };

        let end_card = state
            .end_card
            .as_deref()
            .and_then(|id| table.iter().find(|r| r.id == id))
            .map(|r| r.end_card);

        Self {
            screen: state.screen,
            greeting_name: state.url_name.clone(),
            name: state.current_name().to_string(),
            gift: state.gift.clone(),
            has_more_gifts,
            is_final_gift,
            offers_next_gift,
            continue_label,
            caption,
            opening: state.opening,
            welcome_emblem: recipients::welcome_emblem(&identity),
            badge,
            showcase_tag,
            model_url: assets::model_url(gift_name),
            audio_track: assets::audio_track(theme.unwrap_or(Theme::Festive)),
            end_card,
        }
    }

    /// Label of the call to action on the thank-you screen.
    pub fn check_list_label(&self) -> &'static str {
        if self.greeting_name.is_some() {
            copy::CHECK_MY_GIFT
        } else {
            copy::CHECK_GIFT_LIST
        }
    }

    /// Text placed on the clipboard by the share action.
    pub fn share_text(&self) -> Option<String> {
        self.gift.as_ref().map(GiftDescriptor::share_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::RecipientProgress;

    fn state(name: &str, screen: Screen) -> SessionState {
        SessionState {
            screen,
            input_name: name.into(),
            ..SessionState::default()
        }
    }

    fn with_gift(mut s: SessionState, gift_name: &str, cataloged: bool) -> SessionState {
        s.gift = Some(GiftDescriptor {
            recipient_name: s.input_name.clone(),
            gift_name: gift_name.into(),
            message: "m".into(),
            theme: Theme::Luxury,
            is_cataloged: cataloged,
        });
        s
    }

    fn at_cursor(mut s: SessionState, id: &str, cursor: usize) -> SessionState {
        s.progress.insert(
            id.into(),
            RecipientProgress {
                cursor,
                card_shown: false,
            },
        );
        s
    }

    #[test]
    fn plain_visitor_has_no_script_flags() {
        let view = View::derive(&with_gift(state("Mina", Screen::Revealed), "Toy Car", false));
        assert!(!view.has_more_gifts);
        assert!(!view.is_final_gift);
        assert!(!view.offers_next_gift);
        assert_eq!(view.continue_label, "Open Another");
        assert_eq!(view.caption, "A Gift For You!");
        assert_eq!(view.badge, DEFAULT_BADGE);
        assert_eq!(view.welcome_emblem, "🎄");
    }

    #[test]
    fn cataloged_gift_caption() {
        let view = View::derive(&with_gift(
            state("Shubham", Screen::ReadyToOpen),
            "The Master Key to the North Pole",
            true,
        ));
        assert_eq!(view.caption, "Gift Found!");
        assert_eq!(view.welcome_emblem, "👑");
    }

    #[test]
    fn queued_recipient_flags_follow_cursor() {
        let base = with_gift(state("Ranjana", Screen::Revealed), "A Cute Robot Guardian", true);

        let view = View::derive(&base);
        assert!(view.has_more_gifts);
        assert!(!view.is_final_gift);
        assert_eq!(view.caption, "Another Surprise For You...");
        assert_eq!(view.continue_label, "Wait, there's more...");
        assert_eq!(view.badge, "Best Sister Edition");

        let last = with_gift(
            at_cursor(base, "ranjana", 2),
            "The Crown of the Star Princess",
            true,
        );
        let view = View::derive(&last);
        assert!(!view.has_more_gifts);
        assert!(view.is_final_gift);
        assert!(view.offers_next_gift);
        assert_eq!(view.continue_label, "Read Final Message");
        assert_eq!(view.caption, "Gift Found!");
    }

    #[test]
    fn one_shot_is_final_until_shown() {
        let s = with_gift(state("Sierra", Screen::Revealed), "iPhone 17 Pro Max Titanium", true);
        let view = View::derive(&s);
        assert!(view.is_final_gift);
        assert!(!view.has_more_gifts);
        assert_eq!(view.continue_label, "Open Another");
        assert!(view.model_url.unwrap().contains("Astronaut"));

        let mut shown = s;
        shown.progress.insert(
            "sierra".into(),
            RecipientProgress {
                cursor: 0,
                card_shown: true,
            },
        );
        assert!(!View::derive(&shown).is_final_gift);
    }

    #[test]
    fn end_card_resolves_from_recipient_id() {
        let mut s = state("Sierra", Screen::EndCard);
        s.end_card = Some("sierra".into());
        let card = View::derive(&s).end_card.unwrap();
        assert_eq!(card.heading, "A Note from Santa");
        assert_eq!(card.sign_off, "Your lovely Santa Shubham");
    }

    #[test]
    fn check_list_label_depends_on_url_name() {
        let mut s = SessionState::new(Some("Mina"));
        s.screen = Screen::ThankYou;
        assert_eq!(View::derive(&s).check_list_label(), "Check My Gift");
        assert_eq!(
            View::derive(&state("", Screen::ThankYou)).check_list_label(),
            "Check Your Gift List"
        );
    }

    #[test]
    fn audio_follows_gift_theme() {
        assert_eq!(
            View::derive(&state("", Screen::Welcome)).audio_track,
            assets::FESTIVE_TRACK
        );
        let mut s = with_gift(state("Mina", Screen::Revealed), "Ticket to Mars", false);
        if let Some(g) = s.gift.as_mut() {
            g.theme = Theme::Tech;
        }
        assert_eq!(View::derive(&s).audio_track, assets::OTHER_TRACK);
    }

    #[test]
    fn share_text_uses_gift() {
        let view = View::derive(&with_gift(state("Mina", Screen::Revealed), "Toy Car", false));
        assert_eq!(
            view.share_text().unwrap(),
            "I got Toy Car for Christmas! \"m\" #LumiereDeNoel"
        );
        assert!(View::derive(&state("", Screen::Welcome)).share_text().is_none());
    }
}
