// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted recipients.
//!
//! A scripted recipient is matched by keyword against the normalized visitor
//! identity and owns either an ordered queue of extra gifts or a single
//! closing card. The table order is the evaluation order used when more
//! than one recipient matches.

use lumiere_core::Theme;

use crate::CatalogGift;

/// What happens after a scripted recipient's gift has been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Ordered extra gifts, one per continuation, followed by the closing card.
    Queue(&'static [CatalogGift]),
    /// A closing card shown once, with no extra gifts.
    OneShot,
}

/// Label override used when the current gift name contains `when_gift_contains`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalLabel {
    pub when_gift_contains: &'static str,
    pub label: &'static str,
}

/// The closing card shown after a recipient's script is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndCard {
    pub emblem: &'static str,
    pub heading: &'static str,
    pub lines: &'static [&'static str],
    pub sign_off: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialRecipient {
    /// Stable identifier used as the progress key.
    pub id: &'static str,
    /// Name placed on extra gift descriptors.
    pub display_name: &'static str,
    /// Substrings matched against the normalized identity.
    pub keywords: &'static [&'static str],
    pub script: Script,
    pub continue_label: &'static str,
    pub final_label: Option<FinalLabel>,
    /// Badge on the reveal card.
    pub badge: &'static str,
    pub end_card: EndCard,
}

impl SpecialRecipient {
    /// Substring match against an already-normalized identity.
    pub fn matches(&self, identity: &str) -> bool {
        !identity.is_empty() && self.keywords.iter().any(|k| identity.contains(k))
    }

    /// Number of extra gifts, zero for one-shot scripts.
    pub fn queue_len(&self) -> usize {
        match self.script {
            Script::Queue(gifts) => gifts.len(),
            Script::OneShot => 0,
        }
    }

    /// Extra gift at `index`, if the script is a queue and the index is in range.
    pub fn queued_gift(&self, index: usize) -> Option<&'static CatalogGift> {
        match self.script {
            Script::Queue(gifts) => gifts.get(index),
            Script::OneShot => None,
        }
    }

    /// Continue label for the gift currently on screen.
    pub fn continue_label_for(&self, gift_name: &str) -> &'static str {
        match self.final_label {
            Some(f) if gift_name.contains(f.when_gift_contains) => f.label,
            _ => self.continue_label,
        }
    }
}

const BHAGWATI_GIFTS: &[CatalogGift] = &[
    CatalogGift {
        gift_name: "A Red Rose That Never Fades",
        message: "Like this bloom, my love for you remains fresh, vibrant, and beautiful, today and for all eternity.",
        theme: Theme::Luxury,
    },
    CatalogGift {
        gift_name: "A Diamond Promise Ring",
        message: "A circle has no end, just like my love for you. A promise of forever, starting now.",
        theme: Theme::Luxury,
    },
];

const RANJANA_GIFTS: &[CatalogGift] = &[
    CatalogGift {
        gift_name: "A Magical Flying Skateboard",
        message: "So you can zoom through life, chase your wildest dreams, and never let anything slow you down!",
        theme: Theme::Whimsical,
    },
    CatalogGift {
        gift_name: "The Crown of the Star Princess",
        message: "Because to me, you are royalty. Keep shining, keep ruling your world with that beautiful smile.",
        theme: Theme::Luxury,
    },
];

const SAGAN_GIFTS: &[CatalogGift] = &[
    CatalogGift {
        gift_name: "Quantum Computer with AI Assistant",
        message: "To my brilliant brother: Just like you explore the cosmos, this quantum computer will help you unlock the mysteries of the universe through code and computation. The future of science is in your hands.",
        theme: Theme::Tech,
    },
    CatalogGift {
        gift_name: "Neuralink Brain-Computer Interface",
        message: "For the mind that questions everything: Connect your brilliant brain directly to the digital universe. No more limits between thought and technology. You were born for this revolution.",
        theme: Theme::Tech,
    },
    CatalogGift {
        gift_name: "Autonomous Space Exploration Drone",
        message: "Explore distant worlds without leaving Earth. This drone carries your curiosity to places humans can only dream of. The cosmos is calling, and you're the perfect explorer.",
        theme: Theme::Tech,
    },
];

/// Reveal badge for visitors without a scripted recipient.
pub const DEFAULT_BADGE: &str = "Official North Pole Delivery";

/// Scripted recipients in evaluation order.
pub const SPECIAL_RECIPIENTS: &[SpecialRecipient] = &[
    SpecialRecipient {
        id: "bhagwati",
        display_name: "Bhagwati",
        keywords: &["bhagwati"],
        script: Script::Queue(BHAGWATI_GIFTS),
        continue_label: "I have one more surprise...",
        final_label: Some(FinalLabel {
            when_gift_contains: "Ring",
            label: "One Last Message...",
        }),
        badge: "My Love Special Edition",
        end_card: EndCard {
            emblem: "💌",
            heading: "One Last Thing...",
            lines: &[
                "\"We are far apart right now, but you are always in my heart.\"",
                "I love you and I miss you deeply.",
                "I was thinking about you, but today...",
                "I am your Santa! Ho Ho Ho! 🎅",
                "Have a great life ahead, my love.",
            ],
            sign_off: "See ya soon.",
        },
    },
    SpecialRecipient {
        id: "ranjana",
        display_name: "Ranjana",
        keywords: &["ranjana"],
        script: Script::Queue(RANJANA_GIFTS),
        continue_label: "Wait, there's more...",
        final_label: Some(FinalLabel {
            when_gift_contains: "Crown",
            label: "Read Final Message",
        }),
        badge: "Best Sister Edition",
        end_card: EndCard {
            emblem: "💌",
            heading: "One Last Thing...",
            lines: &[
                "\"To my dearest little sister...\"",
                "No matter how big you get or how far you go, I will always be your big brother watching over you.",
                "Keep dreaming, keep smiling, and remember...",
                "I've always got your back! 🛡️",
                "May your life be as magical as you are.",
            ],
            sign_off: "Merry Christmas, Choti!",
        },
    },
    SpecialRecipient {
        id: "carl-sagan",
        display_name: "Carl Sagan",
        keywords: &["carl sagan", "sagan"],
        script: Script::Queue(SAGAN_GIFTS),
        continue_label: "Open Another",
        final_label: None,
        badge: "Cosmic Explorer Edition",
        end_card: EndCard {
            emblem: "💌",
            heading: "One Last Thing...",
            lines: &[
                "\"To my brilliant brother, the tech visionary...\"",
                "You've always been ahead of your time, pushing the boundaries of what's possible with technology. From the first computers to quantum leaps forward, you've been the pioneer showing us the way.",
                "Keep innovating, keep coding, keep exploring the infinite possibilities of technology...",
                "The future belongs to dreamers like you! 🚀",
                "May your code compile perfectly and your algorithms run flawlessly.",
            ],
            sign_off: "Merry Christmas, Bro!",
        },
    },
    SpecialRecipient {
        id: "sierra",
        display_name: "Sierra",
        keywords: &["sierra"],
        script: Script::OneShot,
        continue_label: "Open Another",
        final_label: None,
        badge: DEFAULT_BADGE,
        end_card: EndCard {
            emblem: "🎅",
            heading: "A Note from Santa",
            lines: &[
                "\"Sorry I couldn't find the iPhone...\"",
                "(...real ones are hard to email!)",
            ],
            sign_off: "Your lovely Santa Shubham",
        },
    },
];

/// Emblems shown on the welcome screen, first keyword match wins.
pub const WELCOME_EMBLEMS: &[(&str, &str)] = &[
    ("bhagwati", "💝"),
    ("ranjana", "🧚"),
    ("sagan", "🚀"),
    ("shubham", "👑"),
];

/// Emblem used when no keyword matches.
pub const DEFAULT_EMBLEM: &str = "🎄";

/// Entries of `table` matching `identity`, in table order.
pub fn matching<'a>(
    table: &'a [SpecialRecipient],
    identity: &'a str,
) -> impl Iterator<Item = &'a SpecialRecipient> + 'a {
    table.iter().filter(move |r| r.matches(identity))
}

/// Welcome emblem for `identity`.
pub fn welcome_emblem(identity: &str) -> &'static str {
    if identity.is_empty() {
        return DEFAULT_EMBLEM;
    }
    WELCOME_EMBLEMS
        .iter()
        .find(|(keyword, _)| identity.contains(keyword))
        .map(|(_, emblem)| *emblem)
        .unwrap_or(DEFAULT_EMBLEM)
}
