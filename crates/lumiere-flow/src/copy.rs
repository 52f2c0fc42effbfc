// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed screen copy.

/// Rotating status lines shown while a gift is being resolved.
pub const STATUS_MESSAGES: [&str; 5] = [
    "Checking the Secret List...",
    "Consulting Shubham Santa...",
    "Loading Sleigh with Goodies...",
    "Wrapping your surprise...",
    "Ho Ho Ho! Almost there...",
];

pub const WELCOME_HEADING: &str = "Happy Christmas";
pub const WELCOME_CONFIRM: &str = "Same To You! 🎅";

pub const THANK_YOU_HEADING: &str = "Thank You";
pub const THANK_YOU_LINES: [&str; 3] = ["Wishing you a prosperous", "2026", "in Advance"];
pub const CHECK_MY_GIFT: &str = "Check My Gift";
pub const CHECK_GIFT_LIST: &str = "Check Your Gift List";

pub const INPUT_HEADING: &str = "Shubham Santa's List";
pub const INPUT_PROMPT: &str = "Are you on the list? Let's check.";
pub const INPUT_PLACEHOLDER: &str = "Enter your name...";
pub const INPUT_SUBMIT: &str = "Check List & Get Gift";

pub const NOT_IN_LIST_HEADING: &str = "From the Desk of Santa";
pub const NOT_IN_LIST_LINES: [&str; 3] = [
    "We checked the list twice, and it seems the elves might have missed a page! But here at the North Pole...",
    "\"Shubham Santa won't do discrimination!\"",
    "Even if you weren't on the list, kindness is for everyone. I have prepared a special gift just for you.",
];
pub const COLLECT_GIFT: &str = "🎁 Collect Your Gift";

pub const CAPTION_MORE: &str = "Another Surprise For You...";
pub const CAPTION_FOUND: &str = "Gift Found!";
pub const CAPTION_GENERIC: &str = "A Gift For You!";

pub const REVEAL_HEADING: &str = "Merry Christmas";

pub const OPEN_ANOTHER: &str = "Open Another";
pub const SHARE_GIFT: &str = "Share Gift";
pub const START_OVER: &str = "Start Over";

pub const TAG_WISDOM: &str = "Gift of Wisdom";
pub const TAG_DEFAULT: &str = "Inside the Box";
