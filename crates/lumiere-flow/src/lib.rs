// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Lumiere greeting flow.
//!
//! The flow is split into a pure part and a driver:
//!
//! - [`machine`]: screens, events, effects, and the [`transition`] function
//! - [`view`]: display flags and copy derived from a [`SessionState`]
//! - [`pacing`]: the resolution join (resolver result and minimum wait)
//!   with its rotating status lines
//! - [`session`]: [`GreetingSession`], which feeds events through the
//!   machine, runs effects, and hands views to a [`Renderer`]

pub mod copy;
pub mod entry;
pub mod machine;
pub mod pacing;
pub mod session;
pub mod view;

pub use entry::user_from_url;
pub use machine::{transition, Effect, Event, RecipientProgress, Screen, SessionState};
pub use pacing::{resolve_with_pacing, Pacing, StatusTicker};
pub use session::{GreetingSession, Renderer};
pub use view::View;
