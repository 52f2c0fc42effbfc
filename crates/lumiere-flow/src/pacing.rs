// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Paced gift resolution.
//!
//! The resolver call and a minimum wait run as a join: resolution completes
//! only once both have finished. While the join is pending a [`StatusTicker`]
//! cycles through status lines; it is dropped as soon as the join settles.

use std::time::Duration;

use lumiere_core::{GiftDescriptor, GiftResolver, LumiereError};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::debug;

use crate::copy::STATUS_MESSAGES;

/// Timing of the processing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Resolution never completes sooner than this.
    pub min_wait: Duration,
    /// Period of the status line rotation.
    pub status_interval: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            min_wait: Duration::from_millis(3000),
            status_interval: Duration::from_millis(1200),
        }
    }
}

/// Cycles through [`STATUS_MESSAGES`] on a fixed period.
pub struct StatusTicker {
    interval: Interval,
    index: usize,
}

impl StatusTicker {
    /// The first line is current immediately; the first advance happens one
    /// period later.
    pub fn new(period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval, index: 0 }
    }

    pub fn current(&self) -> &'static str {
        STATUS_MESSAGES[self.index]
    }

    /// Waits for the next period and returns the new line.
    pub async fn tick(&mut self) -> &'static str {
        self.interval.tick().await;
        self.index = (self.index + 1) % STATUS_MESSAGES.len();
        self.current()
    }
}

/// Resolves `name`, taking at least `pacing.min_wait`.
///
/// `on_status` receives the initial status line and every rotation until the
/// join settles. The resolver result is returned unchanged.
pub async fn resolve_with_pacing<F>(
    resolver: &dyn GiftResolver,
    name: &str,
    pacing: Pacing,
    mut on_status: F,
) -> Result<GiftDescriptor, LumiereError>
where
    F: FnMut(&'static str),
{
    let started = Instant::now();
    let join = async {
        let (result, ()) = tokio::join!(
            resolver.resolve(name),
            tokio::time::sleep(pacing.min_wait)
        );
        result
    };
    tokio::pin!(join);

    let mut ticker = StatusTicker::new(pacing.status_interval);
    on_status(ticker.current());

    let result = loop {
        tokio::select! {
            biased;
            result = &mut join => break result,
            line = ticker.tick() => on_status(line),
        }
    };

    debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        ok = result.is_ok(),
        "resolution settled"
    );
    result
}

#[cfg(test)]
mod tests {
    use lumiere_test_utils::MockResolver;

    use super::*;

    fn pacing(min_wait_ms: u64) -> Pacing {
        Pacing {
            min_wait: Duration::from_millis(min_wait_ms),
            status_interval: Duration::from_millis(1200),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn instant_resolver_still_waits_minimum() {
        let resolver = MockResolver::new();
        let start = Instant::now();

        let gift = resolve_with_pacing(&resolver, "Mina", pacing(3000), |_| {})
            .await
            .unwrap();

        assert_eq!(gift.recipient_name, "Mina");
        assert!(start.elapsed() >= Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_resolver_is_joined_not_chained() {
        let resolver = MockResolver::new().with_latency(Duration::from_millis(5000));
        let start = Instant::now();

        resolve_with_pacing(&resolver, "Mina", pacing(3000), |_| {})
            .await
            .unwrap();

        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(5000));
        assert!(elapsed < Duration::from_millis(8000));
    }

    #[tokio::test(start_paused = true)]
    async fn status_lines_rotate_until_settled() {
        let resolver = MockResolver::new();
        let mut lines = Vec::new();

        resolve_with_pacing(&resolver, "Mina", pacing(3000), |line| lines.push(line))
            .await
            .unwrap();

        // Initial line, then ticks at 1.2s and 2.4s; the join settles at 3s.
        assert_eq!(lines, STATUS_MESSAGES[..3].to_vec());
    }

    #[tokio::test(start_paused = true)]
    async fn status_lines_wrap_around() {
        let resolver = MockResolver::new();
        let mut lines = Vec::new();

        resolve_with_pacing(&resolver, "Mina", pacing(7000), |line| lines.push(line))
            .await
            .unwrap();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[5], STATUS_MESSAGES[0]);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_is_returned_after_minimum_wait() {
        let resolver = MockResolver::new();
        resolver.push_failure("boom").await;
        let start = Instant::now();

        let result = resolve_with_pacing(&resolver, "Mina", pacing(3000), |_| {}).await;

        assert!(result.is_err());
        assert!(start.elapsed() >= Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_starts_on_first_line() {
        let mut ticker = StatusTicker::new(Duration::from_millis(1200));
        assert_eq!(ticker.current(), STATUS_MESSAGES[0]);
        assert_eq!(ticker.tick().await, STATUS_MESSAGES[1]);
    }
}
