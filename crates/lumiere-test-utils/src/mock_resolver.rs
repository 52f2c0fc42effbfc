// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock resolver with scripted outcomes and configurable latency.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lumiere_core::{GiftDescriptor, GiftResolver, LumiereError, Theme};
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
enum Outcome {
    Gift(GiftDescriptor),
    Fail(String),
}

/// A resolver that replays scripted outcomes.
///
/// When the script is exhausted it answers with an uncataloged
/// "Mock Gift" for the requested name. Each call sleeps for the configured
/// latency first, so paused-clock tests can observe pacing.
pub struct MockResolver {
    outcomes: Arc<Mutex<VecDeque<Outcome>>>,
    names: Arc<Mutex<Vec<String>>>,
    latency: Duration,
}

impl MockResolver {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            names: Arc::new(Mutex::new(Vec::new())),
            latency: Duration::ZERO,
        }
    }

    /// Sleep for `latency` before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Queue a successful outcome.
    pub async fn push_gift(&self, gift: GiftDescriptor) {
        self.outcomes.lock().await.push_back(Outcome::Gift(gift));
    }

    /// Queue a failed outcome.
    pub async fn push_failure(&self, message: &str) {
        self.outcomes
            .lock()
            .await
            .push_back(Outcome::Fail(message.to_string()));
    }

    /// Names passed to `resolve`, in call order.
    pub async fn names(&self) -> Vec<String> {
        self.names.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.names.lock().await.len()
    }

    /// Convenience descriptor for tests.
    pub fn gift(recipient: &str, gift_name: &str, is_cataloged: bool) -> GiftDescriptor {
        GiftDescriptor {
            recipient_name: recipient.to_string(),
            gift_name: gift_name.to_string(),
            message: format!("{gift_name} message"),
            theme: Theme::Classic,
            is_cataloged,
        }
    }
}

impl Default for MockResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GiftResolver for MockResolver {
    async fn resolve(&self, name: &str) -> Result<GiftDescriptor, LumiereError> {
        self.names.lock().await.push(name.to_string());
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let next = self.outcomes.lock().await.pop_front();
        match next {
            Some(Outcome::Gift(gift)) => Ok(gift),
            Some(Outcome::Fail(message)) => Err(LumiereError::Internal(message)),
            None => Ok(Self::gift(name, "Mock Gift", false)),
        }
    }
}
