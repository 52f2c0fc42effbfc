// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock gift generator for deterministic testing.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use lumiere_core::{GeneratedGift, GiftGenerator, LumiereError, Theme};
use tokio::sync::Mutex;

/// A mock generator that returns pre-configured gifts.
///
/// Gifts are popped from a FIFO queue. When the queue is empty a default
/// "Mock Gift" is returned. A failing generator always errors.
pub struct MockGenerator {
    gifts: Arc<Mutex<VecDeque<GeneratedGift>>>,
    recipients: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl MockGenerator {
    /// Create a new mock generator with an empty queue.
    pub fn new() -> Self {
        Self::with_gifts(Vec::new())
    }

    /// Create a mock generator pre-loaded with the given gifts.
    pub fn with_gifts(gifts: Vec<GeneratedGift>) -> Self {
        Self {
            gifts: Arc::new(Mutex::new(VecDeque::from(gifts))),
            recipients: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Create a generator whose every call fails with a provider error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Add a gift to the end of the queue.
    pub async fn add_gift(&self, gift: GeneratedGift) {
        self.gifts.lock().await.push_back(gift);
    }

    /// Recipients passed to `generate`, in call order.
    pub async fn recipients(&self) -> Vec<String> {
        self.recipients.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.recipients.lock().await.len()
    }

    async fn next_gift(&self) -> GeneratedGift {
        self.gifts
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| GeneratedGift {
                gift_name: "Mock Gift".to_string(),
                message: "mock message".to_string(),
                theme: Theme::Whimsical,
            })
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GiftGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock-generator"
    }

    async fn generate(&self, recipient: &str) -> Result<GeneratedGift, LumiereError> {
        self.recipients.lock().await.push(recipient.to_string());
        if self.fail {
            return Err(LumiereError::Provider {
                message: "mock generator failure".to_string(),
                source: None,
            });
        }
        Ok(self.next_gift().await)
    }
}
