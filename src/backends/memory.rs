//! In-memory queue backend for testing and development.
//!
//! Stores delivered bodies per target in FIFO order and assigns locally
//! generated message IDs. Thread-safe; suitable for exercising forwarders in
//! tests without any external queue service.

use crate::backend::{MessageId, QueueBackend};
use crate::error::DeliveryError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;

/// Queue backend keeping all delivered messages in process memory.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    queues: RwLock<HashMap<String, Vec<String>>>,
}

impl InMemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bodies delivered to `target`, oldest first.
    pub async fn messages(&self, target: &str) -> Vec<String> {
        let queues = self.queues.read().await;
        queues.get(target).cloned().unwrap_or_default()
    }

    /// Number of messages delivered to `target`.
    pub async fn message_count(&self, target: &str) -> usize {
        let queues = self.queues.read().await;
        queues.get(target).map(Vec::len).unwrap_or(0)
    }

    /// Total messages delivered across all targets.
    pub async fn total_sent(&self) -> usize {
        let queues = self.queues.read().await;
        queues.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl QueueBackend for InMemoryBackend {
    async fn send_message(&self, target: &str, body: &str) -> Result<MessageId, DeliveryError> {
        let mut queues = self.queues.write().await;
        queues
            .entry(target.to_string())
            .or_default()
            .push(body.to_string());
        Ok(MessageId::new())
    }
}
