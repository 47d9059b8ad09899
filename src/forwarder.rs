//! The forwarding client and its factory.

use crate::backend::QueueBackend;
use crate::backends::SqsBackend;
use crate::config::ForwarderConfig;
use crate::error::ForwardError;
use crate::metrics::{ForwarderMetrics, PushOutcome};
use std::sync::Arc;
use tracing::{error, info};

#[cfg(test)]
#[path = "forwarder_tests.rs"]
mod tests;

/// Maximum payload size accepted by the queue backend, in bytes (256 KiB).
///
/// Fixed by the backend service, not configurable.
pub const MAX_MESSAGE_SIZE: usize = 262_144;

/// Factory for creating forwarding clients bound to one destination queue.
pub struct ForwarderFactory;

impl ForwarderFactory {
    /// Create a forwarder with the default SQS backend, built from ambient
    /// environment/session configuration.
    pub async fn create(config: ForwarderConfig) -> Forwarder {
        let backend = Arc::new(SqsBackend::from_env().await);
        Self::create_with_backend(config, backend)
    }

    /// Create a forwarder using the supplied backend verbatim.
    ///
    /// Used to inject test doubles or an alternate backend implementation.
    pub fn create_with_backend(config: ForwarderConfig, backend: Arc<dyn QueueBackend>) -> Forwarder {
        let forwarder = Forwarder::new(config, backend, ForwarderMetrics::global());
        info!(forwarder = %forwarder.name(), "Created forwarder");
        forwarder
    }
}

/// Forwarding client bound to a single destination queue.
///
/// Fully initialized at construction; holds no mutable per-call state, so a
/// single instance may be used concurrently from multiple tasks as long as
/// the backend itself is concurrency-safe.
pub struct Forwarder {
    name: String,
    backend: Arc<dyn QueueBackend>,
    target: String,
    metrics: Arc<ForwarderMetrics>,
}

impl Forwarder {
    pub(crate) fn new(
        config: ForwarderConfig,
        backend: Arc<dyn QueueBackend>,
        metrics: Arc<ForwarderMetrics>,
    ) -> Self {
        Self {
            name: config.name,
            backend,
            target: config.target,
            metrics,
        }
    }

    /// Forwarder name, as supplied at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Destination queue address this forwarder is bound to.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Send one message to the bound destination queue.
    ///
    /// Makes a single delivery attempt; no retries, no internal timeout. The
    /// call resolves when the backend resolves.
    ///
    /// # Oversized messages are dropped, not errored
    ///
    /// A message larger than [`MAX_MESSAGE_SIZE`] bytes is **not** sent and
    /// **no error is returned**: it is logged, counted under the `too_large`
    /// status, and reported to the caller as success. This is deliberate
    /// business policy. Callers that must distinguish "delivered" from
    /// "dropped for size" have to check the message length themselves before
    /// calling.
    ///
    /// # Errors
    ///
    /// - [`ForwardError::EmptyMessage`] for an empty input; nothing is sent,
    ///   logged, or counted.
    /// - [`ForwardError::Delivery`] wrapping the backend's failure; counted
    ///   under the `error` status and logged before propagating.
    pub async fn push(&self, message: &str) -> Result<(), ForwardError> {
        if message.is_empty() {
            return Err(ForwardError::EmptyMessage);
        }

        if message.len() > MAX_MESSAGE_SIZE {
            error!(
                forwarder = %self.name,
                size = message.len(),
                "Message too large, dropping"
            );
            self.metrics.record(PushOutcome::TooLarge);
            return Ok(());
        }

        match self.backend.send_message(&self.target, message).await {
            Ok(message_id) => {
                self.metrics.record(PushOutcome::Ok);
                info!(
                    forwarder = %self.name,
                    response_id = %message_id,
                    "Forward succeeded"
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    forwarder = %self.name,
                    error = %err,
                    "Could not forward message"
                );
                self.metrics.record(PushOutcome::Error);
                Err(err.into())
            }
        }
    }
}
