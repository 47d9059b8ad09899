//! The outbound delivery contract and message identifiers.

use crate::error::DeliveryError;
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;

/// Identifier assigned to a message accepted by a backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    /// Generate a new random message ID.
    ///
    /// Used by backends that assign identifiers locally (e.g. the in-memory
    /// backend); remote backends return their own identifiers instead.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get message ID as string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MessageId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<String> for MessageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Outbound contract to the queue service collaborator.
///
/// A single operation: send one message body to one destination, returning
/// the backend-assigned identifier or a delivery error. Implementations must
/// be safe for concurrent use from multiple tasks; the forwarder relies on
/// that guarantee rather than locking around calls.
#[async_trait]
pub trait QueueBackend: Send + Sync {
    /// Send `body` to the queue identified by `target`.
    async fn send_message(&self, target: &str, body: &str) -> Result<MessageId, DeliveryError>;
}
