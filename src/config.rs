//! Forwarder configuration types.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Configuration for a single forwarding client.
///
/// Owned by the caller and consumed at construction time. The surrounding
/// configuration loader is responsible for guaranteeing that `name` and
/// `target` are non-empty; no validation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwarderConfig {
    /// Identity used in logs, set once at creation.
    pub name: String,
    /// Destination queue address (e.g. an SQS queue URL).
    pub target: String,
}

impl ForwarderConfig {
    /// Create a new forwarder configuration.
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
        }
    }
}
