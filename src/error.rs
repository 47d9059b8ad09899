//! Error types for delivery operations.

use thiserror::Error;

/// Caller-visible error for a single push operation.
///
/// Only two conditions cross the `push` boundary as errors: an empty input
/// message, and a backend delivery failure. An oversized message is absorbed
/// by policy and never surfaces here (see [`crate::Forwarder::push`]).
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("message is empty")]
    EmptyMessage,

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Error reported by a queue backend when a delivery attempt fails.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("delivery timed out: {message}")]
    Timeout { message: String },

    #[error("queue not found: {target}")]
    QueueNotFound { target: String },

    #[error("backend error ({provider}): {code} - {message}")]
    Provider {
        provider: String,
        code: String,
        message: String,
    },
}

impl DeliveryError {
    /// Check if the failure is transient and worth retrying by the caller.
    ///
    /// No retries happen inside this crate; this only informs the caller's
    /// own retry policy.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::ConnectionFailed { .. } => true,
            Self::Timeout { .. } => true,
            Self::QueueNotFound { .. } => false,
            Self::Provider { .. } => true, // Provider-side errors are usually transient
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
