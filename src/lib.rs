//! # Queue Forwarder
//!
//! Outbound forwarding client for managed message queues. A [`Forwarder`] is
//! bound to a single destination queue at construction and delivers one text
//! message per [`Forwarder::push`] call, recording every outcome in logs and
//! a process-wide metric.
//!
//! This library provides:
//! - A provider-agnostic delivery contract ([`QueueBackend`])
//! - A production AWS SQS backend and an in-memory backend for testing
//! - Payload size enforcement against the backend's 256 KiB limit
//! - Per-outcome metrics (`ok` / `error` / `too_large`) and structured logs
//!
//! Retry, backoff, and batching are deliberately out of scope: `push` makes
//! exactly one delivery attempt and reports a single pass/fail result, leaving
//! the retry decision to the caller.
//!
//! ## Module Organization
//!
//! - [`config`] - Forwarder configuration types
//! - [`error`] - Error types for delivery operations
//! - [`backend`] - The outbound delivery contract and message identifiers
//! - [`backends`] - Backend implementations (SQS, in-memory)
//! - [`forwarder`] - The forwarding client and its factory
//! - [`metrics`] - Process-wide outcome counters

// Module declarations
pub mod backend;
pub mod backends;
pub mod config;
pub mod error;
pub mod forwarder;
pub mod metrics;

// Re-export commonly used types at crate root for convenience
pub use backend::{MessageId, QueueBackend};
pub use backends::{InMemoryBackend, SqsBackend};
pub use config::ForwarderConfig;
pub use error::{DeliveryError, ForwardError};
pub use forwarder::{Forwarder, ForwarderFactory, MAX_MESSAGE_SIZE};
pub use metrics::{ForwarderMetrics, PushOutcome};
