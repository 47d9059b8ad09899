//! Process-wide outcome counters for forwarding operations.
//!
//! One counter family, `forwarded_messages_total`, dimensioned only by the
//! `status` label (`ok`, `error`, `too_large`). The counter is shared across
//! all forwarder instances in the process; client identity travels in log
//! fields, not in a counter dimension.

use prometheus::{IntCounterVec, Opts, Registry};
use std::sync::{Arc, OnceLock};

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;

/// The three terminal outcomes of a push that passed the empty-input check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// Message accepted by the backend.
    Ok,
    /// Backend reported a delivery failure.
    Error,
    /// Message exceeded the payload limit and was dropped by policy.
    TooLarge,
}

impl PushOutcome {
    /// Value of the `status` label for this outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
            Self::TooLarge => "too_large",
        }
    }
}

/// Metrics for forwarding operations.
#[derive(Debug)]
pub struct ForwarderMetrics {
    /// Total pushes by terminal outcome (`status` label).
    pub messages_total: IntCounterVec,
}

static GLOBAL: OnceLock<Arc<ForwarderMetrics>> = OnceLock::new();

impl ForwarderMetrics {
    fn counters() -> IntCounterVec {
        // Static name and label set, construction cannot fail at runtime.
        IntCounterVec::new(
            Opts::new(
                "forwarded_messages_total",
                "Total number of forwarded messages",
            ),
            &["status"],
        )
        .expect("forwarded_messages_total counter definition is valid")
    }

    /// Create metrics registered with the given registry.
    pub fn register(registry: &Registry) -> Result<Self, prometheus::Error> {
        let messages_total = Self::counters();
        registry.register(Box::new(messages_total.clone()))?;
        Ok(Self { messages_total })
    }

    /// Create metrics not attached to any registry.
    ///
    /// Intended for tests that need isolated counters.
    pub fn unregistered() -> Self {
        Self {
            messages_total: Self::counters(),
        }
    }

    /// Process-wide metrics instance, registered with the default Prometheus
    /// registry on first use and shared by every forwarder created through
    /// the factory.
    pub fn global() -> Arc<Self> {
        GLOBAL
            .get_or_init(|| {
                let metrics = Self::register(prometheus::default_registry())
                    .expect("register forwarder metrics with default registry");
                Arc::new(metrics)
            })
            .clone()
    }

    /// Increment the counter for one terminal outcome.
    pub fn record(&self, outcome: PushOutcome) {
        self.messages_total
            .with_label_values(&[outcome.as_str()])
            .inc();
    }

    /// Current count for one outcome.
    pub fn outcome_count(&self, outcome: PushOutcome) -> u64 {
        self.messages_total
            .with_label_values(&[outcome.as_str()])
            .get()
    }
}
