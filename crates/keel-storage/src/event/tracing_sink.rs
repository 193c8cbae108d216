//! Default [`EventSink`] writing to [`tracing`].

use super::{Counter, EventSink, StorageEvent, StorageMetrics};
use crate::TRACING_TARGET_EVENTS;

/// Emits events as `tracing` records and counts into [`StorageMetrics`].
#[derive(Debug, Clone, Default)]
pub struct TracingSink {
    metrics: StorageMetrics,
}

impl TracingSink {
    /// Creates a sink with fresh counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink counting into existing `metrics`.
    pub fn with_metrics(metrics: StorageMetrics) -> Self {
        Self { metrics }
    }

    /// Counters this sink increments.
    pub fn metrics(&self) -> &StorageMetrics {
        &self.metrics
    }
}

impl EventSink for TracingSink {
    fn log_info(&self, event: &StorageEvent<'_>) {
        match event {
            StorageEvent::Initialized { bucket, path } | StorageEvent::Cleared { bucket, path } => {
                tracing::info!(
                    target: TRACING_TARGET_EVENTS,
                    event = event.name(),
                    bucket = %bucket,
                    path = %path,
                    "storage event"
                );
            }
            StorageEvent::ObjectStored { bucket, path, key } => {
                tracing::info!(
                    target: TRACING_TARGET_EVENTS,
                    event = event.name(),
                    bucket = %bucket,
                    path = %path,
                    key = %key,
                    "storage event"
                );
            }
            StorageEvent::ObjectRetrieved {
                bucket,
                path,
                key,
                content_type,
                metadata,
            } => {
                tracing::info!(
                    target: TRACING_TARGET_EVENTS,
                    event = event.name(),
                    bucket = %bucket,
                    path = %path,
                    key = %key,
                    content_type = ?content_type,
                    metadata = ?metadata,
                    "storage event"
                );
            }
        }
    }

    fn increment_counter(&self, counter: Counter) {
        let value = self.metrics.increment(counter);
        tracing::debug!(
            target: TRACING_TARGET_EVENTS,
            counter = counter.as_str(),
            value,
            "counter incremented"
        );
    }
}
