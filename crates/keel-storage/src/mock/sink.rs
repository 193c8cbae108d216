//! [`EventSink`] that keeps everything it receives in memory.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::event::{Counter, EventSink, StorageEvent, StorageMetrics};

/// Cloneable recording sink. Clones share events and counters.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<serde_json::Value>>>,
    metrics: StorageMetrics,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<serde_json::Value>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Every event received so far, serialized.
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.lock().clone()
    }

    /// The `event` field of every event received so far.
    pub fn event_names(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|event| event["event"].as_str().map(str::to_owned))
            .collect()
    }

    /// Current value of `counter`.
    pub fn counter(&self, counter: Counter) -> u64 {
        self.metrics.get(counter)
    }
}

impl EventSink for MemorySink {
    fn log_info(&self, event: &StorageEvent<'_>) {
        let value = serde_json::to_value(event).unwrap_or_else(|e| {
            serde_json::json!({ "event": event.name(), "error": e.to_string() })
        });
        self.lock().push(value);
    }

    fn increment_counter(&self, counter: Counter) {
        self.metrics.increment(counter);
    }
}
