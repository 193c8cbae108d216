//! In-process counters for storage operations.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Counter;

/// Cloneable set of atomic counters, one per [`Counter`].
///
/// Clones share the same underlying counters.
#[derive(Debug, Clone, Default)]
pub struct StorageMetrics {
    puts: Arc<AtomicU64>,
    gets: Arc<AtomicU64>,
}

impl StorageMetrics {
    /// Creates a new set of zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, counter: Counter) -> &AtomicU64 {
        match counter {
            Counter::StoragePuts => &self.puts,
            Counter::StorageGets => &self.gets,
        }
    }

    /// Increments `counter` by one and returns the new value.
    pub fn increment(&self, counter: Counter) -> u64 {
        self.slot(counter).fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Current value of `counter`.
    pub fn get(&self, counter: Counter) -> u64 {
        self.slot(counter).load(Ordering::Relaxed)
    }

    /// Gets current metrics snapshot.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            storage_puts: self.get(Counter::StoragePuts),
            storage_gets: self.get(Counter::StorageGets),
            timestamp: Timestamp::now(),
        }
    }

    /// Resets all counters.
    pub fn reset(&self) {
        self.puts.store(0, Ordering::Relaxed);
        self.gets.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of the counters at a specific point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    /// Put attempts.
    pub storage_puts: u64,
    /// Successful gets.
    pub storage_gets: u64,
    /// When the snapshot was taken.
    pub timestamp: Timestamp,
}
