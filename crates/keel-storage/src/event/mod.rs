//! Lifecycle events and counters emitted by the scoped store.

use serde::Serialize;

use crate::types::Metadata;

mod metrics;
mod tracing_sink;

pub use metrics::{MetricsSnapshot, StorageMetrics};
pub use tracing_sink::TracingSink;

/// Counters incremented by the scoped store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(strum::Display, strum::IntoStaticStr, strum::EnumIter)]
pub enum Counter {
    /// One per [`put`](crate::store::ScopedObjectStore::put) attempt, counted
    /// before the write is issued.
    StoragePuts,
    /// One per successful [`get`](crate::store::ScopedObjectStore::get).
    StorageGets,
}

impl Counter {
    /// Counter name as reported to metric backends.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Structured lifecycle event.
///
/// Serializes to a flat object tagged with `event`, for example
/// `{"event":"StorageCleared","bucket":"b","path":"p"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event")]
pub enum StorageEvent<'a> {
    /// A scoped store was constructed.
    #[serde(rename = "StorageInitialized")]
    Initialized { bucket: &'a str, path: &'a str },

    /// An object was written.
    #[serde(rename = "StorageObjectStored")]
    ObjectStored {
        bucket: &'a str,
        path: &'a str,
        key: &'a str,
    },

    /// An object was read back.
    #[serde(rename = "StorageObjectRetrieved", rename_all = "camelCase")]
    ObjectRetrieved {
        bucket: &'a str,
        path: &'a str,
        key: &'a str,
        content_type: Option<&'a str>,
        metadata: &'a Metadata,
    },

    /// Everything under the path was deleted.
    #[serde(rename = "StorageCleared")]
    Cleared { bucket: &'a str, path: &'a str },
}

impl StorageEvent<'_> {
    /// Event name, as found in the serialized `event` field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initialized { .. } => "StorageInitialized",
            Self::ObjectStored { .. } => "StorageObjectStored",
            Self::ObjectRetrieved { .. } => "StorageObjectRetrieved",
            Self::Cleared { .. } => "StorageCleared",
        }
    }
}

/// Receiver of structured log events and counter increments.
///
/// Implementations must not fail; delivery problems are theirs to handle.
pub trait EventSink: Send + Sync + 'static {
    /// Record an informational lifecycle event.
    fn log_info(&self, event: &StorageEvent<'_>);

    /// Increment the named counter by one.
    fn increment_counter(&self, counter: Counter);
}
