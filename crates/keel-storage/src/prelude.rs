//! Convenience re-exports.

pub use crate::client::{
    DeleteOutput, GetOutput, ObjectStoreAdapter, ObjectStoreClient, ObjectSummary, PutOutput,
};
pub use crate::config::S3Config;
pub use crate::event::{Counter, EventSink, StorageEvent, TracingSink};
pub use crate::providers::{MemoryProvider, Provider, S3Provider};
pub use crate::store::ScopedObjectStore;
pub use crate::types::{Metadata, ObjectRecord};
pub use crate::{Error, Result};
