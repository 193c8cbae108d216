//! In-process provider using [`object_store::memory::InMemory`].

use super::Provider;
use crate::client::ObjectStoreAdapter;
use crate::error::{Error, Result};

/// Provider for a fresh, empty in-memory bucket.
///
/// Contents live as long as the returned client and its clones.
pub struct MemoryProvider;

impl Provider for MemoryProvider {
    type Config = ();

    const ID: &str = "memory";

    fn connect(bucket: &str, _config: &Self::Config) -> Result<ObjectStoreAdapter> {
        if bucket.is_empty() {
            return Err(Error::config(format!("[{}] bucket name is required", Self::ID)));
        }
        Ok(ObjectStoreAdapter::in_memory(bucket))
    }
}
