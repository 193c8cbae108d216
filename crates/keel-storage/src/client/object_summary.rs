//! Listing entry returned by [`ObjectStoreClient::list_objects`](super::ObjectStoreClient::list_objects).

use object_store::ObjectMeta;

use super::key::path_to_key;

/// A single listed object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    /// Full key of the object within its bucket, as it was written.
    pub key: String,
    /// Size of the object in bytes.
    pub size: u64,
}

impl ObjectSummary {
    /// Creates a summary for `key`.
    pub fn new(key: impl Into<String>, size: u64) -> Self {
        Self {
            key: key.into(),
            size,
        }
    }
}

impl From<ObjectMeta> for ObjectSummary {
    fn from(meta: ObjectMeta) -> Self {
        Self {
            key: path_to_key(&meta.location),
            size: meta.size,
        }
    }
}
