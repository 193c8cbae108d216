//! Result type for [`ScopedObjectStore::get`](crate::store::ScopedObjectStore::get).

use bytes::Bytes;
use serde::Serialize;

use super::Metadata;

/// An object read back from the store, with merged metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRecord {
    /// Full object payload.
    #[serde(skip)]
    pub content: Bytes,
    /// MIME content-type reported by the provider.
    pub content_type: Option<String>,
    /// User metadata merged with the `head_*` entries.
    pub metadata: Metadata,
}

impl ObjectRecord {
    /// Return a byte-slice view of the content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    /// Return the content-type, if set.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}
