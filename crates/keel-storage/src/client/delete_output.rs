//! Result type for [`ObjectStoreClient::delete_objects`](super::ObjectStoreClient::delete_objects).

use serde::Serialize;

/// Result of a bulk delete, as reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteOutput {
    /// Keys the backend reported as deleted.
    pub deleted: Vec<String>,
}

impl DeleteOutput {
    /// Number of deleted keys.
    pub fn len(&self) -> usize {
        self.deleted.len()
    }

    /// Whether nothing was deleted.
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty()
    }
}
