//! Result type for [`ObjectStoreClient::get_object`](super::ObjectStoreClient::get_object).

use bytes::Bytes;
use jiff::Timestamp;

use crate::types::Metadata;

/// Result of a successful [`ObjectStoreClient::get_object`](super::ObjectStoreClient::get_object) call.
#[derive(Debug, Clone)]
pub struct GetOutput {
    /// Raw bytes of the retrieved object.
    pub data: Bytes,
    /// MIME content-type, if the backend provides one.
    pub content_type: Option<String>,
    /// User metadata stored alongside the object.
    pub metadata: Metadata,
    /// Content hash / version identifier, if the backend provides one.
    pub e_tag: Option<String>,
    /// Time of the last write.
    pub last_modified: Timestamp,
}
