//! Object-store client capability.
//!
//! [`ObjectStoreClient`] is the seam between the scoped store and whatever
//! actually speaks to the storage service. Implementations own transport,
//! authentication and retries; the scoped store only composes keys and
//! shapes metadata around them.
//!
//! [`ObjectStoreAdapter`] implements the capability over any
//! [`object_store::ObjectStore`] backend.

use bytes::Bytes;

use crate::error::Result;
use crate::types::Metadata;

mod adapter;
mod delete_output;
mod get_output;
mod key;
mod object_summary;
mod put_output;

pub use adapter::ObjectStoreAdapter;
pub use delete_output::DeleteOutput;
pub use get_output::GetOutput;
pub use object_summary::ObjectSummary;
pub use put_output::PutOutput;

/// Bucket-addressed object storage operations.
///
/// Keys are passed through verbatim. Errors must use the
/// [`NotFound`](crate::Error::NotFound),
/// [`BucketNotFound`](crate::Error::BucketNotFound) and
/// [`Transport`](crate::Error::Transport) variants so callers can tell them
/// apart.
#[async_trait::async_trait]
pub trait ObjectStoreClient: Send + Sync + 'static {
    /// List the objects of `bucket` whose key starts with `prefix`.
    async fn list_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<ObjectSummary>>;

    /// Delete every key in `keys` with a single bulk request.
    ///
    /// An empty `keys` is a valid no-op request.
    async fn delete_objects(&self, bucket: &str, keys: Vec<String>) -> Result<DeleteOutput>;

    /// Upload `body` to `key`, attaching `content_type` and `metadata`.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
        metadata: Metadata,
    ) -> Result<PutOutput>;

    /// Retrieve the payload, content-type, metadata and head fields of `key`.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<GetOutput>;
}
