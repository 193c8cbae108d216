//! Provider trait for building bucket-bound clients from configuration.

use crate::client::ObjectStoreAdapter;
use crate::error::Result;

/// Factory for [`ObjectStoreAdapter`]s bound to a single bucket.
///
/// Building a client validates configuration only; no request is sent until
/// the first operation.
pub trait Provider {
    /// Strongly-typed configuration for this provider.
    type Config;

    /// Unique identifier (e.g. "s3", "memory").
    const ID: &str;

    /// Create a client serving `bucket`.
    fn connect(bucket: &str, config: &Self::Config) -> Result<ObjectStoreAdapter>;
}
