//! Error type for scoped object-storage operations.

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for storage operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by the storage accessor and its client adapters.
///
/// [`NotFound`](Error::NotFound), [`BucketNotFound`](Error::BucketNotFound) and
/// [`Transport`](Error::Transport) originate in an
/// [`ObjectStoreClient`](crate::client::ObjectStoreClient) and reach the caller
/// exactly as the client reported them.
#[derive(Debug, thiserror::Error)]
#[must_use = "errors should be handled appropriately"]
pub enum Error {
    /// The requested key does not exist in the bucket.
    #[error("object not found: {bucket}/{key}")]
    NotFound {
        /// Bucket that was queried.
        bucket: String,
        /// Effective key that was queried.
        key: String,
    },

    /// The bucket does not exist or is not reachable with the current client.
    #[error("bucket not found: {bucket}")]
    BucketNotFound {
        /// Bucket that was queried.
        bucket: String,
    },

    /// Network, timeout or service failure reported by the underlying store.
    #[error("object store transport failure: {source}")]
    Transport {
        /// Whether repeating the call may succeed.
        retryable: bool,
        /// Underlying client error.
        #[source]
        source: BoxedError,
    },

    /// The key cannot be stored by the backend without changing its meaning.
    #[error("invalid object key `{key}`: {reason}")]
    InvalidKey {
        /// Effective key that was rejected.
        key: String,
        /// Why the backend cannot represent it.
        reason: &'static str,
    },

    /// Missing or invalid client configuration.
    #[error("invalid storage configuration: {0}")]
    Config(String),

    /// A provider timestamp could not be rendered as an HTTP-date.
    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] jiff::Error),
}

impl Error {
    /// Creates a new not found error.
    pub fn not_found(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self::NotFound {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Creates a new bucket not found error.
    pub fn bucket_not_found(bucket: impl Into<String>) -> Self {
        Self::BucketNotFound {
            bucket: bucket.into(),
        }
    }

    /// Creates a new transport error wrapping `source`.
    pub fn transport(
        source: impl std::error::Error + Send + Sync + 'static,
        retryable: bool,
    ) -> Self {
        Self::Transport {
            retryable,
            source: Box::new(source),
        }
    }

    /// Creates a new invalid key error.
    pub fn invalid_key(key: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidKey {
            key: key.into(),
            reason,
        }
    }

    /// Creates a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns whether this error indicates a missing object.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns whether this error indicates a missing bucket.
    pub fn is_bucket_not_found(&self) -> bool {
        matches!(self, Self::BucketNotFound { .. })
    }

    /// Whether the caller may retry this operation.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { retryable, .. } => *retryable,
            Self::NotFound { .. }
            | Self::BucketNotFound { .. }
            | Self::InvalidKey { .. }
            | Self::Config(_)
            | Self::Timestamp(_) => false,
        }
    }
}
