//! Path-scoped access to a bucket.
//!
//! [`ScopedObjectStore`] pins a `(bucket, path)` pair and forwards to an
//! [`ObjectStoreClient`], adding key composition, read-time metadata
//! synthesis and list-then-delete clearing. Client errors are returned as the
//! client reported them; nothing is retried or rewrapped here.

use std::sync::Arc;

use bytes::Bytes;

use crate::TRACING_TARGET_STORE;
use crate::client::{DeleteOutput, ObjectStoreAdapter, ObjectStoreClient, PutOutput};
use crate::config::S3Config;
use crate::error::{Error, Result};
use crate::event::{Counter, EventSink, StorageEvent, TracingSink};
use crate::providers::{Provider, S3Provider};
use crate::types::{Metadata, ObjectRecord, metadata};

/// Content-type used by [`ScopedObjectStore::put`] when none is given.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Accessor for the objects of one bucket living under one path prefix.
///
/// The logical key `k` maps to the effective key `"{path}/{k}"`, verbatim.
#[derive(Clone)]
pub struct ScopedObjectStore {
    bucket: String,
    path: String,
    client: Arc<dyn ObjectStoreClient>,
    events: Arc<dyn EventSink>,
}

impl ScopedObjectStore {
    /// Creates a store scoped to `path` within `bucket`, using `client`.
    ///
    /// Emits a `StorageInitialized` event through the default [`TracingSink`].
    /// No request is sent to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `bucket` is empty.
    pub fn new(
        client: impl ObjectStoreClient,
        bucket: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<Self> {
        Self::with_event_sink(client, TracingSink::new(), bucket, path)
    }

    /// Like [`new`](Self::new), reporting events and counters to `events`.
    pub fn with_event_sink(
        client: impl ObjectStoreClient,
        events: impl EventSink,
        bucket: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<Self> {
        Self::from_parts(Arc::new(client), Arc::new(events), bucket, path)
    }

    /// Like [`new`](Self::new), sharing an existing client and sink.
    pub fn from_parts(
        client: Arc<dyn ObjectStoreClient>,
        events: Arc<dyn EventSink>,
        bucket: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<Self> {
        let bucket = bucket.into();
        let path = path.into();

        if bucket.is_empty() {
            return Err(Error::config("bucket name must not be empty"));
        }

        events.log_info(&StorageEvent::Initialized {
            bucket: &bucket,
            path: &path,
        });

        Ok(Self {
            bucket,
            path,
            client,
            events,
        })
    }

    /// Creates a store backed by an S3-compatible service described by `config`.
    pub fn connect(
        config: &S3Config,
        bucket: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<Self> {
        let bucket = bucket.into();
        let client: ObjectStoreAdapter = S3Provider::connect(&bucket, config)?;
        Self::new(client, bucket, path)
    }

    /// Bucket this store reads from and writes to.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Path prefix of every key this store touches.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Key actually used against the backend for the logical `key`.
    pub fn effective_key(&self, key: &str) -> String {
        format!("{}/{}", self.path, key)
    }

    /// Stores `data` under `key`.
    ///
    /// `content_type` defaults to [`DEFAULT_CONTENT_TYPE`]. `meta` is written
    /// as-is; head entries are only synthesized on read.
    pub async fn put(
        &self,
        key: &str,
        data: impl Into<Bytes>,
        content_type: Option<&str>,
        meta: Metadata,
    ) -> Result<PutOutput> {
        let effective_key = self.effective_key(key);
        let content_type = content_type.unwrap_or(DEFAULT_CONTENT_TYPE);

        tracing::debug!(
            target: TRACING_TARGET_STORE,
            bucket = %self.bucket,
            key = %effective_key,
            content_type,
            "storing object"
        );

        self.events.increment_counter(Counter::StoragePuts);
        self.events.log_info(&StorageEvent::ObjectStored {
            bucket: &self.bucket,
            path: &self.path,
            key,
        });

        self.client
            .put_object(&self.bucket, &effective_key, data.into(), content_type, meta)
            .await
    }

    /// Retrieves `key` with its user metadata plus `head_ETag` and
    /// `head_Last-Modified`.
    ///
    /// A missing key yields [`Error::NotFound`], a missing bucket
    /// [`Error::BucketNotFound`]. A read that succeeds can still fail with
    /// [`Error::Timestamp`] when the provider's last-modified time cannot be
    /// rendered as an HTTP-date; nothing is counted or logged in that case.
    pub async fn get(&self, key: &str) -> Result<ObjectRecord> {
        let effective_key = self.effective_key(key);
        let object = self.client.get_object(&self.bucket, &effective_key).await?;

        let metadata = metadata::merge(
            object.metadata,
            object.e_tag.as_deref(),
            &object.last_modified,
        )?;

        self.events.increment_counter(Counter::StorageGets);
        self.events.log_info(&StorageEvent::ObjectRetrieved {
            bucket: &self.bucket,
            path: &self.path,
            key,
            content_type: object.content_type.as_deref(),
            metadata: &metadata,
        });

        Ok(ObjectRecord {
            content: object.data,
            content_type: object.content_type,
            metadata,
        })
    }

    /// Deletes every object whose key starts with the path prefix.
    ///
    /// Lists once, then issues one bulk delete naming exactly the listed keys,
    /// even when there are none.
    pub async fn clear(&self) -> Result<DeleteOutput> {
        self.events.log_info(&StorageEvent::Cleared {
            bucket: &self.bucket,
            path: &self.path,
        });

        let objects = self.client.list_objects(&self.bucket, &self.path).await?;
        let keys: Vec<String> = objects.into_iter().map(|object| object.key).collect();

        tracing::debug!(
            target: TRACING_TARGET_STORE,
            bucket = %self.bucket,
            path = %self.path,
            count = keys.len(),
            "deleting listed objects"
        );

        self.client.delete_objects(&self.bucket, keys).await
    }
}

impl std::fmt::Debug for ScopedObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedObjectStore")
            .field("bucket", &self.bucket)
            .field("path", &self.path)
            .finish()
    }
}
