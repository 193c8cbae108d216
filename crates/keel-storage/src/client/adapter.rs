//! [`ObjectStoreClient`] backed by [`object_store::ObjectStore`].
//!
//! [`ObjectStoreAdapter`] is a thin, cloneable wrapper around
//! `Arc<dyn ObjectStore>` bound to a single bucket. Every method is
//! instrumented with [`tracing`].

use std::sync::Arc;

use bytes::Bytes;
use futures::{StreamExt, TryStreamExt};
use jiff::Timestamp;
use object_store::memory::InMemory;
use object_store::path::{DELIMITER, Path};
use object_store::{
    Attribute, Attributes, ObjectMeta, ObjectStore, PutMode, PutOptions, PutPayload,
};

use super::key::{key_to_path, path_to_key};
use super::{DeleteOutput, GetOutput, ObjectStoreClient, ObjectSummary, PutOutput};
use crate::error::{Error, Result};
use crate::types::Metadata;

/// Cloneable handle to an [`ObjectStore`] backend serving one bucket.
///
/// Requests naming any other bucket fail with
/// [`Error::BucketNotFound`] before reaching the backend. Keys with an empty
/// segment (`a//b`, a leading or trailing `/`) have no distinct
/// representation in the backend and fail with [`Error::InvalidKey`].
#[derive(Clone, Debug)]
pub struct ObjectStoreAdapter {
    bucket: String,
    store: Arc<dyn ObjectStore>,
}

impl ObjectStoreAdapter {
    /// Wrap a concrete [`ObjectStore`] implementation serving `bucket`.
    pub fn new(bucket: impl Into<String>, store: impl ObjectStore) -> Self {
        Self::from_arc(bucket, Arc::new(store))
    }

    /// Wrap an already shared [`ObjectStore`] serving `bucket`.
    pub fn from_arc(bucket: impl Into<String>, store: Arc<dyn ObjectStore>) -> Self {
        Self {
            bucket: bucket.into(),
            store,
        }
    }

    /// In-process store, useful for tests and local runs.
    pub fn in_memory(bucket: impl Into<String>) -> Self {
        Self::new(bucket, InMemory::new())
    }

    /// Bucket served by this adapter.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    fn check_bucket(&self, bucket: &str) -> Result<()> {
        if bucket == self.bucket {
            Ok(())
        } else {
            Err(Error::bucket_not_found(bucket))
        }
    }

    /// Every object below `root`, recursively.
    async fn list_all(
        &self,
        root: Option<&Path>,
        bucket: &str,
        prefix: &str,
    ) -> Result<Vec<ObjectSummary>> {
        let objects: Vec<ObjectMeta> = self
            .store
            .list(root)
            .try_collect()
            .await
            .map_err(|e| from_object_store(e, bucket, prefix))?;
        Ok(objects.into_iter().map(ObjectSummary::from).collect())
    }

    /// Every object whose key starts with `prefix`, which may end mid-segment.
    ///
    /// Lists the parent directory of the last segment one level deep, then
    /// descends only into the directories that still match.
    async fn list_prefix(&self, bucket: &str, prefix: &str) -> Result<Vec<ObjectSummary>> {
        let parent = match prefix.rsplit_once(DELIMITER) {
            None | Some(("", _)) => None,
            // No stored key has an empty segment, so none can match.
            Some((parent, _)) => match key_to_path(parent) {
                Ok(parent) => Some(parent),
                Err(_) => return Ok(Vec::new()),
            },
        };

        let listing = self
            .store
            .list_with_delimiter(parent.as_ref())
            .await
            .map_err(|e| from_object_store(e, bucket, prefix))?;

        let mut objects: Vec<ObjectSummary> = listing
            .objects
            .into_iter()
            .map(ObjectSummary::from)
            .filter(|object| object.key.starts_with(prefix))
            .collect();

        for dir in listing.common_prefixes {
            if path_to_key(&dir).starts_with(prefix) {
                objects.extend(self.list_all(Some(&dir), bucket, prefix).await?);
            }
        }

        Ok(objects)
    }
}

#[async_trait::async_trait]
impl ObjectStoreClient for ObjectStoreAdapter {
    #[tracing::instrument(name = "object.list", skip(self), fields(count))]
    async fn list_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<ObjectSummary>> {
        self.check_bucket(bucket)?;

        let objects = if prefix.is_empty() {
            self.list_all(None, bucket, prefix).await?
        } else {
            self.list_prefix(bucket, prefix).await?
        };

        tracing::Span::current().record("count", objects.len());
        Ok(objects)
    }

    #[tracing::instrument(name = "object.delete_many", skip(self, keys), fields(count = keys.len()))]
    async fn delete_objects(&self, bucket: &str, keys: Vec<String>) -> Result<DeleteOutput> {
        self.check_bucket(bucket)?;

        let locations: Vec<Path> = keys
            .iter()
            .map(|key| key_to_path(key))
            .collect::<Result<_>>()?;
        let locations = futures::stream::iter(locations)
            .map(Ok::<_, object_store::Error>)
            .boxed();
        let deleted: Vec<Path> = self
            .store
            .delete_stream(locations)
            .try_collect()
            .await
            .map_err(|e| from_object_store(e, bucket, ""))?;

        Ok(DeleteOutput {
            deleted: deleted.iter().map(path_to_key).collect(),
        })
    }

    #[tracing::instrument(
        name = "object.put",
        skip(self, body, metadata),
        fields(size = body.len(), metadata = metadata.len())
    )]
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
        metadata: Metadata,
    ) -> Result<PutOutput> {
        self.check_bucket(bucket)?;
        let location = key_to_path(key)?;

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_owned().into());
        for (name, value) in metadata {
            attributes.insert(Attribute::Metadata(name.into()), value.into());
        }
        let opts = PutOptions {
            mode: PutMode::Overwrite,
            attributes,
            ..Default::default()
        };

        let result = self
            .store
            .put_opts(&location, PutPayload::from(body), opts)
            .await
            .map_err(|e| from_object_store(e, bucket, key))?;
        Ok(result.into())
    }

    #[tracing::instrument(name = "object.get", skip(self))]
    async fn get_object(&self, bucket: &str, key: &str) -> Result<GetOutput> {
        self.check_bucket(bucket)?;
        let location = key_to_path(key)?;

        let result = self
            .store
            .get(&location)
            .await
            .map_err(|e| from_object_store(e, bucket, key))?;

        let mut content_type = None;
        let mut metadata = Metadata::new();
        for (attribute, value) in result.attributes.iter() {
            match attribute {
                Attribute::ContentType => content_type = Some(value.to_string()),
                Attribute::Metadata(name) => {
                    metadata.insert(name.to_string(), value.to_string());
                }
                _ => {}
            }
        }

        let meta = result.meta.clone();
        let last_modified = Timestamp::new(
            meta.last_modified.timestamp(),
            meta.last_modified.timestamp_subsec_nanos() as i32,
        )?;
        let data = result
            .bytes()
            .await
            .map_err(|e| from_object_store(e, bucket, key))?;

        Ok(GetOutput {
            data,
            content_type,
            metadata,
            e_tag: meta.e_tag,
            last_modified,
        })
    }
}

/// Convert an [`object_store::Error`] into a crate [`Error`].
///
/// S3 answers a missing bucket with a 404 as well; the `NoSuchBucket` service
/// code is what tells the two apart.
fn from_object_store(err: object_store::Error, bucket: &str, key: &str) -> Error {
    if err.to_string().contains("NoSuchBucket") {
        return Error::bucket_not_found(bucket);
    }

    match err {
        object_store::Error::NotFound { .. } => Error::not_found(bucket, key),
        err => {
            let retryable = !matches!(
                err,
                object_store::Error::PermissionDenied { .. }
                    | object_store::Error::Unauthenticated { .. }
                    | object_store::Error::AlreadyExists { .. }
                    | object_store::Error::Precondition { .. }
                    | object_store::Error::NotSupported { .. }
                    | object_store::Error::InvalidPath { .. }
            );
            Error::transport(err, retryable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUCKET: &str = "my-bucket";

    fn test_client() -> ObjectStoreAdapter {
        ObjectStoreAdapter::in_memory(BUCKET)
    }

    #[tokio::test]
    async fn put_and_get() {
        let client = test_client();
        let data = Bytes::from("hello world");
        client
            .put_object(BUCKET, "test.txt", data.clone(), "text/plain", Metadata::new())
            .await
            .unwrap();

        let result = client.get_object(BUCKET, "test.txt").await.unwrap();
        assert_eq!(result.data, data);
        assert_eq!(result.content_type.as_deref(), Some("text/plain"));
        assert!(result.metadata.is_empty());
        assert!(result.e_tag.is_some());
    }

    #[tokio::test]
    async fn user_metadata_round_trips() {
        let client = test_client();
        let metadata = Metadata::from([
            ("foo".to_owned(), "bar".to_owned()),
            ("owner".to_owned(), "ops".to_owned()),
        ]);
        client
            .put_object(BUCKET, "meta.bin", Bytes::from("x"), "foo/bar", metadata.clone())
            .await
            .unwrap();

        let result = client.get_object(BUCKET, "meta.bin").await.unwrap();
        assert_eq!(result.metadata, metadata);
        assert_eq!(result.content_type.as_deref(), Some("foo/bar"));
    }

    #[tokio::test]
    async fn put_returns_result() {
        let client = test_client();
        let result = client
            .put_object(BUCKET, "etag.bin", Bytes::from("x"), "text/plain", Metadata::new())
            .await
            .unwrap();
        assert!(result.e_tag.is_some());
    }

    #[tokio::test]
    async fn get_not_found() {
        let client = test_client();
        let err = client.get_object(BUCKET, "missing").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn other_bucket_is_not_found() {
        let client = test_client();
        let err = client.get_object("other-bucket", "key").await.unwrap_err();
        assert!(err.is_bucket_not_found());

        let err = client.list_objects("other-bucket", "").await.unwrap_err();
        assert!(err.is_bucket_not_found());
    }

    #[tokio::test]
    async fn list_under_prefix() {
        let client = test_client();
        for key in ["dir/a.txt", "dir/b.txt", "dir/sub/c.txt", "elsewhere/d.txt"] {
            client
                .put_object(BUCKET, key, Bytes::from(key), "text/plain", Metadata::new())
                .await
                .unwrap();
        }

        let mut keys: Vec<_> = client
            .list_objects(BUCKET, "dir")
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.key)
            .collect();
        keys.sort();
        assert_eq!(keys, vec!["dir/a.txt", "dir/b.txt", "dir/sub/c.txt"]);

        let all = client.list_objects(BUCKET, "").await.unwrap();
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn delete_many() {
        let client = test_client();
        for i in 0..3 {
            client
                .put_object(
                    BUCKET,
                    &format!("del/{i}.bin"),
                    Bytes::from(format!("{i}")),
                    "text/plain",
                    Metadata::new(),
                )
                .await
                .unwrap();
        }

        let keys = vec!["del/0.bin".to_owned(), "del/2.bin".to_owned()];
        let output = client.delete_objects(BUCKET, keys).await.unwrap();
        assert_eq!(output.len(), 2);

        let remaining = client.list_objects(BUCKET, "del").await.unwrap();
        assert_eq!(remaining, vec![ObjectSummary::new("del/1.bin", 1)]);
    }

    #[tokio::test]
    async fn delete_nothing() {
        let client = test_client();
        let output = client.delete_objects(BUCKET, Vec::new()).await.unwrap();
        assert!(output.is_empty());
    }

    async fn put_keys(client: &ObjectStoreAdapter, keys: &[&str]) {
        for key in keys {
            client
                .put_object(BUCKET, key, Bytes::from("x"), "text/plain", Metadata::new())
                .await
                .unwrap();
        }
    }

    async fn listed_keys(client: &ObjectStoreAdapter, prefix: &str) -> Vec<String> {
        let mut keys: Vec<_> = client
            .list_objects(BUCKET, prefix)
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.key)
            .collect();
        keys.sort();
        keys
    }

    #[tokio::test]
    async fn listed_keys_are_deletable_verbatim() {
        let client = test_client();
        put_keys(&client, &["path/a#b", "path/50%", "path/with space", "path/plain"]).await;

        let keys = listed_keys(&client, "path").await;
        assert_eq!(
            keys,
            vec!["path/50%", "path/a#b", "path/plain", "path/with space"]
        );

        let mut output = client.delete_objects(BUCKET, keys).await.unwrap();
        output.deleted.sort();
        assert_eq!(
            output.deleted,
            vec!["path/50%", "path/a#b", "path/plain", "path/with space"]
        );

        assert!(listed_keys(&client, "path").await.is_empty());
        let err = client.get_object(BUCKET, "path/a#b").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn prefix_may_end_mid_segment() {
        let client = test_client();
        put_keys(
            &client,
            &["path/a", "pathology/b", "pat/c", "other/d", "path/sub/e", "patio"],
        )
        .await;

        assert_eq!(
            listed_keys(&client, "pat").await,
            vec!["pat/c", "path/a", "path/sub/e", "pathology/b", "patio"]
        );
        assert_eq!(
            listed_keys(&client, "path").await,
            vec!["path/a", "path/sub/e", "pathology/b"]
        );
        assert_eq!(
            listed_keys(&client, "path/").await,
            vec!["path/a", "path/sub/e"]
        );
        assert_eq!(listed_keys(&client, "path/s").await, vec!["path/sub/e"]);
        assert!(listed_keys(&client, "path//").await.is_empty());
        assert!(listed_keys(&client, "/path").await.is_empty());
    }

    #[tokio::test]
    async fn keys_with_empty_segments_are_rejected() {
        let client = test_client();
        put_keys(&client, &["a/b"]).await;

        for key in ["a//b", "/a/b", "a/b/"] {
            let err = client
                .put_object(BUCKET, key, Bytes::from("y"), "text/plain", Metadata::new())
                .await
                .unwrap_err();
            assert!(matches!(err, Error::InvalidKey { .. }), "{key:?}");

            let err = client.get_object(BUCKET, key).await.unwrap_err();
            assert!(matches!(err, Error::InvalidKey { .. }), "{key:?}");
        }

        let err = client
            .delete_objects(BUCKET, vec!["a//b".to_owned()])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidKey { .. }));

        let stored = client.get_object(BUCKET, "a/b").await.unwrap();
        assert_eq!(stored.data, Bytes::from("x"));
    }

    #[test]
    fn no_such_bucket_maps_to_bucket_not_found() {
        let err = object_store::Error::Generic {
            store: "S3",
            source: "Client error with status 404 Not Found: <Code>NoSuchBucket</Code>".into(),
        };
        let err = from_object_store(err, BUCKET, "path/my-key");
        assert!(err.is_bucket_not_found());
        assert!(!err.is_not_found());

        let err = object_store::Error::NotFound {
            path: "path/my-key".to_owned(),
            source: "NoSuchBucket".into(),
        };
        assert!(from_object_store(err, BUCKET, "path/my-key").is_bucket_not_found());
    }

    #[test]
    fn missing_object_maps_to_not_found() {
        let err = object_store::Error::NotFound {
            path: "path/my-key".to_owned(),
            source: "Client error with status 404 Not Found: <Code>NoSuchKey</Code>".into(),
        };
        let err = from_object_store(err, BUCKET, "path/my-key");
        assert!(err.is_not_found());
        assert!(!err.is_bucket_not_found());
        assert!(matches!(err, Error::NotFound { ref key, .. } if key == "path/my-key"));
    }

    #[test]
    fn other_failures_map_to_transport() {
        let err = object_store::Error::Generic {
            store: "S3",
            source: "connection reset".into(),
        };
        let err = from_object_store(err, BUCKET, "k");
        assert!(matches!(err, Error::Transport { .. }));
        assert!(err.is_retryable());

        let err = object_store::Error::PermissionDenied {
            path: "k".to_owned(),
            source: "AccessDenied".into(),
        };
        assert!(!from_object_store(err, BUCKET, "k").is_retryable());
    }
}
