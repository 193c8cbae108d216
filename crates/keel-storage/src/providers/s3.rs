//! S3-compatible provider using [`object_store::aws::AmazonS3Builder`].
//!
//! Works with AWS S3, MinIO, and any S3-compatible service.

use object_store::aws::AmazonS3Builder;

use super::Provider;
use crate::client::ObjectStoreAdapter;
use crate::config::S3Config;
use crate::error::{Error, Result};

/// S3-backed object storage provider.
pub struct S3Provider;

impl Provider for S3Provider {
    type Config = S3Config;

    const ID: &str = "s3";

    fn connect(bucket: &str, config: &Self::Config) -> Result<ObjectStoreAdapter> {
        if bucket.is_empty() {
            return Err(Error::config(format!("[{}] bucket name is required", Self::ID)));
        }

        let mut builder = AmazonS3Builder::new()
            .with_bucket_name(bucket)
            .with_region(&config.region)
            .with_virtual_hosted_style_request(!config.force_path_style)
            .with_allow_http(config.allows_http());

        if let Some(endpoint) = &config.endpoint {
            builder = builder.with_endpoint(endpoint);
        }

        if let Some(access_key) = &config.access_key_id {
            builder = builder.with_access_key_id(access_key);
        }

        if let Some(secret_key) = &config.secret_access_key {
            builder = builder.with_secret_access_key(secret_key);
        }

        if let Some(token) = &config.session_token {
            builder = builder.with_token(token);
        }

        let store = builder
            .build()
            .map_err(|e| Error::config(format!("[{}] {e}", Self::ID)))?;

        tracing::debug!(
            target: crate::TRACING_TARGET_CLIENT,
            provider = Self::ID,
            bucket,
            region = %config.region,
            endpoint = ?config.endpoint,
            path_style = config.force_path_style,
            "object store client built"
        );

        Ok(ObjectStoreAdapter::new(bucket, store))
    }
}
