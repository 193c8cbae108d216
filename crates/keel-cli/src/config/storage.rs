//! Storage target configuration.

use clap::Args;
use keel_storage::ScopedObjectStore;
use keel_storage::config::S3Config;

/// Which bucket and path prefix to operate on, and how to reach them.
///
/// # Environment Variables
///
/// - `KEEL_BUCKET` - Bucket name (required)
/// - `KEEL_PATH` - Path prefix inside the bucket (required)
/// - `AWS_S3_ENDPOINT`, `AWS_S3_HOST_OVERRIDE`, `AWS_REGION`, ... - see [`S3Config`]
#[derive(Debug, Clone, Args)]
#[must_use = "config does nothing unless you use it"]
pub struct StorageConfig {
    /// Bucket holding the objects.
    #[arg(long, env = "KEEL_BUCKET")]
    pub bucket: String,

    /// Path prefix; keys resolve to `{path}/{key}`.
    ///
    /// An empty prefix would produce keys with a leading `/`, which S3
    /// backends cannot store distinctly.
    #[arg(long, env = "KEEL_PATH")]
    pub path: String,

    /// S3 connection settings.
    #[clap(flatten)]
    pub s3: S3Config,
}

impl StorageConfig {
    /// Builds the scoped store. No request is sent yet.
    pub fn build(&self) -> keel_storage::Result<ScopedObjectStore> {
        ScopedObjectStore::connect(&self.s3, &self.bucket, &self.path)
    }
}
