//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── storage: StorageConfig   # Bucket, path prefix, S3 connection
//! ├── log_json: bool           # Structured log output
//! └── command: Command         # put | get | clear
//! ```
//!
//! All configuration can be provided via CLI arguments or environment variables.
//! Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! keel --bucket renders --path site/v1 --s3-endpoint http://localhost:9000 --s3-path-style clear
//!
//! # Or via environment variables
//! KEEL_BUCKET=renders KEEL_PATH=site/v1 AWS_S3_HOST_OVERRIDE=true keel get index.html
//! ```

mod storage;

use clap::Parser;
pub use storage::StorageConfig;

use crate::TRACING_TARGET_CONFIG;
use crate::command::Command;

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "keel")]
#[command(about = "Path-scoped object storage")]
#[command(version)]
pub struct Cli {
    /// Bucket, path prefix and connection settings.
    #[clap(flatten)]
    pub storage: StorageConfig,

    /// Emit logs as JSON lines.
    #[arg(long, env = "KEEL_LOG_JSON", default_value_t = false, global = true)]
    pub log_json: bool,

    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// Loading happens first so clap's `env` fallbacks see `.env` values.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Logs configuration at info level (no credentials).
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            version = env!("CARGO_PKG_VERSION"),
            features = ?Self::enabled_features(),
            "Build information"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            bucket = %self.storage.bucket,
            path = %self.storage.path,
            region = %self.storage.s3.region,
            endpoint = ?self.storage.s3.endpoint,
            path_style = self.storage.s3.force_path_style,
            static_credentials = self.storage.s3.access_key_id.is_some(),
            "Storage configuration"
        );
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}
