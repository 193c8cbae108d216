//! Subcommands and their execution against a [`ScopedObjectStore`].

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Subcommand};
use keel_storage::ScopedObjectStore;
use keel_storage::types::Metadata;
use serde::Serialize;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::TRACING_TARGET_COMMAND;

/// Operation to run against the configured bucket and path.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Upload a file (or stdin) to `{path}/{key}`.
    Put(PutArgs),
    /// Download `{path}/{key}` with its metadata.
    Get(GetArgs),
    /// Delete every object under the path prefix.
    Clear,
}

/// Arguments of [`Command::Put`].
#[derive(Debug, Clone, Args)]
pub struct PutArgs {
    /// Logical key, relative to the path prefix.
    pub key: String,

    /// File to upload, `-` for stdin.
    pub file: PathBuf,

    /// MIME content-type (default: text/plain).
    #[arg(long)]
    pub content_type: Option<String>,

    /// User metadata entry, `name=value`. Repeatable.
    #[arg(long = "meta", value_parser = parse_meta)]
    pub meta: Vec<(String, String)>,
}

/// Arguments of [`Command::Get`].
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Logical key, relative to the path prefix.
    pub key: String,

    /// Write the content to this file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print content-type and metadata as JSON instead of the content.
    #[arg(long, default_value_t = false)]
    pub metadata: bool,
}

fn parse_meta(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_owned(), value.to_owned())),
        _ => Err(format!("expected `name=value`, got `{raw}`")),
    }
}

impl Command {
    /// Runs the command, writing results to stdout.
    pub async fn run(self, store: &ScopedObjectStore) -> anyhow::Result<()> {
        match self {
            Self::Put(args) => put(store, args).await,
            Self::Get(args) => get(store, args).await,
            Self::Clear => clear(store).await,
        }
    }
}

async fn put(store: &ScopedObjectStore, args: PutArgs) -> anyhow::Result<()> {
    let data = if args.file.as_os_str() == "-" {
        let mut buf = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buf)
            .await
            .context("failed to read stdin")?;
        buf
    } else {
        tokio::fs::read(&args.file)
            .await
            .with_context(|| format!("failed to read {}", args.file.display()))?
    };

    tracing::debug!(
        target: TRACING_TARGET_COMMAND,
        key = %args.key,
        size = data.len(),
        "uploading"
    );

    let meta: Metadata = args.meta.into_iter().collect();
    let output = store
        .put(&args.key, data, args.content_type.as_deref(), meta)
        .await
        .with_context(|| format!("failed to store {}", store.effective_key(&args.key)))?;

    print_json(&output)
}

async fn get(store: &ScopedObjectStore, args: GetArgs) -> anyhow::Result<()> {
    let record = store
        .get(&args.key)
        .await
        .with_context(|| format!("failed to retrieve {}", store.effective_key(&args.key)))?;

    if let Some(path) = &args.output {
        tokio::fs::write(path, record.as_bytes())
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    if args.metadata || args.output.is_some() {
        return print_json(&record);
    }

    let mut stdout = tokio::io::stdout();
    stdout.write_all(record.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}

async fn clear(store: &ScopedObjectStore) -> anyhow::Result<()> {
    let output = store
        .clear()
        .await
        .with_context(|| format!("failed to clear {}/{}", store.bucket(), store.path()))?;

    tracing::info!(
        target: TRACING_TARGET_COMMAND,
        deleted = output.len(),
        "cleared path"
    );

    print_json(&output)
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
