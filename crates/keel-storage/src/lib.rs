#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for client adapters and providers.
pub const TRACING_TARGET_CLIENT: &str = "keel_storage::client";

/// Tracing target for scoped store operations.
pub const TRACING_TARGET_STORE: &str = "keel_storage::store";

/// Tracing target for lifecycle events emitted by [`event::TracingSink`].
pub const TRACING_TARGET_EVENTS: &str = "keel_storage::events";

pub mod client;
pub mod config;
mod error;
pub mod event;
/// Provider trait and object storage provider factories.
pub mod providers;
pub mod store;
/// Metadata and record types.
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub mod mock;

#[doc(hidden)]
pub mod prelude;

pub use error::{Error, Result};
pub use store::{DEFAULT_CONTENT_TYPE, ScopedObjectStore};
