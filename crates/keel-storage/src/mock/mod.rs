//! Recording mocks of the client and event-sink capabilities.
//!
//! # Feature Flag
//!
//! This module is only available when the `test-utils` feature is enabled:
//!
//! ```toml
//! [dev-dependencies]
//! keel-storage = { version = "...", features = ["test-utils"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use keel_storage::mock::{MemorySink, MockClient};
//!
//! let client = MockClient::new();
//! let store = ScopedObjectStore::with_event_sink(client.clone(), MemorySink::new(), "b", "p")?;
//! store.clear().await?;
//! assert_eq!(client.calls().len(), 2);
//! ```

mod client;
mod sink;

pub use client::{MockCall, MockClient};
pub use sink::MemorySink;
