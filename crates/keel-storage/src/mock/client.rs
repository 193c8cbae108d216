//! [`ObjectStoreClient`] that records calls and serves stubbed responses.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use bytes::Bytes;

use crate::client::{DeleteOutput, GetOutput, ObjectStoreClient, ObjectSummary, PutOutput};
use crate::error::{Error, Result};
use crate::types::Metadata;

/// A call received by [`MockClient`], with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    List {
        bucket: String,
        prefix: String,
    },
    Delete {
        bucket: String,
        keys: Vec<String>,
    },
    Put {
        bucket: String,
        key: String,
        body: Bytes,
        content_type: String,
        metadata: Metadata,
    },
    Get {
        bucket: String,
        key: String,
    },
}

#[derive(Debug, Default)]
struct State {
    calls: Vec<MockCall>,
    list: Vec<ObjectSummary>,
    list_error: Option<Error>,
    gets: VecDeque<Result<GetOutput>>,
}

/// Cloneable recording client. Clones share calls and stubs.
///
/// Without stubs, listing returns nothing, deletes echo the requested keys,
/// puts succeed with an empty [`PutOutput`] and gets fail with
/// [`Error::NotFound`].
#[derive(Debug, Clone, Default)]
pub struct MockClient {
    state: Arc<Mutex<State>>,
}

impl MockClient {
    /// Creates a client with no stubs.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.state().calls.clone()
    }

    /// Serve `objects` from every subsequent listing.
    pub fn stub_list(&self, objects: Vec<ObjectSummary>) {
        self.state().list = objects;
    }

    /// Fail the next listing with `error`.
    pub fn fail_list(&self, error: Error) {
        self.state().list_error = Some(error);
    }

    /// Serve `output` from the next get.
    pub fn stub_get(&self, output: GetOutput) {
        self.state().gets.push_back(Ok(output));
    }

    /// Fail the next get with `error`.
    pub fn fail_get(&self, error: Error) {
        self.state().gets.push_back(Err(error));
    }
}

#[async_trait::async_trait]
impl ObjectStoreClient for MockClient {
    async fn list_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<ObjectSummary>> {
        let mut state = self.state();
        state.calls.push(MockCall::List {
            bucket: bucket.to_owned(),
            prefix: prefix.to_owned(),
        });
        match state.list_error.take() {
            Some(error) => Err(error),
            None => Ok(state.list.clone()),
        }
    }

    async fn delete_objects(&self, bucket: &str, keys: Vec<String>) -> Result<DeleteOutput> {
        self.state().calls.push(MockCall::Delete {
            bucket: bucket.to_owned(),
            keys: keys.clone(),
        });
        Ok(DeleteOutput { deleted: keys })
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
        metadata: Metadata,
    ) -> Result<PutOutput> {
        self.state().calls.push(MockCall::Put {
            bucket: bucket.to_owned(),
            key: key.to_owned(),
            body,
            content_type: content_type.to_owned(),
            metadata,
        });
        Ok(PutOutput::default())
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<GetOutput> {
        let mut state = self.state();
        state.calls.push(MockCall::Get {
            bucket: bucket.to_owned(),
            key: key.to_owned(),
        });
        state
            .gets
            .pop_front()
            .unwrap_or_else(|| Err(Error::not_found(bucket, key)))
    }
}
