//! Value types shared by the client capability and the scoped store.

pub mod metadata;
pub mod object_record;

pub use metadata::{HEAD_ETAG, HEAD_LAST_MODIFIED, Metadata};
pub use object_record::ObjectRecord;
