//! Chat history documents as JSON objects in S3.
//!
//! Each write carries the precondition that matches what the reader saw,
//! so a concurrent append from another instance fails instead of being
//! overwritten.

use aws_sdk_s3::Client;

use career_core::models::chat_history::ChatHistory;
use career_core::s3_keys;

use crate::error::StorageError;
use crate::objects;

const JSON: Option<&str> = Some("application/json");

/// Version of a document as observed by a read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    /// No document existed.
    Absent,
    /// The document and its ETag.
    Tagged(String),
    /// A document existed but S3 returned no ETag for it.
    Untagged,
}

/// A history together with the revision it was read at.
#[derive(Debug, Clone)]
pub struct StoredHistory {
    pub history: ChatHistory,
    pub revision: Revision,
}

/// Decode a fetched object body.
pub fn decode(body: &[u8], etag: Option<String>) -> Result<StoredHistory, StorageError> {
    let history: ChatHistory = serde_json::from_slice(body)?;
    let revision = match etag.filter(|e| !e.is_empty()) {
        Some(etag) => Revision::Tagged(etag),
        None => Revision::Untagged,
    };
    Ok(StoredHistory { history, revision })
}

/// Read a session's document. `None` when the session has never been written.
pub async fn read_history(
    client: &Client,
    bucket: &str,
    session_id: &str,
) -> Result<Option<StoredHistory>, StorageError> {
    let key = s3_keys::chat_history(session_id);
    match objects::get_object(client, bucket, &key).await {
        Ok(output) => decode(&output.body, output.etag).map(Some),
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write a history back, conditioned on `revision`. Returns the new ETag.
pub async fn write_history(
    client: &Client,
    bucket: &str,
    history: &ChatHistory,
    revision: &Revision,
) -> Result<String, StorageError> {
    let key = s3_keys::chat_history(&history.session_id);
    let body = serde_json::to_vec_pretty(history)?;
    match revision {
        Revision::Absent => objects::put_object_if_absent(client, bucket, &key, body, JSON).await,
        Revision::Tagged(etag) => {
            objects::put_object_if_match(client, bucket, &key, body, JSON, etag).await
        }
        Revision::Untagged => objects::put_object(client, bucket, &key, body, JSON).await,
    }
}
