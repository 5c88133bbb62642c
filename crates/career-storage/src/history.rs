//! Durable per-session chat history.
//!
//! A session is an append-only ordered log of [`Turn`]s. Sessions are
//! created implicitly by the first append and never deleted here.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use aws_sdk_s3::Client;
use tokio::sync::Mutex;
use tracing::debug;

use career_core::models::chat_history::ChatHistory;
use career_core::models::turn::Turn;

use crate::document::{self, Revision};
use crate::error::StorageError;
use crate::objects;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Storage backend for chat sessions.
///
/// Methods return boxed futures for dyn compatibility.
pub trait ChatHistoryStore: Send + Sync {
    /// All turns of a session in append order. Unknown sessions are empty.
    fn fetch<'a>(&'a self, session_id: &'a str) -> BoxFuture<'a, Result<Vec<Turn>, StorageError>>;

    /// Append `turns` to the end of a session in a single write.
    fn append<'a>(
        &'a self,
        session_id: &'a str,
        turns: Vec<Turn>,
    ) -> BoxFuture<'a, Result<(), StorageError>>;

    /// Connectivity check, run once at startup.
    fn check(&self) -> BoxFuture<'_, Result<(), StorageError>>;
}

// ── S3 ───────────────────────────────────────────────────────────────────────

/// One JSON [`ChatHistory`] document per session under `chat-history/`.
///
/// Rewrites are guarded by the document's ETag, so two writers that read
/// the same version cannot both append.
pub struct S3ChatHistoryStore {
    client: Client,
    bucket: String,
}

impl S3ChatHistoryStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

impl ChatHistoryStore for S3ChatHistoryStore {
    fn fetch<'a>(&'a self, session_id: &'a str) -> BoxFuture<'a, Result<Vec<Turn>, StorageError>> {
        Box::pin(async move {
            let stored = document::read_history(&self.client, &self.bucket, session_id).await?;
            Ok(stored.map(|s| s.history.messages).unwrap_or_default())
        })
    }

    fn append<'a>(
        &'a self,
        session_id: &'a str,
        turns: Vec<Turn>,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            let added = turns.len();
            let (mut history, revision) =
                match document::read_history(&self.client, &self.bucket, session_id).await? {
                    Some(stored) => (stored.history, stored.revision),
                    None => (ChatHistory::new(session_id), Revision::Absent),
                };

            history.append(turns);
            document::write_history(&self.client, &self.bucket, &history, &revision).await?;

            debug!(session_id, added, ?revision, "chat history appended");
            Ok(())
        })
    }

    fn check(&self) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move { objects::head_bucket(&self.client, &self.bucket).await })
    }
}

// ── In-memory ────────────────────────────────────────────────────────────────

/// Process-local store. Used by tests and local runs; nothing survives a
/// restart.
#[derive(Default)]
pub struct MemoryChatHistoryStore {
    sessions: Mutex<HashMap<String, ChatHistory>>,
}

impl MemoryChatHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a session with existing turns.
    pub async fn seed(&self, session_id: &str, turns: Vec<Turn>) {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| ChatHistory::new(session_id))
            .append(turns);
    }
}

impl ChatHistoryStore for MemoryChatHistoryStore {
    fn fetch<'a>(&'a self, session_id: &'a str) -> BoxFuture<'a, Result<Vec<Turn>, StorageError>> {
        Box::pin(async move {
            let sessions = self.sessions.lock().await;
            Ok(sessions
                .get(session_id)
                .map(|h| h.messages.clone())
                .unwrap_or_default())
        })
    }

    fn append<'a>(
        &'a self,
        session_id: &'a str,
        turns: Vec<Turn>,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            self.seed(session_id, turns).await;
            Ok(())
        })
    }

    fn check(&self) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async { Ok(()) })
    }
}
