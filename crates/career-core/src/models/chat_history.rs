use serde::{Deserialize, Serialize};

use super::turn::Turn;

/// A persisted chat session, keyed by the caller-supplied session id.
///
/// Written back to S3 after every user/assistant pair so the conversation
/// is durable. Turns are only ever appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistory {
    pub session_id: String,
    pub messages: Vec<Turn>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl ChatHistory {
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            session_id: session_id.into(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append turns in order and bump `updated_at`.
    pub fn append(&mut self, turns: impl IntoIterator<Item = Turn>) {
        self.messages.extend(turns);
        self.updated_at = jiff::Timestamp::now();
    }
}
