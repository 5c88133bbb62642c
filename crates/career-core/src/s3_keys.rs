//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of objects in the career counseling bucket.

pub const CHAT_HISTORY_PREFIX: &str = "chat-history/";

pub fn chat_history(session_id: &str) -> String {
    format!("{CHAT_HISTORY_PREFIX}{session_id}.json")
}
