//! Message assembly: persisted history followed by the incoming turn.

use career_core::models::turn::Turn;
use career_storage::error::StorageError;
use career_storage::history::ChatHistoryStore;

/// `history` in order, then `incoming`. No reordering or deduplication.
pub fn assemble(mut history: Vec<Turn>, incoming: Turn) -> Vec<Turn> {
    history.push(incoming);
    history
}

/// Fetch a session's history and assemble it with `incoming`.
///
/// Read-only: `incoming` is not persisted here.
pub async fn assemble_for_session(
    store: &dyn ChatHistoryStore,
    session_id: &str,
    incoming: Turn,
) -> Result<Vec<Turn>, StorageError> {
    let history = store.fetch(session_id).await?;
    Ok(assemble(history, incoming))
}
