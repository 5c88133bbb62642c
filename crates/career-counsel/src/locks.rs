use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Idle entries are pruned once the map grows past this.
const PRUNE_THRESHOLD: usize = 1024;

/// One async mutex per session id. Holding the guard serialises the
/// read → invoke → append sequence of that session.
#[derive(Default)]
pub(crate) struct SessionLocks {
    sessions: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl SessionLocks {
    pub(crate) async fn acquire(&self, session_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut sessions = self.sessions.lock().await;
            if sessions.len() > PRUNE_THRESHOLD {
                sessions.retain(|_, lock| Arc::strong_count(lock) > 1);
            }
            sessions
                .entry(session_id.to_string())
                .or_default()
                .clone()
        };
        lock.lock_owned().await
    }
}
