use async_trait::async_trait;
use quiz_core::session::{Session, SessionHandle, SessionStore};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Process-local session store.
///
/// Sessions live for the lifetime of the process; nothing is evicted. The map
/// lock is only held for lookup and insertion, each session carries its own
/// lock for the engine to hold while it works.
pub struct InMemorySessionStore {
    /// In-memory session map
    sessions: Arc<RwLock<HashMap<String, SessionHandle>>>,
}

impl InMemorySessionStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of sessions currently held.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Clears all sessions.
    pub async fn clear(&self) {
        let mut sessions = self.sessions.write().await;
        sessions.clear();
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, session_id: &str) -> Option<SessionHandle> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).cloned()
    }

    async fn create(&self, session_id: &str) -> SessionHandle {
        let handle = Arc::new(Mutex::new(Session::new(session_id)));
        let mut sessions = self.sessions.write().await;
        sessions.insert(session_id.to_string(), handle.clone());
        tracing::debug!(session_id, "Session created");
        handle
    }

    async fn delete(&self, session_id: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.remove(session_id).is_some()
    }

    async fn get_or_create(&self, session_id: &str) -> SessionHandle {
        if let Some(handle) = self.get(session_id).await {
            return handle;
        }

        // Re-check under the write lock; another request may have won the race.
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                tracing::debug!(session_id, "Session created");
                Arc::new(Mutex::new(Session::new(session_id)))
            })
            .clone()
    }
}
