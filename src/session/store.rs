use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::SessionStore;
use crate::chat::ConversationTurn;

/// Process-local session store. History does not survive a restart.
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, Vec<ConversationTurn>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn history(&self, session_id: &str) -> Vec<ConversationTurn> {
        let mut sessions = self.sessions.lock().unwrap();
        sessions.entry(session_id.to_string()).or_default().clone()
    }

    async fn append(&self, session_id: &str, turns: Vec<ConversationTurn>) {
        let mut sessions = self.sessions.lock().unwrap();
        sessions
            .entry(session_id.to_string())
            .or_default()
            .extend(turns);
    }

    async fn clear(&self, session_id: &str) {
        let mut sessions = self.sessions.lock().unwrap();
        sessions.remove(session_id);
    }
}
