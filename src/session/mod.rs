//! Per-session conversation history.

mod store;

pub use store::InMemorySessionStore;

use crate::chat::ConversationTurn;
use async_trait::async_trait;

/// Storage for conversation history, keyed by session id.
///
/// Sessions are created lazily: reading or appending to an id that was never
/// seen behaves as if an empty session already existed.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Full history for a session, oldest first.
    async fn history(&self, session_id: &str) -> Vec<ConversationTurn>;

    /// Append turns to a session, preserving order.
    async fn append(&self, session_id: &str, turns: Vec<ConversationTurn>);

    /// Drop a session's history entirely. Unknown ids are a no-op.
    async fn clear(&self, session_id: &str);
}
