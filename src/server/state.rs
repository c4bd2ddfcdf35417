use axum::extract::FromRef;

use crate::chat::ChatAgent;
use crate::mailing_list::MailingList;
use crate::session::SessionStore;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedChatAgent = Arc<ChatAgent>;
pub type GuardedSessionStore = Arc<dyn SessionStore>;
pub type GuardedMailingList = Arc<MailingList>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub chat_agent: GuardedChatAgent,
    pub sessions: GuardedSessionStore,
    pub mailing_list: GuardedMailingList,
    pub hash: String,
}

impl FromRef<ServerState> for GuardedChatAgent {
    fn from_ref(input: &ServerState) -> Self {
        input.chat_agent.clone()
    }
}

impl FromRef<ServerState> for GuardedSessionStore {
    fn from_ref(input: &ServerState) -> Self {
        input.sessions.clone()
    }
}

impl FromRef<ServerState> for GuardedMailingList {
    fn from_ref(input: &ServerState) -> Self {
        input.mailing_list.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
