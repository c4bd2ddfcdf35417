//! Test server lifecycle management
//!
//! Each test gets an isolated server on a random port with its own scripted
//! generation backend, fake catalog and empty session store.

use super::fixtures::{FakeCatalog, ScriptedLlm};
use radioboy_server::agent::CompletionOptions;
use radioboy_server::chat::ChatAgent;
use radioboy_server::mailing_list::MailingList;
use radioboy_server::session::SessionStore;
use radioboy_server::{make_app, InMemorySessionStore, RequestsLoggingLevel, ServerConfig};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Test server instance with scripted backends
///
/// The server task is detached; it dies with the test runtime.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// Scripted generation backend, for queueing replies
    pub llm: Arc<ScriptedLlm>,

    /// Fake catalog, for registering resolvable tracks and asserting lookups
    pub catalog: Arc<FakeCatalog>,

    /// Session store, for direct history access in tests
    pub sessions: Arc<InMemorySessionStore>,

    /// Mailing list, for direct access in tests
    pub mailing_list: Arc<MailingList>,
}

impl TestServer {
    /// Spawns a new test server on a random port
    pub async fn spawn() -> Self {
        Self::spawn_with_history(false).await
    }

    /// Spawns a test server with history replay to the model enabled
    pub async fn spawn_with_history(include_history: bool) -> Self {
        let llm = Arc::new(ScriptedLlm::new());
        let catalog = Arc::new(FakeCatalog::new());
        let sessions = Arc::new(InMemorySessionStore::new());
        let mailing_list = Arc::new(MailingList::new());

        let chat_agent = Arc::new(ChatAgent::new(
            llm.clone(),
            catalog.clone(),
            sessions.clone() as Arc<dyn SessionStore>,
            CompletionOptions::default(),
            include_history,
        ));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            frontend_dir_path: None,
            allowed_origins: vec!["http://localhost:3000".to_string()],
        };

        let app = make_app(
            config,
            chat_agent,
            sessions.clone() as Arc<dyn SessionStore>,
            mailing_list.clone(),
        )
        .expect("Failed to build app");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server crashed");
        });

        Self {
            base_url,
            port,
            llm,
            catalog,
            sessions,
            mailing_list,
        }
    }
}
