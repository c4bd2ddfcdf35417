//! Radio Boy Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod agent;
pub mod chat;
pub mod enrichment;
pub mod mailing_list;
pub mod server;
pub mod session;

// Re-export commonly used types for convenience
pub use chat::ChatAgent;
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
pub use session::{InMemorySessionStore, SessionStore};
