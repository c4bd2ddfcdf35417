//! Common test infrastructure
//!
//! This module provides all the infrastructure needed for end-to-end tests.
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{TestServer, TestClient, TEST_EMAIL};
//! use reqwest::StatusCode;
//!
//! #[tokio::test]
//! async fn test_chat() {
//!     let server = TestServer::spawn().await;
//!     server.llm.push_reply(r#"{"message": "hi"}"#);
//!     let client = TestClient::new(server.base_url.clone());
//!
//!     let response = client.chat("hello", TEST_EMAIL).await;
//!     assert_eq!(response.status(), StatusCode::OK);
//! }
//! ```

mod client;
mod constants;
mod fixtures;
mod server;

// Public API - this is what tests import
pub use client::TestClient;
pub use constants::*;
#[allow(unused_imports)]
pub use fixtures::{FakeCatalog, ScriptedLlm};
pub use server::TestServer;
