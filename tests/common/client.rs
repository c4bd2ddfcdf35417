//! HTTP client for end-to-end tests
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::json;
use std::time::Duration;

/// HTTP test client
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /
    pub async fn home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("home request failed")
    }

    /// POST /chat
    pub async fn chat(&self, message: &str, email: &str) -> Response {
        self.client
            .post(format!("{}/chat", self.base_url))
            .json(&json!({"message": message, "email": email}))
            .send()
            .await
            .expect("chat request failed")
    }

    /// POST /collect-email
    pub async fn collect_email(&self, email: &str) -> Response {
        self.client
            .post(format!("{}/collect-email", self.base_url))
            .json(&json!({"email": email}))
            .send()
            .await
            .expect("collect-email request failed")
    }

    /// GET /emails
    pub async fn emails(&self) -> Response {
        self.client
            .get(format!("{}/emails", self.base_url))
            .send()
            .await
            .expect("emails request failed")
    }

    /// POST /signout
    pub async fn signout(&self, email: &str) -> Response {
        self.client
            .post(format!("{}/signout", self.base_url))
            .json(&json!({"email": email}))
            .send()
            .await
            .expect("signout request failed")
    }
}
