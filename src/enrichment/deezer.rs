//! Deezer search API client.
//!
//! One free-text search per track request, top match only. The 30-second
//! preview URL on the result is what the UI plays.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

use super::TrackCatalog;
use crate::chat::{TrackRecord, TrackRequest};

pub const DEEZER_API_BASE: &str = "https://api.deezer.com";

/// HTTP client for the Deezer search API.
pub struct DeezerClient {
    client: reqwest::Client,
    base_url: String,
}

impl DeezerClient {
    /// Create a new Deezer client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the API (e.g., "https://api.deezer.com")
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(base_url: impl Into<String>, timeout_sec: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    /// Get the base URL of the catalog service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search the catalog and return the top match, if any.
    ///
    /// An empty result list is a valid, non-error outcome.
    async fn search_top(&self, query: &str) -> Result<Option<TrackRecord>> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("limit", "1")])
            .send()
            .await
            .context("Failed to reach catalog search")?;

        if !response.status().is_success() {
            anyhow::bail!("Catalog search failed with status {}", response.status());
        }

        let body: SearchResponse = response
            .json()
            .await
            .context("Failed to parse catalog search response")?;

        Ok(body.data.into_iter().next().map(TrackRecord::from))
    }
}

#[async_trait]
impl TrackCatalog for DeezerClient {
    async fn lookup(&self, request: &TrackRequest) -> Option<TrackRecord> {
        let query = format!("{} {}", request.artist, request.title);
        match self.search_top(&query).await {
            Ok(record) => record,
            Err(err) => {
                warn!(
                    artist = %request.artist,
                    title = %request.title,
                    error = %err,
                    "Catalog lookup failed, dropping track request"
                );
                None
            }
        }
    }
}

// Deezer API types

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SearchTrack>,
}

#[derive(Debug, Deserialize)]
struct SearchTrack {
    id: u64,
    title: String,
    artist: SearchArtist,
    album: SearchAlbum,
    preview: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchArtist {
    name: String,
}

#[derive(Debug, Deserialize)]
struct SearchAlbum {
    title: String,
    cover_medium: Option<String>,
}

impl From<SearchTrack> for TrackRecord {
    fn from(track: SearchTrack) -> Self {
        TrackRecord {
            id: track.id,
            title: track.title,
            artist: track.artist.name,
            album: track.album.title,
            cover: track.album.cover_medium.unwrap_or_default(),
            preview: track.preview.unwrap_or_default(),
        }
    }
}
