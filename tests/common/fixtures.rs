//! Test doubles for the generation backend and the track catalog
//!
//! Both doubles are fully deterministic so tests can script exact turn
//! outcomes without any network access.

use async_trait::async_trait;
use radioboy_server::agent::{
    CompletionOptions, CompletionResponse, LlmError, LlmProvider, Message,
};
use radioboy_server::chat::{TrackRecord, TrackRequest};
use radioboy_server::enrichment::TrackCatalog;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Generation backend double that serves scripted replies in FIFO order.
///
/// Each completion pops the next scripted outcome. Running out of script is
/// an infrastructure error, surfaced as a connection failure.
pub struct ScriptedLlm {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    captured: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedLlm {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            captured: Mutex::new(Vec::new()),
        }
    }

    /// Queue a raw reply text for the next completion.
    pub fn push_reply(&self, text: &str) {
        self.replies.lock().unwrap().push_back(Ok(text.to_string()));
    }

    /// Queue a failure for the next completion.
    pub fn push_error(&self, error: LlmError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    /// Message lists sent so far, one entry per completion call.
    pub fn captured(&self) -> Vec<Vec<Message>> {
        self.captured.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedLlm {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(
        &self,
        messages: &[Message],
        _options: &CompletionOptions,
    ) -> Result<CompletionResponse, LlmError> {
        self.captured.lock().unwrap().push(messages.to_vec());
        let outcome = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::Connection(
                "ScriptedLlm ran out of scripted replies".to_string(),
            )));
        outcome.map(|text| CompletionResponse {
            message: Message::assistant(text),
            usage: None,
        })
    }

    async fn health_check(&self) -> Result<(), LlmError> {
        Ok(())
    }
}

/// Track catalog double backed by an in-memory artist/title table.
///
/// Records every lookup so tests can assert on fan-out behavior.
pub struct FakeCatalog {
    tracks: Mutex<HashMap<(String, String), TrackRecord>>,
    seen: Mutex<Vec<TrackRequest>>,
    calls: AtomicUsize,
    next_id: AtomicU64,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self {
            tracks: Mutex::new(HashMap::new()),
            seen: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a resolvable track and return the record lookups will yield.
    pub fn insert(&self, artist: &str, title: &str) -> TrackRecord {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = TrackRecord {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            album: format!("{} (Single)", title),
            cover: format!("https://cdn.test/cover/{}.jpg", id),
            preview: format!("https://cdn.test/preview/{}.mp3", id),
        };
        self.tracks.lock().unwrap().insert(
            (artist.to_lowercase(), title.to_lowercase()),
            record.clone(),
        );
        record
    }

    /// Number of lookup calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every request the catalog was asked to resolve, in call order.
    pub fn seen(&self) -> Vec<TrackRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl TrackCatalog for FakeCatalog {
    async fn lookup(&self, request: &TrackRequest) -> Option<TrackRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(request.clone());
        self.tracks
            .lock()
            .unwrap()
            .get(&(request.artist.to_lowercase(), request.title.to_lowercase()))
            .cloned()
    }
}
