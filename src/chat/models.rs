//! Data model for conversation turns and their enrichment blocks.
//!
//! Wire field names follow the contract the browser UI renders against:
//! `cover`/`preview` on track records and `type` on workflow blocks.

use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

/// One entry in a session's history. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub text: String,
    #[serde(default)]
    pub tracks: Vec<TrackRecord>,
    #[serde(default)]
    pub lyrics: Option<LyricsBlock>,
    #[serde(default)]
    pub workflow: Option<WorkflowBlock>,
}

impl ConversationTurn {
    /// A plain user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
            tracks: Vec::new(),
            lyrics: None,
            workflow: None,
        }
    }

    /// An assistant turn with no enrichment.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            text: text.into(),
            tracks: Vec::new(),
            lyrics: None,
            workflow: None,
        }
    }
}

/// An artist/title hint extracted from model output.
///
/// Not guaranteed to resolve; requests that fail catalog lookup are silently
/// dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackRequest {
    pub artist: String,
    pub title: String,
}

impl TrackRequest {
    /// Both fields are required before a lookup is worth attempting.
    pub fn is_complete(&self) -> bool {
        !self.artist.is_empty() && !self.title.is_empty()
    }
}

/// A resolved catalog entry. Only ever produced by the track enricher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub cover: String,
    /// 30-second preview URL.
    pub preview: String,
}

/// Songwriting material attached to a turn. All fields optional; presence
/// implies relevance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LyricsBlock {
    pub hook: Option<String>,
    pub verse: Option<String>,
    pub structure: Option<String>,
    pub adlibs: Vec<String>,
}

/// Project-workflow material attached to a turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowBlock {
    #[serde(rename = "type")]
    pub kind: WorkflowKind,
    pub title: String,
    pub items: Vec<String>,
}

/// Kind of workflow block. Unknown kinds from the model degrade to `Note`
/// rather than failing the whole payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowKind {
    Todo,
    Checklist,
    Version,
    #[default]
    #[serde(other)]
    Note,
}
