//! Defensive parsing of model output into a turn payload.
//!
//! The generation backend is instructed to emit a JSON object but is not
//! contractually guaranteed to. The parser classifies each reply as either a
//! structured payload or raw text; the raw-text path is a first-class
//! outcome, not an error. Models also like to wrap JSON in a fenced code
//! block, with or without a language tag, so the fence is stripped before
//! decoding.

use serde::Deserialize;
use tracing::debug;

use super::models::{LyricsBlock, TrackRequest, WorkflowBlock};

/// Substituted when a structured payload carries no message of its own.
pub const DEFAULT_STRUCTURED_MESSAGE: &str = "Let me find some tracks for you...";

/// The fields a well-formed structured reply may carry.
///
/// Every field is defaulted: missing arrays become empty, missing objects
/// stay absent, unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TurnPayload {
    pub message: String,
    pub tracks: Vec<TrackRequest>,
    pub lyrics: Option<LyricsBlock>,
    pub workflow: Option<WorkflowBlock>,
}

/// Classification of one raw model reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedReply {
    /// The reply decoded as the structured turn contract.
    Structured(TurnPayload),
    /// The reply was not valid JSON; the entire raw text becomes the message.
    RawText(String),
}

/// Parse one raw model reply.
pub fn parse_reply(raw: &str) -> ParsedReply {
    let candidate = strip_code_fence(raw);
    match serde_json::from_str::<TurnPayload>(candidate) {
        Ok(mut payload) => {
            if payload.message.is_empty() {
                payload.message = DEFAULT_STRUCTURED_MESSAGE.to_string();
            }
            ParsedReply::Structured(payload)
        }
        Err(err) => {
            debug!(error = %err, "Model reply is not structured JSON, passing through as text");
            ParsedReply::RawText(raw.to_string())
        }
    }
}

/// Strip an enclosing ``` fence and an optional language tag on the fence
/// line. Text without a fence is returned trimmed.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_suffix("```").unwrap_or(rest);

    // A language tag like "json" sits between the opening fence and the
    // first newline; payload content starting immediately is kept as-is.
    match rest.split_once('\n') {
        Some((first_line, body))
            if !first_line.trim().is_empty() && !first_line.trim_start().starts_with('{') =>
        {
            body.trim()
        }
        _ => rest.trim(),
    }
}
