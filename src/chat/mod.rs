//! The conversational turn pipeline.
//!
//! One user utterance goes in, a model-generated structured reply comes back,
//! gets defensively parsed, enriched with catalog metadata for up to three
//! referenced tracks, and is committed to the session history as a turn.

mod models;
mod orchestrator;
mod parser;
mod prompt;

pub use models::{
    ConversationTurn, LyricsBlock, TrackRecord, TrackRequest, TurnRole, WorkflowBlock,
    WorkflowKind,
};
pub use orchestrator::{ChatAgent, FALLBACK_MESSAGE, MAX_TRACK_LOOKUPS};
pub use parser::{parse_reply, ParsedReply, TurnPayload, DEFAULT_STRUCTURED_MESSAGE};
pub use prompt::SYSTEM_PROMPT;
