//! The turn orchestrator: glues the LLM provider, the response parser, the
//! track enricher and the session store into one conversational turn.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::agent::{CompletionOptions, LlmError, LlmProvider, Message};
use crate::enrichment::TrackCatalog;
use crate::session::SessionStore;

use super::models::{ConversationTurn, TrackRecord, TrackRequest, TurnRole};
use super::parser::{parse_reply, ParsedReply};
use super::prompt::SYSTEM_PROMPT;

/// Enrichment fan-out bound: only the first 3 track requests of a turn are
/// considered, no matter how many the model emitted.
pub const MAX_TRACK_LOOKUPS: usize = 3;

/// Served when the generation backend fails; the turn always resolves.
pub const FALLBACK_MESSAGE: &str = "Sorry, I hit a snag. Try again!";

/// Handles one conversational turn end to end.
///
/// Safe to share across concurrent requests; per-session ordering is the
/// caller's concern (one in-flight turn per session).
pub struct ChatAgent {
    llm: Arc<dyn LlmProvider>,
    catalog: Arc<dyn TrackCatalog>,
    sessions: Arc<dyn SessionStore>,
    options: CompletionOptions,
    /// Replay prior session history to the model instead of only the latest
    /// utterance.
    include_history: bool,
}

impl ChatAgent {
    pub fn new(
        llm: Arc<dyn LlmProvider>,
        catalog: Arc<dyn TrackCatalog>,
        sessions: Arc<dyn SessionStore>,
        options: CompletionOptions,
        include_history: bool,
    ) -> Self {
        Self {
            llm,
            catalog,
            sessions,
            options,
            include_history,
        }
    }

    /// Run one turn for `session_key` and commit it to the session history.
    ///
    /// Never fails: a generation-backend error becomes a fixed fallback
    /// assistant turn, and the history still advances by exactly two entries
    /// (user + assistant).
    pub async fn handle_turn(&self, session_key: &str, text: &str) -> ConversationTurn {
        let user_turn = ConversationTurn::user(text);

        let assistant_turn = match self.generate(session_key, text).await {
            Ok(turn) => turn,
            Err(err) => {
                warn!(error = %err, "Generation backend failed, serving fallback turn");
                ConversationTurn::assistant(FALLBACK_MESSAGE)
            }
        };

        self.sessions
            .append(session_key, vec![user_turn, assistant_turn.clone()])
            .await;

        assistant_turn
    }

    async fn generate(
        &self,
        session_key: &str,
        text: &str,
    ) -> Result<ConversationTurn, LlmError> {
        let messages = self.build_messages(session_key, text).await;
        let response = self.llm.complete(&messages, &self.options).await?;

        let turn = match parse_reply(&response.message.content) {
            ParsedReply::Structured(payload) => {
                let tracks = self.resolve_tracks(payload.tracks).await;
                ConversationTurn {
                    role: TurnRole::Assistant,
                    text: payload.message,
                    tracks,
                    lyrics: payload.lyrics,
                    workflow: payload.workflow,
                }
            }
            ParsedReply::RawText(text) => ConversationTurn::assistant(text),
        };

        Ok(turn)
    }

    async fn build_messages(&self, session_key: &str, text: &str) -> Vec<Message> {
        let mut messages = vec![Message::system(SYSTEM_PROMPT)];

        if self.include_history {
            for turn in self.sessions.history(session_key).await {
                messages.push(match turn.role {
                    TurnRole::User => Message::user(turn.text),
                    TurnRole::Assistant => Message::assistant(turn.text),
                });
            }
        }

        messages.push(Message::user(text));
        messages
    }

    /// Resolve up to [`MAX_TRACK_LOOKUPS`] track requests concurrently.
    ///
    /// Results are gathered into a slot array by request index and then
    /// compacted, so the final order matches the emitted request order no
    /// matter which lookup finishes first. Requests missing artist or title
    /// are skipped without a catalog call; unresolved requests are dropped.
    async fn resolve_tracks(&self, requests: Vec<TrackRequest>) -> Vec<TrackRecord> {
        let considered: Vec<TrackRequest> =
            requests.into_iter().take(MAX_TRACK_LOOKUPS).collect();

        let lookups = considered
            .iter()
            .enumerate()
            .filter(|(_, request)| request.is_complete())
            .map(|(slot, request)| {
                let catalog = self.catalog.clone();
                async move { (slot, catalog.lookup(request).await) }
            });

        let mut slots: Vec<Option<TrackRecord>> = vec![None; considered.len()];
        for (slot, record) in join_all(lookups).await {
            slots[slot] = record;
        }

        let resolved: Vec<TrackRecord> = slots.into_iter().flatten().collect();
        debug!(
            requested = considered.len(),
            resolved = resolved.len(),
            "Track enrichment complete"
        );
        resolved
    }
}
