//! LLM infrastructure for the conversational pipeline.
//!
//! Provides a trait-based provider abstraction so the turn orchestrator can
//! run against any OpenAI-compatible chat completions backend, or against a
//! scripted provider in tests.

pub mod llm;

pub use llm::{
    CompletionOptions, CompletionResponse, LlmError, LlmProvider, Message, MessageRole,
    OpenAiProvider,
};
