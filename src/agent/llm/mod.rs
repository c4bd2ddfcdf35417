//! LLM provider abstraction layer.

mod openai;
mod provider;
mod types;

pub use openai::OpenAiProvider;
pub use provider::{CompletionOptions, LlmError, LlmProvider};
pub use types::{CompletionResponse, Message, MessageRole, TokenUsage};
