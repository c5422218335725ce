//! Inline assistant engine for Notepad.
//!
//! Provides:
//! - a Gemini `generateContent` client behind the [`AiClient`] trait
//! - question parsing and conversation context
//! - a dispatcher that runs requests off the UI thread and reports
//!   completions over a channel, with bounded in-flight requests,
//!   per-request cancellation, and timeouts

pub mod conversation;
pub mod dispatcher;
pub mod gemini;
pub mod token_tracker;

use async_trait::async_trait;

pub use conversation::{ConversationContext, Query};
pub use dispatcher::{Completion, Dispatched, Dispatcher, DispatcherSettings, RequestId};
pub use gemini::{GeminiClient, GeminiConfig};
pub use token_tracker::TokenTracker;

#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError>;

    /// Model name, for logs and the status bar.
    fn model(&self) -> &str;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Request cancelled")]
    Cancelled,
    #[error("Assistant is busy ({limit} request(s) already in flight)")]
    Busy { limit: usize },
    #[error("Assistant not configured: {0}")]
    NotConfigured(String),
}
