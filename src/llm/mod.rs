//! LLM completion client
//!
//! The pipeline only ever needs one operation from the model: send a list
//! of chat messages, get the text of the reply back. [`LlmClient`] is that
//! seam; [`ChatCompletionsClient`] implements it against any
//! OpenAI-compatible `/chat/completions` endpoint.

mod chat_completions;

pub use chat_completions::ChatCompletionsClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// One chat message sent to the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// A hosted chat model
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send `messages` and return the plain text of the completion
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}
