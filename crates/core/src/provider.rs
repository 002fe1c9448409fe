//! Provider trait — the abstraction over the hosted completion endpoint.
//!
//! A Provider knows how to send a conversation to an LLM and get a single,
//! complete textual answer back. One request per call: no streaming, no
//! retries, no batching. The session layer calls `complete()` without
//! knowing which backend is configured.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::message::Message;

/// A single completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// The model to use (e.g., "claude-3-7-sonnet-latest")
    pub model: String,

    /// The conversation messages, oldest first. The bounded history plus the
    /// new user question.
    pub messages: Vec<Message>,

    /// Maximum tokens the model may generate
    pub max_tokens: u32,

    /// Temperature (0.0 = deterministic, 1.0 = creative)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// System instruction, sent out-of-band from the message list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

fn default_temperature() -> f32 {
    0.7
}

/// A complete response from a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// The assistant's reply text
    pub text: String,

    /// Which model actually responded (may differ from requested)
    pub model: String,

    /// Token usage statistics, when the provider reports them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// Token usage information.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl Usage {
    pub fn total_tokens(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

/// The core Provider trait.
///
/// Every completion backend implements this trait. Test code substitutes a
/// scripted implementation behind the same seam.
#[async_trait]
pub trait Provider: Send + Sync {
    /// A human-readable name for this provider (e.g., "anthropic").
    fn name(&self) -> &str;

    /// Send a request and get a complete response.
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> std::result::Result<CompletionResponse, ProviderError>;

    /// Health check — can we reach the provider with the configured
    /// credentials?
    async fn health_check(&self) -> std::result::Result<bool, ProviderError> {
        Ok(true)
    }
}
