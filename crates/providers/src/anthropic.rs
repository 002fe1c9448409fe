//! Anthropic native provider implementation.
//!
//! Uses Anthropic's Messages API directly:
//! - `x-api-key` header authentication (not Bearer)
//! - `anthropic-version` header
//! - System prompt as top-level field
//!
//! One blocking round trip per request. The reply is the first `text`
//! content block of the response body; any other shape is a parse failure.

use async_trait::async_trait;
use craftsman_core::error::ProviderError;
use craftsman_core::message::{Message, Role};
use craftsman_core::provider::{CompletionRequest, CompletionResponse, Provider, Usage};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Anthropic native Messages API provider.
#[derive(Debug)]
pub struct AnthropicProvider {
    name: String,
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider.
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            name: "anthropic".into(),
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Create with a custom base URL (e.g., for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Extract system messages from the message list.
    /// Anthropic puts the system prompt as a top-level field, not in messages.
    fn extract_system(messages: &[Message]) -> (Option<String>, Vec<&Message>) {
        let mut system_parts: Vec<&str> = Vec::new();
        let mut non_system: Vec<&Message> = Vec::new();

        for msg in messages {
            match msg.role {
                Role::System => system_parts.push(&msg.content),
                _ => non_system.push(msg),
            }
        }

        let system = if system_parts.is_empty() {
            None
        } else {
            Some(system_parts.join("\n\n"))
        };

        (system, non_system)
    }

    /// Convert messages to Anthropic API format.
    fn to_api_messages(messages: &[&Message]) -> Vec<AnthropicMessage> {
        messages
            .iter()
            .map(|msg| AnthropicMessage {
                role: match msg.role {
                    Role::Assistant => "assistant".into(),
                    // System is handled separately; anything else is "user"
                    _ => "user".into(),
                },
                content: msg.content.clone(),
            })
            .collect()
    }

    /// Convert an Anthropic API response to our CompletionResponse.
    ///
    /// The first content block must be text; any other shape is rejected.
    fn response_to_completion(
        resp: AnthropicResponse,
    ) -> Result<CompletionResponse, ProviderError> {
        let text = match resp.content.first() {
            Some(ResponseContentBlock::Text { text }) => text.clone(),
            Some(ResponseContentBlock::Other) => {
                return Err(ProviderError::MalformedResponse(
                    "first content block is not text".into(),
                ));
            }
            None => {
                return Err(ProviderError::MalformedResponse(
                    "response contains no content blocks".into(),
                ));
            }
        };

        Ok(CompletionResponse {
            text,
            model: resp.model,
            usage: Some(Usage {
                input_tokens: resp.usage.input_tokens,
                output_tokens: resp.usage.output_tokens,
            }),
        })
    }
}

#[async_trait]
impl Provider for AnthropicProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError> {
        let url = format!("{}/v1/messages", self.base_url);
        let (inline_system, messages) = Self::extract_system(&request.messages);
        let api_messages = Self::to_api_messages(&messages);

        // The explicit request field wins; system messages embedded in the
        // list are a fallback.
        let system = request.system.or(inline_system);

        let mut body = serde_json::json!({
            "model": request.model,
            "messages": api_messages,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        });

        if let Some(ref sys) = system {
            body["system"] = serde_json::json!(sys);
        }

        debug!(provider = "anthropic", model = %request.model, "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(ProviderError::RateLimited {
                retry_after_secs: 5,
            });
        }
        if status == 401 || status == 403 {
            return Err(ProviderError::AuthenticationFailed(
                "Invalid Anthropic API key".into(),
            ));
        }
        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Anthropic API error");
            return Err(ProviderError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_resp: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| {
                ProviderError::MalformedResponse(format!("Failed to parse Anthropic response: {e}"))
            })?;

        Self::response_to_completion(api_resp)
    }

    async fn health_check(&self) -> Result<bool, ProviderError> {
        // Minimal one-token request to verify the API key
        let url = format!("{}/v1/messages", self.base_url);
        let body = serde_json::json!({
            "model": "claude-3-5-haiku-latest",
            "messages": [{"role": "user", "content": "hi"}],
            "max_tokens": 1,
        });

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        // 200 = works, 401 = bad key, anything else = reachable but error
        Ok(response.status().is_success() || response.status().as_u16() != 401)
    }
}

// --- Anthropic API types ---

#[derive(Debug, Serialize, Deserialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    model: String,
    content: Vec<ResponseContentBlock>,
    usage: AnthropicUsage,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum ResponseContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor() {
        let provider = AnthropicProvider::new("sk-ant-test");
        assert_eq!(provider.name(), "anthropic");
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn constructor_with_base_url() {
        let provider =
            AnthropicProvider::new("sk-ant-test").with_base_url("https://custom.proxy.com/");
        assert_eq!(provider.base_url, "https://custom.proxy.com");
    }

    #[test]
    fn system_extraction() {
        let messages = vec![
            Message::system("You are a Laravel expert"),
            Message::system("Be concise"),
            Message::user("Hello"),
            Message::assistant("Hi!"),
        ];

        let (system, non_system) = AnthropicProvider::extract_system(&messages);
        assert_eq!(
            system.as_deref(),
            Some("You are a Laravel expert\n\nBe concise")
        );
        assert_eq!(non_system.len(), 2);
        assert_eq!(non_system[0].role, Role::User);
        assert_eq!(non_system[1].role, Role::Assistant);
    }

    #[test]
    fn system_extraction_no_system() {
        let messages = vec![Message::user("Hello")];
        let (system, non_system) = AnthropicProvider::extract_system(&messages);
        assert!(system.is_none());
        assert_eq!(non_system.len(), 1);
    }

    #[test]
    fn message_conversion_user_assistant() {
        let messages = vec![Message::user("Hello"), Message::assistant("Hi!")];
        let refs: Vec<&Message> = messages.iter().collect();
        let api_msgs = AnthropicProvider::to_api_messages(&refs);
        assert_eq!(api_msgs.len(), 2);
        assert_eq!(api_msgs[0].role, "user");
        assert_eq!(api_msgs[0].content, "Hello");
        assert_eq!(api_msgs[1].role, "assistant");
    }

    #[test]
    fn parse_text_response() {
        let resp: AnthropicResponse = serde_json::from_str(
            r#"{
                "id": "msg_01",
                "model": "claude-3-7-sonnet-latest",
                "content": [{"type": "text", "text": "Use Eloquent scopes."}],
                "usage": {"input_tokens": 10, "output_tokens": 5},
                "stop_reason": "end_turn"
            }"#,
        )
        .unwrap();

        let completion = AnthropicProvider::response_to_completion(resp).unwrap();
        assert_eq!(completion.text, "Use Eloquent scopes.");
        assert_eq!(completion.model, "claude-3-7-sonnet-latest");
        assert_eq!(completion.usage.unwrap().total_tokens(), 15);
    }

    #[test]
    fn only_first_text_block_is_extracted() {
        let resp: AnthropicResponse = serde_json::from_str(
            r#"{
                "model": "claude-3-7-sonnet-latest",
                "content": [
                    {"type": "text", "text": "First."},
                    {"type": "text", "text": "Second."}
                ],
                "usage": {"input_tokens": 1, "output_tokens": 2}
            }"#,
        )
        .unwrap();

        let completion = AnthropicProvider::response_to_completion(resp).unwrap();
        assert_eq!(completion.text, "First.");
    }

    #[test]
    fn non_text_first_block_is_rejected() {
        let resp: AnthropicResponse = serde_json::from_str(
            r#"{
                "model": "claude-3-7-sonnet-latest",
                "content": [{"type": "tool_use", "id": "t1", "name": "x", "input": {}}],
                "usage": {"input_tokens": 1, "output_tokens": 2}
            }"#,
        )
        .unwrap();

        let err = AnthropicProvider::response_to_completion(resp).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }

    #[test]
    fn empty_content_is_rejected() {
        let resp: AnthropicResponse = serde_json::from_str(
            r#"{
                "model": "claude-3-7-sonnet-latest",
                "content": [],
                "usage": {"input_tokens": 1, "output_tokens": 0}
            }"#,
        )
        .unwrap();

        let err = AnthropicProvider::response_to_completion(resp).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }
}
