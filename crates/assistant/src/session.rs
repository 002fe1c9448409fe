//! The assistant session — one bounded transcript, one round trip per ask.

use std::sync::Arc;

use craftsman_config::AppConfig;
use craftsman_core::error::ProviderError;
use craftsman_core::message::{ConversationHistory, Message};
use craftsman_core::provider::{CompletionRequest, Provider};
use tracing::{debug, info};

use crate::prompt::system_prompt;

/// A conversation session against a completion provider.
///
/// The session owns the transcript. Each [`ask`] sends the system prompt,
/// the bounded history, and the new question; on success the exchange is
/// recorded (evicting the oldest entries past the cap), on failure the
/// transcript is left untouched and the error is returned for display —
/// the session remains usable either way.
///
/// [`ask`]: Session::ask
pub struct Session {
    provider: Arc<dyn Provider>,
    model: String,
    temperature: f32,
    max_tokens: u32,
    system_prompt: String,
    history: ConversationHistory,
}

impl Session {
    /// Create a session from configuration.
    pub fn new(provider: Arc<dyn Provider>, config: &AppConfig) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            system_prompt: system_prompt(config.system_prompt_override.as_deref()),
            history: ConversationHistory::new(),
        }
    }

    /// Replace the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Replace the history cap (mainly for tests).
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = ConversationHistory::with_limit(limit);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Ask one question: a single blocking round trip.
    pub async fn ask(&mut self, query: &str) -> Result<String, ProviderError> {
        let mut messages: Vec<Message> = self.history.messages().to_vec();
        messages.push(Message::user(query));

        let request = CompletionRequest {
            model: self.model.clone(),
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            system: Some(self.system_prompt.clone()),
        };

        debug!(model = %self.model, history_len = self.history.len(), "Sending query");

        let response = self.provider.complete(request).await?;

        if let Some(usage) = response.usage {
            info!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "Exchange complete"
            );
        }

        self.history.record_exchange(query, &response.text);
        Ok(response.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftsman_core::provider::{CompletionResponse, Usage};
    use std::sync::Mutex;

    /// A scripted provider: returns queued responses in order and records
    /// every request it receives.
    struct ScriptedProvider {
        responses: Mutex<Vec<Result<CompletionResponse, ProviderError>>>,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedProvider {
        fn new(responses: Vec<Result<CompletionResponse, ProviderError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn text(text: &str) -> Result<CompletionResponse, ProviderError> {
            Ok(CompletionResponse {
                text: text.into(),
                model: "scripted-model".into(),
                usage: Some(Usage {
                    input_tokens: 10,
                    output_tokens: 5,
                }),
            })
        }

        fn requests(&self) -> Vec<CompletionRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl Provider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(
            &self,
            request: CompletionRequest,
        ) -> Result<CompletionResponse, ProviderError> {
            self.requests.lock().unwrap().push(request);
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                panic!("ScriptedProvider: no more responses queued");
            }
            responses.remove(0)
        }
    }

    fn session_with(provider: Arc<ScriptedProvider>) -> Session {
        Session::new(provider, &AppConfig::default())
    }

    #[tokio::test]
    async fn ask_returns_reply_and_records_exchange() {
        let provider = Arc::new(ScriptedProvider::new(vec![ScriptedProvider::text(
            "Use route model binding.",
        )]));
        let mut session = session_with(provider.clone());

        let reply = session.ask("How do I resolve models in routes?").await.unwrap();
        assert_eq!(reply, "Use route model binding.");

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(
            history.messages()[0].content,
            "How do I resolve models in routes?"
        );
        assert_eq!(history.messages()[1].content, "Use route model binding.");
    }

    #[tokio::test]
    async fn request_carries_system_prompt_and_prior_history() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            ScriptedProvider::text("First answer."),
            ScriptedProvider::text("Second answer."),
        ]));
        let mut session = session_with(provider.clone());

        session.ask("first question").await.unwrap();
        session.ask("second question").await.unwrap();

        let requests = provider.requests();
        assert_eq!(requests.len(), 2);

        let system = requests[0].system.as_deref().unwrap();
        assert!(system.contains("Laravel"));

        // Second request replays the first exchange plus the new question.
        let contents: Vec<_> = requests[1]
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(
            contents,
            vec!["first question", "First answer.", "second question"]
        );
    }

    #[tokio::test]
    async fn failed_round_trip_leaves_history_unchanged() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            ScriptedProvider::text("ok"),
            Err(ProviderError::ApiError {
                status_code: 500,
                message: "overloaded".into(),
            }),
        ]));
        let mut session = session_with(provider);

        session.ask("works").await.unwrap();
        let err = session.ask("fails").await.unwrap_err();
        assert!(matches!(err, ProviderError::ApiError { status_code: 500, .. }));

        // Only the successful exchange is recorded.
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history().messages()[0].content, "works");
    }

    #[tokio::test]
    async fn history_stays_bounded_across_many_exchanges() {
        let responses = (0..15).map(|i| ScriptedProvider::text(&format!("a{i}"))).collect();
        let provider = Arc::new(ScriptedProvider::new(responses));
        let mut session = session_with(provider.clone());

        for i in 0..15 {
            session.ask(&format!("q{i}")).await.unwrap();
        }

        assert_eq!(session.history().len(), 20);
        // Oldest exchanges evicted; the transcript starts at q5.
        assert_eq!(session.history().messages()[0].content, "q5");

        // The request for exchange 15 carried at most cap + 1 messages.
        let last_request = provider.requests().pop().unwrap();
        assert!(last_request.messages.len() <= 21);
    }

    #[tokio::test]
    async fn custom_system_prompt_is_sent() {
        let provider = Arc::new(ScriptedProvider::new(vec![ScriptedProvider::text("ok")]));
        let mut session =
            session_with(provider.clone()).with_system_prompt("You are a Vue expert.");

        session.ask("hi").await.unwrap();
        assert_eq!(
            provider.requests()[0].system.as_deref(),
            Some("You are a Vue expert.")
        );
    }
}
