//! Draft generation clients.
//!
//! Two interchangeable [`DraftPort`] adapters: [`EdgeFunctionClient`]
//! forwards the `{type, data}` request to a deployed generation function,
//! [`OpenAiDraftClient`] builds the prompt in-process and calls an
//! OpenAI-compatible chat-completions API directly.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use worldsmith_shared::{DraftFailure, DraftRequest, DraftResponse};

use crate::infrastructure::ports::{DraftError, DraftPort};
use crate::infrastructure::prompts;

/// Default chat-completions endpoint.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Default model for drafts.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

/// Sampling temperature for every draft; descriptive fields want variety.
const DRAFT_TEMPERATURE: f32 = 0.8;

// Drafts can be slow; match the function side's patience.
const DRAFT_TIMEOUT_SECS: u64 = 120;

/// Client for a deployed generation function endpoint.
pub struct EdgeFunctionClient {
    client: Client,
    function_url: String,
    api_key: Option<String>,
}

impl EdgeFunctionClient {
    pub fn new(function_url: &str, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(DRAFT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            function_url: function_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl DraftPort for EdgeFunctionClient {
    async fn draft(&self, request: &DraftRequest) -> Result<String, DraftError> {
        let mut builder = self.client.post(&self.function_url).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| DraftError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DraftError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            // The function reports failures as {error, details}; keep its
            // message when one is there.
            let message = serde_json::from_str::<DraftFailure>(&body)
                .map(|failure| failure.error)
                .unwrap_or_else(|_| format!("{status}: {body}"));
            return Err(DraftError::RequestFailed(message));
        }

        let parsed: DraftResponse = serde_json::from_str(&body)
            .map_err(|e| DraftError::InvalidResponse(e.to_string()))?;
        if parsed.content.trim().is_empty() {
            return Err(DraftError::EmptyContent);
        }
        Ok(parsed.content)
    }
}

/// Client for an OpenAI-compatible chat-completions API.
pub struct OpenAiDraftClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAiDraftClient {
    pub fn new(base_url: &str, api_key: Option<String>, model: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(DRAFT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model: model.to_string(),
        }
    }

    /// Create client from environment variables.
    ///
    /// Uses `OPENAI_BASE_URL`, `OPENAI_API_KEY`, and `OPENAI_MODEL`,
    /// falling back to defaults where unset. A missing key is reported at
    /// call time, not construction time.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.into());
        let api_key = std::env::var("OPENAI_API_KEY").ok();
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.into());
        Self::new(&base_url, api_key, &model)
    }
}

#[async_trait]
impl DraftPort for OpenAiDraftClient {
    async fn draft(&self, request: &DraftRequest) -> Result<String, DraftError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            DraftError::MissingCredential("OPENAI_API_KEY is not set".to_string())
        })?;

        let prompt = prompts::build(request);
        let api_request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatRequestMessage {
                    role: "system",
                    content: prompt.system.to_string(),
                },
                ChatRequestMessage {
                    role: "user",
                    content: prompt.user,
                },
            ],
            max_tokens: prompt.max_tokens,
            temperature: DRAFT_TEMPERATURE,
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| DraftError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .map_err(|e| DraftError::RequestFailed(e.to_string()))?;
            return Err(DraftError::RequestFailed(format!("{status}: {error_text}")));
        }

        let api_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DraftError::InvalidResponse(e.to_string()))?;

        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();
        let content = content.trim();
        if content.is_empty() {
            return Err(DraftError::EmptyContent);
        }
        Ok(content.to_string())
    }
}

// =============================================================================
// Chat-completions API types
// =============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatRequestMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatRequestMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldsmith_shared::WorldNameFields;

    #[tokio::test]
    async fn missing_api_key_fails_before_any_request() {
        let client = OpenAiDraftClient::new(DEFAULT_OPENAI_BASE_URL, None, DEFAULT_OPENAI_MODEL);
        let request = DraftRequest::WorldName(WorldNameFields::default());
        assert!(matches!(
            client.draft(&request).await,
            Err(DraftError::MissingCredential(_))
        ));
    }

    #[test]
    fn chat_request_shape_matches_the_api() {
        let api_request = ChatRequest {
            model: "gpt-3.5-turbo".into(),
            messages: vec![ChatRequestMessage {
                role: "user",
                content: "hello".into(),
            }],
            max_tokens: 50,
            temperature: DRAFT_TEMPERATURE,
        };
        let value = serde_json::to_value(&api_request).expect("serialize");
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["max_tokens"], 50);
    }
}
