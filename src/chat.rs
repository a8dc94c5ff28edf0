//! DeepSeek API client module
//!
//! Wire types and the blocking transport shared by both entry points.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::DeepseekConfig;
use crate::errors::ChatError;

const REQUEST_TIMEOUT_SECS: u64 = 90;

/// Temperature for free-text chat, moderately deterministic phrasing.
const CHAT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// System instruction first, user content second. The order is part of the
/// request contract.
pub fn build_messages(system: &str, user: &str) -> Vec<Message> {
    vec![
        Message {
            role: Role::System,
            content: system.to_string(),
        },
        Message {
            role: Role::User,
            content: user.to_string(),
        },
    ]
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

impl ResponseFormat {
    #[must_use]
    pub fn json_object() -> Self {
        Self {
            format_type: "json_object".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Message,
}

/// Blocking client for the DeepSeek chat-completion endpoint.
///
/// Holds no mutable state; a single instance is safe to reuse across many
/// sequential calls.
pub struct ChatClient {
    config: DeepseekConfig,
    http: Client,
}

impl ChatClient {
    /// # Errors
    ///
    /// Returns `ChatError::Request` if the underlying HTTP client cannot be
    /// built.
    pub fn new(config: DeepseekConfig) -> Result<Self, ChatError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ChatError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    /// Issue one chat-completion request and return the first choice's text.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Request` on transport failure, a non-success
    /// status, or a response without choices.
    pub fn complete(
        &self,
        messages: Vec<Message>,
        temperature: Option<f32>,
        json_output: bool,
    ) -> Result<String, ChatError> {
        let body = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature,
            response_format: json_output.then(ResponseFormat::json_object),
        };

        #[cfg(feature = "debug-logs")]
        info!("Request body:\n{:?}", body);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Sending chat completion with {} messages to model {}",
            body.messages.len(),
            body.model
        );

        let response = self
            .http
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .map_err(|e| ChatError::Request(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .unwrap_or_else(|e| format!("failed to read error response body: {e}"));
            return Err(ChatError::Request(format!(
                "status {status}: {error_text}"
            )));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .map_err(|e| ChatError::Request(format!("unexpected response shape: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ChatError::Request("no choices in response".to_string()))
    }

    /// Free-text chat. Every failure is normalized into the returned string,
    /// so this never raises past its boundary: the result is either the
    /// model's text or a message starting with `"Error: "`.
    #[must_use]
    pub fn chat(&self, prompt: &str) -> String {
        match self.try_chat(prompt) {
            Ok(text) => text,
            Err(ChatError::InvalidInput(_)) => "Error: Invalid prompt provided".to_string(),
            Err(e) => format!("Error: {e}"),
        }
    }

    fn try_chat(&self, prompt: &str) -> Result<String, ChatError> {
        if prompt.is_empty() {
            return Err(ChatError::InvalidInput("empty prompt".to_string()));
        }

        let messages = build_messages("You are a helpful assistant", prompt);
        self.complete(messages, Some(CHAT_TEMPERATURE), false)
    }
}
