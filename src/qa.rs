//! Structured question/answer extraction.
//!
//! Asks the model to pull a question and its answer out of exam-style text
//! and return them as a JSON object. Unlike free-text chat, failures here
//! propagate to the caller as typed errors.

use serde_json::{Map, Value};

use crate::chat::{ChatClient, build_messages};
use crate::config::DeepseekConfig;
use crate::errors::ChatError;

/// Few-shot system instruction anchoring the JSON output shape.
const SYSTEM_PROMPT: &str = r#"The user will provide some exam text. Please parse the "question" and "answer" and output them in JSON format.

EXAMPLE INPUT:
Which is the highest mountain in the world? Mount Everest.

EXAMPLE JSON OUTPUT:
{
    "question": "Which is the highest mountain in the world?",
    "answer": "Mount Everest"
}"#;

pub struct QuestionAnswerParser {
    client: ChatClient,
}

impl QuestionAnswerParser {
    /// # Errors
    ///
    /// Returns `ChatError::Request` if the underlying HTTP client cannot be
    /// built.
    pub fn new(config: DeepseekConfig) -> Result<Self, ChatError> {
        Ok(Self {
            client: ChatClient::new(config)?,
        })
    }

    /// Extract a question/answer pair from `text`.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Request` if the API call fails and
    /// `ChatError::Parse` if the returned content is not a JSON object.
    pub fn parse_qa(&self, text: &str) -> Result<Map<String, Value>, ChatError> {
        let messages = build_messages(SYSTEM_PROMPT, text);
        let content = self.client.complete(messages, None, true)?;
        decode_qa(&content)
    }
}

/// Decode the model's reply into a JSON object.
///
/// Keys are deliberately not validated beyond the body being an object;
/// callers check for the fields they need.
pub fn decode_qa(content: &str) -> Result<Map<String, Value>, ChatError> {
    let value: Value = serde_json::from_str(content).map_err(|e| ChatError::Parse(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(ChatError::Parse(format!("not a JSON object: {other}"))),
    }
}
