use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to access DeepSeek API: {0}")]
    Request(String),

    #[error("Failed to parse JSON response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ChatError {
    fn from(error: reqwest::Error) -> Self {
        ChatError::Request(error.to_string())
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(error: serde_json::Error) -> Self {
        ChatError::Parse(error.to_string())
    }
}
