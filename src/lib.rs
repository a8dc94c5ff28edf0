//! DeepSeek chat-completion client.
//!
//! Two entry points share one blocking transport:
//! 1. Free-text chat that returns plain text and never raises past its
//!    boundary (failures become an `"Error: …"` string).
//! 2. Structured question/answer extraction that asks the model for strict
//!    JSON output and propagates typed failures to the caller.
//!
//! # Example
//!
//! ```no_run
//! use deepseek_chat::chat::ChatClient;
//! use deepseek_chat::config::DeepseekConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     deepseek_chat::setup_logging();
//!
//!     let config = DeepseekConfig::from_env()?;
//!     let client = ChatClient::new(config)?;
//!
//!     let response = client.chat("What is artificial intelligence?");
//!     println!("Response: {response}");
//!
//!     Ok(())
//! }
//! ```

pub mod chat;
pub mod config;
pub mod errors;
pub mod qa;

/// Configure structured logging for terminal output.
///
/// Should be called once at the start of each binary, before any request is
/// issued.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
