//! vertex-gemini
//!
//! Chat message conversion and a minimal client for the Google Gemini
//! generateContent API (Google AI Studio / Vertex AI).
//!
//! The crate does three things:
//! - classifies model identifiers by family ([`is_gemini_model`]);
//! - converts a unified [`ChatMessage`] into Gemini's `Content`/`Part` wire
//!   shape ([`convert_message_to_content`]), including tool-call responses
//!   and image fragments given as `gs://` URIs, data URLs, or local paths;
//! - constructs a [`GeminiClient`] bound to a model and an optional safety
//!   policy and executes non-streaming generateContent calls.
//!
//! # Example
//! ```rust,no_run
//! use vertex_gemini::{ChatMessage, GeminiBuilder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiBuilder::new()
//!     .api_key(std::env::var("GEMINI_API_KEY")?)
//!     .model("gemini-1.5-flash")
//!     .build()?;
//!
//! let messages = vec![ChatMessage::user("Why is the sky blue?").build()];
//! let response = client.generate_content(&messages, None).await?;
//! println!("{}", response.text().unwrap_or_default());
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod error;
pub mod providers;
pub mod types;
pub mod utils;

pub use error::{ErrorCategory, LlmError};
pub use providers::gemini::{
    GeminiBuilder, GeminiClient, convert_message_to_content, is_gemini_model,
    normalize_gemini_model_id,
};
pub use types::{
    ChatMessage, ChatMessageBuilder, ContentPart, MessageContent, MessageRole, Tool, ToolCall,
};
