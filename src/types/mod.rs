//! Unified chat types shared across the crate

pub mod chat;
pub mod tools;

pub use chat::{
    ChatMessage, ChatMessageBuilder, ContentPart, MessageContent, MessageMetadata, MessageRole,
};
pub use tools::{FunctionCall, Tool, ToolCall, ToolFunction};
