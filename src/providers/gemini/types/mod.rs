//! Gemini API types (split by concern)

mod config;
mod content;
mod generation;

pub use config::{FunctionCallingConfig, FunctionCallingMode, GeminiConfig, ToolConfig};
pub use content::{
    Blob, Candidate, Content, FileData, FinishReason, FunctionCall, FunctionDeclaration,
    FunctionResponse, GeminiTool, HarmBlockThreshold, HarmCategory, HarmProbability, Part,
    SafetyRating, SafetySetting,
};
pub use generation::{
    BlockReason, GenerateContentRequest, GenerateContentResponse, GenerationConfig, PromptFeedback,
    UsageMetadata,
};
