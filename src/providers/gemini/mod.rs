//! Google Gemini provider
//!
//! Model family detection, message conversion to the generateContent wire
//! format, and a minimal non-streaming client.

pub mod builder;
pub mod client;
pub mod convert;
pub mod headers;
pub mod types;

pub use builder::GeminiBuilder;
pub use client::GeminiClient;
pub use convert::{build_request_body, convert_message_to_content, convert_tools_to_gemini};
pub use types::*;

/// Whether a model identifier names a member of the Gemini model family.
///
/// A literal, case-sensitive prefix test; no normalization is applied.
pub fn is_gemini_model(model: &str) -> bool {
    model.starts_with("gemini")
}

/// Normalize resource-style model names to the bare model id.
///
/// Accepts a variety of resource-style names:
/// - "gemini-2.0-flash"
/// - "models/gemini-2.0-flash"
/// - "projects/p/locations/l/publishers/google/models/gemini-2.0-flash"
pub fn normalize_gemini_model_id(model: &str) -> String {
    let trimmed = model.trim().trim_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }

    if let Some(pos) = trimmed.rfind("/models/") {
        return trimmed[(pos + "/models/".len())..].to_string();
    }
    if let Some(rest) = trimmed.strip_prefix("models/") {
        return rest.to_string();
    }

    trimmed.to_string()
}
