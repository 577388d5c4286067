//! Gemini request conversion helpers (pure functions)
//!
//! These helpers convert unified ChatMessage/Tool structures into
//! Gemini's typed request structures without performing HTTP calls.

use base64::Engine;

use crate::error::LlmError;
use crate::types::{ChatMessage, MessageContent, MessageRole, Tool};

use super::types::{
    Content, FunctionDeclaration, FunctionResponse, GeminiConfig, GeminiTool,
    GenerateContentRequest, Part,
};

/// Parse a data URL into its MIME type and base64 payload
fn parse_data_url(data_url: &str) -> Option<(String, String)> {
    if let Some(comma_pos) = data_url.find(',') {
        let header = &data_url[5..comma_pos]; // Skip "data:"
        let data = &data_url[comma_pos + 1..];

        // Extract MIME type
        let mime_type = if let Some(semicolon_pos) = header.find(';') {
            header[..semicolon_pos].to_string()
        } else {
            header.to_string()
        };

        Some((mime_type, data.to_string()))
    } else {
        None
    }
}

/// Resolve an image URL into a Gemini part.
///
/// Three forms are accepted:
/// - `gs://` object URIs become `fileData` references, with the MIME type
///   taken from the extension (`.jpg` -> JPEG, `.png` -> PNG, anything else
///   defaults to GIF);
/// - `data:` URLs are decoded to validate the payload and re-wrapped as
///   `inlineData`;
/// - anything else is treated as a local file path, read from disk and
///   inlined.
fn convert_image_url(image_url: &str) -> Result<Part, LlmError> {
    if image_url.starts_with("gs://") {
        let mime_type = if image_url.ends_with(".jpg") {
            "image/jpeg"
        } else if image_url.ends_with(".png") {
            "image/png"
        } else {
            "image/gif"
        };
        return Ok(Part::FileData {
            file_data: super::types::FileData {
                mime_type: Some(mime_type.to_string()),
                file_uri: image_url.to_string(),
            },
        });
    }

    if image_url.starts_with("data:") {
        let (mime_type, payload) = parse_data_url(image_url).ok_or_else(|| {
            LlmError::InvalidInput("malformed data URL in image part".to_string())
        })?;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload.as_bytes())
            .map_err(|e| LlmError::InvalidInput(format!("invalid base64 image payload: {e}")))?;
        return Ok(Part::InlineData {
            inline_data: super::types::Blob {
                mime_type,
                data: base64::engine::general_purpose::STANDARD.encode(bytes),
            },
        });
    }

    // Local file path
    let bytes = std::fs::read(image_url)?;
    let mime_type = crate::utils::mime::guess_mime(Some(&bytes), Some(image_url));
    Ok(Part::InlineData {
        inline_data: super::types::Blob {
            mime_type,
            data: base64::engine::general_purpose::STANDARD.encode(&bytes),
        },
    })
}

/// Convert one content fragment into a Gemini part
fn convert_content_part(part: &crate::types::ContentPart) -> Result<Part, LlmError> {
    match part {
        crate::types::ContentPart::Text { text } => Ok(Part::Text {
            text: text.clone(),
            thought: None,
        }),
        crate::types::ContentPart::Image { image_url, .. } => convert_image_url(image_url),
        crate::types::ContentPart::Audio { .. } => Err(LlmError::InvalidInput(
            "only text and image parts are supported".to_string(),
        )),
    }
}

/// Convert `ChatMessage` to Gemini Content.
///
/// With `is_history` set, roles collapse to the two values the conversation
/// history accepts: `user` for user messages and `model` for everything else.
/// Otherwise the message role is passed through unchanged.
///
/// A message carrying tool calls (role `Tool`, or empty content alongside
/// tool calls) converts to `functionResponse` parts only; its content is not
/// emitted.
pub fn convert_message_to_content(
    message: &ChatMessage,
    is_history: bool,
) -> Result<Content, LlmError> {
    let has_tool_calls = message
        .tool_calls
        .as_ref()
        .is_some_and(|calls| !calls.is_empty());

    if message.role == MessageRole::Tool && !has_tool_calls {
        return Err(LlmError::InvalidInput(
            "tool message carries no tool calls".to_string(),
        ));
    }

    let mut parts = Vec::new();

    if has_tool_calls && (message.role == MessageRole::Tool || message.is_empty()) {
        for tool_call in message.tool_calls.as_deref().unwrap_or_default() {
            if let Some(function) = &tool_call.function {
                // Unparseable argument strings degrade to an empty mapping.
                let response = serde_json::from_str(&function.arguments)
                    .unwrap_or_else(|_| serde_json::json!({}));
                parts.push(Part::FunctionResponse {
                    function_response: FunctionResponse {
                        name: function.name.clone(),
                        response,
                    },
                });
            }
        }
    } else {
        match &message.content {
            MessageContent::Text(text) => {
                parts.push(Part::Text {
                    text: text.clone(),
                    thought: None,
                });
            }
            MessageContent::MultiModal(fragments) => {
                for fragment in fragments {
                    parts.push(convert_content_part(fragment)?);
                }
            }
        }
    }

    let role = if is_history {
        match message.role {
            MessageRole::User => "user".to_string(),
            _ => "model".to_string(),
        }
    } else {
        message.role.as_str().to_string()
    };

    Ok(Content {
        role: Some(role),
        parts,
    })
}

/// Convert Tools to Gemini Tools
pub fn convert_tools_to_gemini(tools: &[Tool]) -> Result<Vec<GeminiTool>, LlmError> {
    let mut gemini_tools = Vec::new();
    let mut function_declarations = Vec::new();

    for tool in tools {
        if tool.r#type == "function" {
            function_declarations.push(FunctionDeclaration {
                name: tool.function.name.clone(),
                description: tool.function.description.clone(),
                parameters: Some(tool.function.parameters.clone()),
                response: None,
            });
        } else {
            return Err(LlmError::UnsupportedOperation(format!(
                "Tool type {} not supported by Gemini",
                tool.r#type
            )));
        }
    }

    if !function_declarations.is_empty() {
        gemini_tools.push(GeminiTool::FunctionDeclarations {
            function_declarations,
        });
    }

    Ok(gemini_tools)
}

/// Build the request body for the Gemini API from unified messages
pub fn build_request_body(
    config: &GeminiConfig,
    messages: &[ChatMessage],
    tools: Option<&[Tool]>,
) -> Result<GenerateContentRequest, LlmError> {
    let mut contents = Vec::new();
    let mut system_instruction = None;

    for message in messages {
        if message.role == MessageRole::System {
            // System prompts ride in systemInstruction, not in contents.
            let system_text = message.content.all_text();
            if !system_text.is_empty() {
                system_instruction = Some(Content {
                    role: None,
                    parts: vec![Part::Text {
                        text: system_text,
                        thought: None,
                    }],
                });
            }
        } else {
            contents.push(convert_message_to_content(message, true)?);
        }
    }

    let gemini_tools = match tools {
        Some(tools) if !tools.is_empty() => Some(convert_tools_to_gemini(tools)?),
        _ => None,
    };

    Ok(GenerateContentRequest {
        model: config.model.clone(),
        contents,
        system_instruction,
        tools: gemini_tools,
        tool_config: None,
        safety_settings: config.safety_settings.clone(),
        generation_config: config.generation_config.clone(),
        cached_content: None,
    })
}
