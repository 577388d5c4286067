//! Conversion behavior of the public message-to-content API.

use vertex_gemini::providers::gemini::types::Part;
use vertex_gemini::{
    ChatMessage, LlmError, ToolCall, convert_message_to_content, is_gemini_model,
};

#[test]
fn classifier_accepts_exactly_the_gemini_prefix() {
    assert!(is_gemini_model("gemini-1.5-pro"));
    assert!(is_gemini_model("geminixyz"));
    assert!(!is_gemini_model("claude-3"));
    assert!(!is_gemini_model("Gemini-1.5-pro"));
}

#[test]
fn history_mode_maps_user_text_to_a_user_content() {
    let message = ChatMessage::user("hi").build();
    let content = convert_message_to_content(&message, true).unwrap();

    assert_eq!(content.role.as_deref(), Some("user"));
    assert_eq!(content.parts.len(), 1);
    assert!(matches!(&content.parts[0], Part::Text { text, .. } if text == "hi"));
}

#[test]
fn history_mode_maps_assistant_text_to_a_model_content() {
    let message = ChatMessage::assistant("ok").build();
    let content = convert_message_to_content(&message, true).unwrap();
    assert_eq!(content.role.as_deref(), Some("model"));
}

#[test]
fn non_history_mode_keeps_the_original_role() {
    let message = ChatMessage::assistant("ok").build();
    let content = convert_message_to_content(&message, false).unwrap();
    assert_eq!(content.role.as_deref(), Some("assistant"));
}

#[test]
fn tool_calls_on_an_empty_message_become_a_single_function_response() {
    let message = ChatMessage::user("")
        .with_tool_calls(vec![ToolCall::function("call_1", "lookup", r#"{"q":"x"}"#)])
        .build();

    let content = convert_message_to_content(&message, true).unwrap();
    assert_eq!(content.parts.len(), 1);

    let Part::FunctionResponse { function_response } = &content.parts[0] else {
        panic!("expected a functionResponse part");
    };
    assert_eq!(function_response.name, "lookup");
    assert_eq!(function_response.response, serde_json::json!({"q": "x"}));

    let has_text_parts = content
        .parts
        .iter()
        .any(|part| matches!(part, Part::Text { .. }));
    assert!(!has_text_parts);
}

#[test]
fn gs_jpg_uri_becomes_a_jpeg_file_reference() {
    let message = ChatMessage::user("")
        .with_image("gs://bucket/pic.jpg".to_string(), None)
        .build();

    let content = convert_message_to_content(&message, true).unwrap();
    let Part::FileData { file_data } = &content.parts[0] else {
        panic!("expected a fileData part");
    };
    assert_eq!(file_data.file_uri, "gs://bucket/pic.jpg");
    assert_eq!(file_data.mime_type.as_deref(), Some("image/jpeg"));
}

#[test]
fn unsupported_fragment_kinds_fail_conversion() {
    use vertex_gemini::{ContentPart, MessageContent, MessageRole};

    let message = ChatMessage {
        role: MessageRole::User,
        content: MessageContent::MultiModal(vec![ContentPart::Audio {
            audio_url: "https://example.test/voice.wav".to_string(),
            format: "wav".to_string(),
        }]),
        metadata: Default::default(),
        tool_calls: None,
        tool_call_id: None,
    };

    let err = convert_message_to_content(&message, true).unwrap_err();
    assert!(matches!(err, LlmError::InvalidInput(_)));
}

#[test]
fn converted_content_serializes_to_the_rest_wire_shape() {
    let message = ChatMessage::user("look")
        .with_image("gs://bucket/pic.png".to_string(), None)
        .build();

    let content = convert_message_to_content(&message, true).unwrap();
    let json = serde_json::to_value(&content).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "role": "user",
            "parts": [
                {"text": "look"},
                {"fileData": {"mimeType": "image/png", "fileUri": "gs://bucket/pic.png"}}
            ]
        })
    );
}
