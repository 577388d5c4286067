//! generateContent execution against a mock HTTP server.

use mockito::Matcher;
use vertex_gemini::providers::gemini::types::{
    GeminiConfig, HarmBlockThreshold, HarmCategory, SafetySetting,
};
use vertex_gemini::{ChatMessage, GeminiClient, LlmError};

fn client_for(server: &mockito::Server, api_key: &str) -> GeminiClient {
    GeminiClient::new(
        GeminiConfig::new(api_key.to_string())
            .with_base_url(server.url())
            .with_model("gemini-1.5-flash".to_string()),
    )
    .expect("client builds")
}

#[tokio::test]
async fn generate_content_posts_the_converted_body_and_parses_candidates() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_header("x-goog-api-key", "test-key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "contents": [
                {"role": "user", "parts": [{"text": "hi"}]}
            ],
            "safetySettings": [
                {"category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_NONE"}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "hello!"}]},
                    "finishReason": "STOP",
                    "index": 0
                }],
                "usageMetadata": {"promptTokenCount": 2, "candidatesTokenCount": 3, "totalTokenCount": 5}
            }"#,
        )
        .create_async()
        .await;

    let client = client_for(&server, "test-key").with_safety_settings(vec![SafetySetting {
        category: HarmCategory::Harassment,
        threshold: HarmBlockThreshold::BlockNone,
    }]);

    let messages = vec![ChatMessage::user("hi").build()];
    let response = client.generate_content(&messages, None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.text().as_deref(), Some("hello!"));
    assert_eq!(
        response.usage_metadata.and_then(|u| u.total_token_count),
        Some(5)
    );
}

#[tokio::test]
async fn error_envelopes_map_to_api_errors_with_the_service_message() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server, "bad-key");
    let messages = vec![ChatMessage::user("hi").build()];
    let err = client.generate_content(&messages, None).await.unwrap_err();

    let LlmError::ApiError { code, message, .. } = err else {
        panic!("expected ApiError, got {err:?}");
    };
    assert_eq!(code, 400);
    assert_eq!(message, "API key not valid");
}

#[tokio::test]
async fn server_side_failures_are_classified_as_retryable() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .with_status(503)
        .with_body("upstream overloaded")
        .create_async()
        .await;

    let client = client_for(&server, "test-key");
    let messages = vec![ChatMessage::user("hi").build()];
    let err = client.generate_content(&messages, None).await.unwrap_err();

    assert!(err.is_retryable());
    assert!(matches!(err, LlmError::ApiError { code: 503, .. }));
}
