//! Gemini Client Implementation
//!
//! Client handle bound to one model and safety policy; executes
//! non-streaming generateContent calls.

use reqwest::Client as HttpClient;
use std::time::Duration;

use crate::error::LlmError;
use crate::types::{ChatMessage, Tool};

use super::convert;
use super::headers::build_gemini_headers;
use super::normalize_gemini_model_id;
use super::types::{GeminiConfig, GenerateContentResponse, GenerationConfig, SafetySetting};

/// Gemini client bound to a model and an optional safety policy
#[derive(Debug, Clone)]
pub struct GeminiClient {
    /// HTTP client for making requests
    http_client: HttpClient,
    /// Gemini configuration
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client with the given configuration
    pub fn new(config: GeminiConfig) -> Result<Self, LlmError> {
        let timeout = Duration::from_secs(config.timeout.unwrap_or(30));

        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                LlmError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self::with_http_client(config, http_client))
    }

    /// Create a new Gemini client with a custom HTTP client
    pub fn with_http_client(config: GeminiConfig, http_client: HttpClient) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Create a new Gemini client with an API key and defaults for everything else
    pub fn with_api_key(api_key: String) -> Result<Self, LlmError> {
        Self::new(GeminiConfig::new(api_key))
    }

    /// Set the model to use
    pub fn with_model(mut self, model: String) -> Self {
        self.config.model = model;
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.config.base_url = base_url;
        self
    }

    /// Set generation configuration
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.config.generation_config = Some(config);
        self
    }

    /// Set safety settings
    pub fn with_safety_settings(mut self, settings: Vec<SafetySetting>) -> Self {
        self.config.safety_settings = Some(settings);
        self
    }

    /// The active configuration
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Endpoint URL for the configured model
    fn generate_content_url(&self) -> String {
        let model = normalize_gemini_model_id(&self.config.model);
        crate::utils::url::join_url(
            &self.config.base_url,
            &format!("models/{model}:generateContent"),
        )
    }

    /// Execute a non-streaming generateContent call.
    ///
    /// Transport failures surface as `HttpError`, non-2xx responses as
    /// `ApiError` carrying the service message when the body is the standard
    /// Google error envelope.
    pub async fn generate_content(
        &self,
        messages: &[ChatMessage],
        tools: Option<&[Tool]>,
    ) -> Result<GenerateContentResponse, LlmError> {
        let body = convert::build_request_body(&self.config, messages, tools)?;
        let url = self.generate_content_url();
        let headers = build_gemini_headers(&self.config.api_key, &self.config.http_headers)?;

        tracing::debug!(
            model = %self.config.model,
            contents = body.contents.len(),
            "sending Gemini generateContent request"
        );

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "Gemini API returned an error response");
            return Err(parse_api_error(status.as_u16(), &error_body));
        }

        let response: GenerateContentResponse = response.json().await.map_err(|e| {
            LlmError::ParseError(format!("failed to decode generateContent response: {e}"))
        })?;

        tracing::debug!(
            candidates = response.candidates.len(),
            "received Gemini generateContent response"
        );

        Ok(response)
    }
}

/// Map a non-2xx response body to an `ApiError`.
///
/// Google error envelopes look like
/// `{"error": {"code": 400, "message": "...", "status": "INVALID_ARGUMENT"}}`;
/// anything else is carried verbatim as the message.
fn parse_api_error(code: u16, body: &str) -> LlmError {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => {
            let message = value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or(body)
                .to_string();
            LlmError::ApiError {
                code,
                message,
                details: Some(value),
            }
        }
        Err(_) => LlmError::api_error(code, body),
    }
}
