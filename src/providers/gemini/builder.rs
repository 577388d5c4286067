//! Gemini-specific builder for configuring Gemini clients.

use std::time::Duration;

use crate::error::LlmError;

use super::client::GeminiClient;
use super::types::{GeminiConfig, GenerationConfig, SafetySetting};

/// Fluent construction path for `GeminiClient`.
///
/// # Example
/// ```rust,no_run
/// use vertex_gemini::GeminiBuilder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiBuilder::new()
///     .api_key("your-api-key")
///     .model("gemini-1.5-flash")
///     .temperature(0.7)
///     .max_tokens(8192)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeminiBuilder {
    /// Gemini API key
    api_key: Option<String>,
    /// Base URL for Gemini API
    base_url: Option<String>,
    /// Model to use
    model: Option<String>,
    /// Temperature setting
    temperature: Option<f32>,
    /// Maximum output tokens
    max_tokens: Option<i32>,
    /// Top-p setting
    top_p: Option<f32>,
    /// Top-k setting
    top_k: Option<i32>,
    /// Stop sequences
    stop_sequences: Option<Vec<String>>,
    /// Candidate count
    candidate_count: Option<i32>,
    /// Safety settings
    safety_settings: Option<Vec<SafetySetting>>,
    /// HTTP timeout
    timeout: Option<Duration>,
}

impl GeminiBuilder {
    /// Create a new Gemini builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key
    pub fn api_key<S: Into<String>>(mut self, key: S) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the base URL
    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the model to use
    pub fn model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature (0.0 to 2.0)
    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Set the maximum number of output tokens
    pub fn max_tokens(mut self, tokens: i32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    /// Set the top-p value
    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Set the top-k value
    pub fn top_k(mut self, top_k: i32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Set stop sequences
    pub fn stop_sequences(mut self, sequences: Vec<String>) -> Self {
        self.stop_sequences = Some(sequences);
        self
    }

    /// Set the candidate count
    pub fn candidate_count(mut self, count: i32) -> Self {
        self.candidate_count = Some(count);
        self
    }

    /// Set safety settings
    pub fn safety_settings(mut self, settings: Vec<SafetySetting>) -> Self {
        self.safety_settings = Some(settings);
        self
    }

    /// Set the HTTP timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the Gemini client
    pub fn build(self) -> Result<GeminiClient, LlmError> {
        let api_key = self
            .api_key
            .ok_or_else(|| LlmError::ConfigurationError("API key is required".to_string()))?;

        let mut config = GeminiConfig::new(api_key);
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(model) = self.model {
            config = config.with_model(model);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout.as_secs());
        }
        if let Some(settings) = self.safety_settings {
            config = config.with_safety_settings(settings);
        }

        let has_generation_params = self.temperature.is_some()
            || self.max_tokens.is_some()
            || self.top_p.is_some()
            || self.top_k.is_some()
            || self.stop_sequences.is_some()
            || self.candidate_count.is_some();
        if has_generation_params {
            let mut generation_config = GenerationConfig::new();
            if let Some(temperature) = self.temperature {
                generation_config = generation_config.with_temperature(temperature);
            }
            if let Some(max_tokens) = self.max_tokens {
                generation_config = generation_config.with_max_output_tokens(max_tokens);
            }
            if let Some(top_p) = self.top_p {
                generation_config = generation_config.with_top_p(top_p);
            }
            if let Some(top_k) = self.top_k {
                generation_config = generation_config.with_top_k(top_k);
            }
            if let Some(sequences) = self.stop_sequences {
                generation_config = generation_config.with_stop_sequences(sequences);
            }
            if let Some(count) = self.candidate_count {
                generation_config = generation_config.with_candidate_count(count);
            }
            config = config.with_generation_config(generation_config);
        }

        GeminiClient::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_an_api_key() {
        let err = GeminiBuilder::new().model("gemini-1.5-pro").build().unwrap_err();
        assert!(matches!(err, LlmError::ConfigurationError(_)));
    }

    #[test]
    fn build_collects_generation_parameters() {
        let client = GeminiBuilder::new()
            .api_key("key")
            .model("gemini-1.5-pro")
            .temperature(0.2)
            .max_tokens(512)
            .build()
            .unwrap();

        let config = client.config();
        assert_eq!(config.model, "gemini-1.5-pro");
        let generation_config = config.generation_config.as_ref().expect("generation config");
        assert_eq!(generation_config.temperature, Some(0.2));
        assert_eq!(generation_config.max_output_tokens, Some(512));
    }

    #[test]
    fn build_without_generation_parameters_leaves_config_empty() {
        let client = GeminiBuilder::new().api_key("key").build().unwrap();
        assert!(client.config().generation_config.is_none());
    }
}
