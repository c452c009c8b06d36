//! Configuration for OpenAiChatProvider.

use std::env;

use travel_core::{ChatError, DEFAULT_MODEL};

const DEFAULT_API_URL: &str = "https://api.openai.com";

/// Configuration for OpenAiChatProvider.
#[derive(Debug, Clone)]
pub struct OpenAiBrainConfig {
    /// API base URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Model used when a request does not name one.
    pub model: String,

    /// Maximum tokens for a completion.
    pub max_tokens: Option<u32>,
}

impl Default for OpenAiBrainConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: None,
        }
    }
}

impl OpenAiBrainConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `OPENAI_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `OPENAI_API_URL` - API URL (default: https://api.openai.com)
    /// - `OPENAI_MODEL` - Model name (default: gpt-4o)
    /// - `OPENAI_MAX_TOKENS` - Max completion tokens (default: unset)
    pub fn from_env() -> Result<Self, ChatError> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| ChatError::Configuration("OPENAI_API_KEY not set".to_string()))?;

        let api_url = env::var("OPENAI_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let max_tokens = env::var("OPENAI_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok());

        Ok(Self {
            api_url,
            api_key,
            model,
            max_tokens,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> OpenAiBrainConfigBuilder {
        OpenAiBrainConfigBuilder::default()
    }
}

/// Builder for OpenAiBrainConfig.
#[derive(Debug, Default)]
pub struct OpenAiBrainConfigBuilder {
    config: OpenAiBrainConfig,
}

impl OpenAiBrainConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the default model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = Some(tokens);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> OpenAiBrainConfig {
        self.config
    }
}
