//! Anthropic Provider Implementation
//!
//! Sends the analysis instruction to the Messages API and returns the text of
//! the first content block.
//!
//! # Features
//!
//! - Async HTTP communication with the Messages API
//! - Configurable endpoint, model and sampling settings
//! - Retry logic with exponential backoff on rate limits and server errors
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use careerlens_llm::{AnthropicConfig, AnthropicProvider};
//!
//! let provider = AnthropicProvider::new(AnthropicConfig::default(), "sk-test").unwrap();
//! ```

use crate::LlmError;
use careerlens_domain::traits::LlmProvider as LlmProviderTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default Messages API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com";

/// Default model
pub const DEFAULT_MODEL: &str = "claude-3-opus-20240229";

/// API version header value
pub const API_VERSION: &str = "2023-06-01";

/// Environment variable holding the API key by default
pub const DEFAULT_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Settings for the Messages API provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnthropicConfig {
    /// Base URL of the API
    pub endpoint: String,
    /// Model identifier
    pub model: String,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// HTTP timeout per attempt (seconds)
    pub timeout_secs: u64,
    /// Attempts before giving up on retryable failures
    pub max_retries: u32,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 4000,
            temperature: 0.1,
            timeout_secs: 120,
            max_retries: 3,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

/// Messages API provider
pub struct AnthropicProvider {
    config: AnthropicConfig,
    api_key: String,
    client: reqwest::Client,
}

/// Request body for the Messages API
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response from the Messages API
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl MessagesResponse {
    fn into_text(self) -> Result<String, LlmError> {
        self.content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| LlmError::InvalidResponse("reply has no text content".to_string()))
    }
}

impl AnthropicProvider {
    /// Create a provider with an explicit API key
    pub fn new(config: AnthropicConfig, api_key: impl Into<String>) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Communication(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            api_key: api_key.into(),
            client,
        })
    }

    /// Create a provider reading the API key from `config.api_key_env`
    pub fn from_env(config: AnthropicConfig) -> Result<Self, LlmError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| LlmError::MissingApiKey(config.api_key_env.clone()))?;
        Self::new(config, api_key)
    }

    /// Set the maximum number of attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    /// Provider settings
    pub fn config(&self) -> &AnthropicConfig {
        &self.config
    }

    /// Send one instruction and return the reply text
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The endpoint is unreachable or keeps failing after all retries
    /// - The model is unknown
    /// - The reply body is not a Messages API response
    pub async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/v1/messages", self.config.endpoint.trim_end_matches('/'));

        let request_body = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            system,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.config.max_retries.max(1) {
            debug!("Messages API attempt {} to {}", attempts + 1, url);
            match self
                .client
                .post(&url)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", API_VERSION)
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response.json::<MessagesResponse>().await.map_err(|e| {
                            LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
                        })?;
                        return body.into_text();
                    } else if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.config.model.clone()));
                    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(LlmError::RateLimitExceeded);
                    } else {
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        let error =
                            LlmError::Communication(format!("HTTP {}: {}", status, error_text));
                        // Client errors will not improve with a retry
                        if status.is_client_error() {
                            return Err(error);
                        }
                        last_error = Some(error);
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.config.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                warn!("Oracle call failed, retrying in {:?}", delay);
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

impl LlmProviderTrait for AnthropicProvider {
    type Error = LlmError;

    /// Blocking wrapper; call it from a blocking thread, never from an async task
    fn generate(&self, system: &str, prompt: &str) -> Result<String, Self::Error> {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle.block_on(self.complete(system, prompt)),
            Err(_) => tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?
                .block_on(self.complete(system, prompt)),
        }
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
