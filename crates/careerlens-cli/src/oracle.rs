//! Oracle handle owned by the shell.

use careerlens_domain::traits::LlmProvider;
use careerlens_llm::{AnthropicConfig, AnthropicProvider, LlmError};
use tracing::debug;

/// The configured oracle, or the reason none is available.
///
/// Building the handle never fails on a missing API key; the error surfaces
/// only when a command actually needs to call out, so replayed replies and dry
/// runs keep working offline.
pub enum Oracle {
    /// Messages API client
    Anthropic(AnthropicProvider),
    /// No client could be built
    Unavailable {
        /// Model that would have answered
        model: String,
        /// Why the client is missing
        reason: LlmError,
    },
}

impl Oracle {
    /// Build the oracle from configuration and the environment.
    pub fn from_config(config: &AnthropicConfig) -> Self {
        match AnthropicProvider::from_env(config.clone()) {
            Ok(provider) => Oracle::Anthropic(provider),
            Err(reason) => {
                debug!("Oracle unavailable: {}", reason);
                Oracle::Unavailable {
                    model: config.model.clone(),
                    reason,
                }
            }
        }
    }

    /// Check if a live client is configured.
    pub fn is_available(&self) -> bool {
        matches!(self, Oracle::Anthropic(_))
    }
}

impl LlmProvider for Oracle {
    type Error = LlmError;

    fn generate(&self, system: &str, prompt: &str) -> Result<String, Self::Error> {
        match self {
            Oracle::Anthropic(provider) => provider.generate(system, prompt),
            Oracle::Unavailable { reason, .. } => Err(match reason {
                LlmError::MissingApiKey(var) => LlmError::MissingApiKey(var.clone()),
                other => LlmError::Other(other.to_string()),
            }),
        }
    }

    fn model_name(&self) -> &str {
        match self {
            Oracle::Anthropic(provider) => provider.model_name(),
            Oracle::Unavailable { model, .. } => model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_defers_error() {
        let config = AnthropicConfig {
            api_key_env: "CAREERLENS_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..AnthropicConfig::default()
        };
        let oracle = Oracle::from_config(&config);

        assert!(!oracle.is_available());
        assert_eq!(oracle.model_name(), config.model);
        match oracle.generate("sys", "prompt") {
            Err(LlmError::MissingApiKey(var)) => {
                assert_eq!(var, "CAREERLENS_TEST_KEY_THAT_IS_NEVER_SET")
            }
            other => panic!("Expected MissingApiKey, got {:?}", other),
        }
    }
}
