//! Configuration for the Analyzer

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Repairs applied at the trust boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationPolicy {
    /// Recompute `gap = required - current` for every readiness entry
    pub recompute_readiness_gap: bool,

    /// Clamp skill ratings into `[0, 5]`
    pub clamp_skill_values: bool,
}

impl Default for NormalizationPolicy {
    fn default() -> Self {
        Self {
            recompute_readiness_gap: true,
            clamp_skill_values: true,
        }
    }
}

impl NormalizationPolicy {
    /// Trust the oracle's numbers as-is
    pub fn trusting() -> Self {
        Self {
            recompute_readiness_gap: false,
            clamp_skill_values: false,
        }
    }
}

/// Configuration for the Analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum time for a single oracle call (seconds)
    pub oracle_timeout_secs: u64,

    /// Maximum number of rows sent in one batch
    pub max_rows: usize,

    /// Normalization repairs
    pub normalization: NormalizationPolicy,
}

impl AnalyzerConfig {
    /// Get the oracle timeout as a Duration
    pub fn oracle_timeout(&self) -> Duration {
        Duration::from_secs(self.oracle_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.oracle_timeout_secs == 0 {
            return Err("oracle_timeout_secs must be greater than 0".to_string());
        }
        if self.max_rows == 0 {
            return Err("max_rows must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            oracle_timeout_secs: 300,
            max_rows: 200,
            normalization: NormalizationPolicy::default(),
        }
    }
}
