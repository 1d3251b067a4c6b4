//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use careerlens_analyzer::AnalyzerConfig;
use careerlens_llm::AnthropicConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".careerlens";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Oracle connection
    #[serde(default)]
    pub oracle: AnthropicConfig,

    /// Analysis pipeline
    #[serde(default)]
    pub analysis: AnalyzerConfig,

    /// Batch cache
    #[serde(default)]
    pub cache: CacheSettings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Text dashboard with tables
    Table,
    /// JSON format
    Json,
}

/// Batch cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Persist batches between runs
    #[serde(default)]
    pub enabled: bool,

    /// Cache directory; defaults to `~/.careerlens/cache`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(home_dir()?.join(CONFIG_DIR).join("config.toml"))
    }

    /// Load configuration from the default path or create default.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a specific file; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.analysis.validate().map_err(CliError::Config)?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Directory for persisted batches, or `None` when caching is disabled.
    pub fn cache_dir(&self) -> Result<Option<PathBuf>> {
        if !self.cache.enabled {
            return Ok(None);
        }
        match &self.cache.dir {
            Some(dir) => Ok(Some(dir.clone())),
            None => Ok(Some(home_dir()?.join(CONFIG_DIR).join("cache"))),
        }
    }

    /// REPL history file.
    pub fn history_path() -> Result<PathBuf> {
        Ok(home_dir()?.join(CONFIG_DIR).join("history.txt"))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: None,
        }
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.oracle.model, "claude-3-opus-20240229");
        assert_eq!(config.oracle.max_tokens, 4000);
        assert!(!config.cache.enabled);
        assert_eq!(config.cache_dir().unwrap(), None);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.analysis.max_rows, AnalyzerConfig::default().max_rows);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.format = OutputFormat::Json;
        config.oracle.temperature = 0.5;
        config.analysis.normalization.clamp_skill_values = false;
        config.cache.enabled = true;
        config.cache.dir = Some(dir.path().join("cache"));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.settings.format, OutputFormat::Json);
        assert_eq!(loaded.oracle.temperature, 0.5);
        assert!(!loaded.analysis.normalization.clamp_skill_values);
        assert_eq!(loaded.cache_dir().unwrap(), Some(dir.path().join("cache")));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\ncolor = false\n\n[cache]\ndir = \"/tmp/careerlens\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.settings.color);
        assert_eq!(config.oracle, AnthropicConfig::default());
        assert_eq!(config.cache_dir().unwrap(), None);
    }

    #[test]
    fn test_invalid_analysis_section_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[analysis]\noracle_timeout_secs = 0\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(CliError::Config(_))));
    }
}
