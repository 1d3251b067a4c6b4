//! Error types for the CLI application.

use careerlens_analyzer::AnalyzerError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Survey file could not be read
    #[error("Could not read survey file: {0:#}")]
    Ingest(#[from] anyhow::Error),

    /// Analysis pipeline error
    #[error(transparent)]
    Analysis(#[from] AnalyzerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Candidate key not present in the loaded batch
    #[error("No candidate named '{0}' in the loaded batch")]
    UnknownCandidate(String),

    /// No batch loaded in the session
    #[error("No survey loaded. Use 'load <file>' first.")]
    NothingLoaded,
}

impl CliError {
    /// Raw oracle text behind a malformed-response failure
    pub fn offending_text(&self) -> Option<&str> {
        match self {
            CliError::Analysis(err) => err.offending_text(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_error_shows_context_chain() {
        let err: CliError = anyhow::anyhow!("bad header")
            .context("reading survey.csv")
            .into();
        assert_eq!(
            err.to_string(),
            "Could not read survey file: reading survey.csv: bad header"
        );
    }

    #[test]
    fn test_offending_text_passes_through() {
        let err = CliError::Analysis(AnalyzerError::MalformedResponse {
            text: "nope".to_string(),
            line: 1,
            column: 1,
            message: "expected value".to_string(),
        });
        assert_eq!(err.offending_text(), Some("nope"));
        assert_eq!(CliError::NothingLoaded.offending_text(), None);
    }
}
