//! Error types for the Analyzer

use thiserror::Error;

/// Errors that can occur while turning survey rows into dashboard views
///
/// Every variant is fatal to the current batch: a batch is either fully
/// normalized or rejected.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// No candidate rows were supplied
    #[error("No candidate rows to analyze")]
    EmptyInput,

    /// More rows than one oracle call is allowed to carry
    #[error("Too many rows: {0} (max: {1})")]
    TooManyRows(usize, usize),

    /// The extracted reply text is not valid JSON
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// The extracted text that failed to parse, kept for the operator
        text: String,
        /// 1-based line reported by the parser
        line: usize,
        /// 1-based column reported by the parser
        column: usize,
        /// Parser message, position included
        message: String,
    },

    /// Valid JSON that does not match the candidate schema
    #[error("Schema violation for candidate '{candidate}', field '{field}': {reason}")]
    SchemaViolation {
        /// Candidate key (or `<batch>` for the top-level document)
        candidate: String,
        /// Offending field name
        field: String,
        /// What was wrong with it
        reason: String,
    },

    /// A list needed to compose a view is empty
    #[error("Insufficient data for candidate '{candidate}': '{field}' is empty")]
    InsufficientData {
        /// Candidate name
        candidate: String,
        /// Empty field
        field: &'static str,
    },

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Oracle call timeout
    #[error("Oracle call timed out")]
    Timeout,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Export serialization error
    #[error("Export error: {0}")]
    Export(String),
}

impl AnalyzerError {
    /// The raw payload behind a response failure, if this error carries one
    pub fn offending_text(&self) -> Option<&str> {
        match self {
            AnalyzerError::MalformedResponse { text, .. } => Some(text),
            _ => None,
        }
    }
}
