//! Result types for analysis runs

use crate::extract::ExtractionSource;
use careerlens_domain::AnalysisBatch;

/// Result of one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// The normalized batch
    pub batch: AnalysisBatch,

    /// The oracle reply the batch was normalized from
    pub reply: String,

    /// Metadata about the run
    pub metadata: AnalysisMetadata,
}

/// Metadata about an analysis run
#[derive(Debug, Clone)]
pub struct AnalysisMetadata {
    /// Rows sent to the oracle
    pub row_count: usize,

    /// Candidates in the normalized batch
    pub candidate_count: usize,

    /// Name of the model that answered
    pub model_name: String,

    /// Rule that recovered the document from the reply
    pub extraction_source: ExtractionSource,

    /// Length of the raw reply in characters
    pub reply_chars: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
