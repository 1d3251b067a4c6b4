//! Core Analyzer implementation

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::extract::extract_document;
use crate::normalize::normalize_document;
use crate::prompt::{AnalysisRequest, PromptBuilder};
use crate::types::{AnalysisMetadata, AnalysisOutcome};
use careerlens_domain::traits::LlmProvider;
use careerlens_domain::{AnalysisBatch, CandidateRow};
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, info};

/// Runs survey rows through the oracle and normalizes the reply into a batch
///
/// The provider is an explicit handle owned by whoever builds the analyzer;
/// there is no process-wide client.
pub struct CareerAnalyzer<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    config: AnalyzerConfig,
}

impl<L> CareerAnalyzer<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new Analyzer
    pub fn new(llm_provider: L, config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        config.validate().map_err(AnalyzerError::Config)?;
        Ok(Self {
            llm_provider: Arc::new(llm_provider),
            config,
        })
    }

    /// Analyzer settings
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Model behind the provider
    pub fn model_name(&self) -> &str {
        self.llm_provider.model_name()
    }

    /// Build the oracle request for a batch of rows without sending it
    pub fn build_request(&self, rows: &[CandidateRow]) -> Result<AnalysisRequest, AnalyzerError> {
        if rows.len() > self.config.max_rows {
            return Err(AnalyzerError::TooManyRows(rows.len(), self.config.max_rows));
        }
        PromptBuilder::new(rows).build()
    }

    /// Analyze a batch of rows end to end
    ///
    /// Normalization starts only after the oracle call has fully returned.
    pub async fn analyze(&self, rows: &[CandidateRow]) -> Result<AnalysisOutcome, AnalyzerError> {
        let start_time = Instant::now();
        let request = self.build_request(rows)?;

        info!(
            "Starting analysis of {} rows with model '{}'",
            request.row_count,
            self.llm_provider.model_name()
        );
        debug!("Prompt length: {} chars", request.prompt.len());

        let reply = timeout(self.config.oracle_timeout(), self.call_llm(&request))
            .await
            .map_err(|_| AnalyzerError::Timeout)??;

        debug!("Oracle reply length: {} chars", reply.len());

        let outcome = self.outcome(request.row_count, reply, start_time)?;

        info!(
            "Analysis complete: {} candidates in {} ms",
            outcome.metadata.candidate_count, outcome.metadata.processing_time_ms
        );

        Ok(outcome)
    }

    /// Normalize a reply kept from an earlier oracle call for `row_count` rows
    ///
    /// The reply goes through extraction and normalization under the current
    /// policy, exactly like a fresh one.
    pub fn replay(&self, row_count: usize, reply: &str) -> Result<AnalysisOutcome, AnalyzerError> {
        self.outcome(row_count, reply.to_string(), Instant::now())
    }

    /// Extract and normalize a reply obtained elsewhere, e.g. a saved one
    pub fn analyze_reply(&self, reply: &str) -> Result<AnalysisBatch, AnalyzerError> {
        self.normalize_reply(reply).map(|(batch, _)| batch)
    }

    fn outcome(
        &self,
        row_count: usize,
        reply: String,
        start_time: Instant,
    ) -> Result<AnalysisOutcome, AnalyzerError> {
        let (batch, source) = self.normalize_reply(&reply)?;
        let metadata = AnalysisMetadata {
            row_count,
            candidate_count: batch.len(),
            model_name: self.llm_provider.model_name().to_string(),
            extraction_source: source,
            reply_chars: reply.chars().count(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };
        Ok(AnalysisOutcome {
            batch,
            reply,
            metadata,
        })
    }

    fn normalize_reply(
        &self,
        reply: &str,
    ) -> Result<(AnalysisBatch, crate::extract::ExtractionSource), AnalyzerError> {
        let document = extract_document(reply);
        debug!(
            "Extracted {} chars via {}",
            document.text.len(),
            document.source.as_str()
        );
        let batch = normalize_document(&document.text, &self.config.normalization)?;
        Ok((batch, document.source))
    }

    /// Call the LLM provider
    async fn call_llm(&self, request: &AnalysisRequest) -> Result<String, AnalyzerError> {
        let llm = Arc::clone(&self.llm_provider);
        let system = request.system.clone();
        let prompt = request.prompt.clone();

        // Call in a blocking context since LlmProvider is not async
        tokio::task::spawn_blocking(move || {
            llm.generate(&system, &prompt)
                .map_err(|e| AnalyzerError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| AnalyzerError::Llm(format!("Task join error: {}", e)))?
    }
}
