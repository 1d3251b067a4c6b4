//! CareerLens Analyzer
//!
//! Turns tabular career-interest survey responses into per-candidate dashboard
//! data by way of an external analysis oracle.
//!
//! # Architecture
//!
//! ```text
//! Rows → PromptBuilder → LLM → extract_document → normalize_document → AnalysisBatch → compose_views
//! ```
//!
//! - **Request building**: every input column is preserved verbatim; the
//!   instruction carries the exact output schema
//! - **Extraction**: pure text slicing of fenced replies, kept apart from parsing
//! - **Normalization**: the single trust boundary; fail-fast on any schema violation
//! - **View composition**: pure, deterministic chart series per candidate
//!
//! # Example Usage
//!
//! ```no_run
//! use careerlens_analyzer::{AnalyzerConfig, CareerAnalyzer, compose_entry_views};
//! use careerlens_domain::CandidateRow;
//! use careerlens_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = CareerAnalyzer::new(MockProvider::new("{}"), AnalyzerConfig::default())?;
//! let rows = vec![CandidateRow::new().with("Name", "Ada")];
//!
//! let outcome = analyzer.analyze(&rows).await?;
//! for entry in outcome.batch.iter() {
//!     let views = compose_entry_views(entry)?;
//!     println!("{}: {}", entry.key, views.top_career.career);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod export;
mod extract;
mod guidance;
mod normalize;
mod prompt;
mod types;
mod views;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod tests;

pub use analyzer::CareerAnalyzer;
pub use config::{AnalyzerConfig, NormalizationPolicy};
pub use error::AnalyzerError;
pub use export::{export_candidate, export_file_name, parse_export, EXPORT_SUFFIX};
pub use extract::{extract_document, ExtractedDocument, ExtractionSource};
pub use guidance::{next_steps, ResourceGroup, RESOURCE_GROUPS};
pub use normalize::{normalize_candidate, normalize_document, BATCH_SCOPE};
pub use prompt::{AnalysisRequest, PromptBuilder, SYSTEM_PROMPT};
pub use types::{AnalysisMetadata, AnalysisOutcome};
pub use views::{
    compose_entry_views, compose_views, ProfileCard, ReadinessComposite, SkillsPolygon, ViewBundle,
    COMPATIBILITY_BAR_LIMIT,
};
