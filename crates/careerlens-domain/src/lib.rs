//! CareerLens Domain Layer
//!
//! This crate contains the data model shared by every other CareerLens crate and
//! the trait boundary towards the analysis oracle. It performs no I/O.
//!
//! ## Key Concepts
//!
//! - **Candidate row**: one survey respondent with free-form, non-normalized columns
//! - **Candidate analysis**: the normalized per-candidate record produced from the oracle reply
//! - **Batch**: every analysis derived from one uploaded file, in emission order
//! - **Oracle**: the external text generator, reached through [`traits::LlmProvider`]
//!
//! ## Architecture
//!
//! - Pure data types only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod batch;
pub mod row;
pub mod traits;

// Re-exports for convenience
pub use analysis::{
    CandidateAnalysis, CareerFitShare, CareerScore, DevelopmentArea, ReadinessGap, SkillRating,
    Strength, SKILL_SCALE_MAX, SKILL_SCALE_MIN,
};
pub use batch::{AnalysisBatch, BatchEntry};
pub use row::{CandidateRow, CellValue};
