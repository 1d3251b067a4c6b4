//! Batch module - every analysis derived from one uploaded file

use crate::CandidateAnalysis;
use serde::{Deserialize, Serialize};

/// One keyed entry of a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Candidate key as emitted by the oracle (usually the name)
    pub key: String,
    /// Normalized analysis
    pub analysis: CandidateAnalysis,
}

/// Normalized analyses keyed by candidate, in the oracle's emission order
///
/// A batch only exists once every entry passed validation; there is no
/// partially-built batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisBatch {
    entries: Vec<BatchEntry>,
}

impl AnalysisBatch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, replacing the analysis of an existing key in place
    pub fn insert(&mut self, key: impl Into<String>, analysis: CandidateAnalysis) {
        let key = key.into();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.analysis = analysis,
            None => self.entries.push(BatchEntry { key, analysis }),
        }
    }

    /// Look up a candidate by key
    pub fn get(&self, key: &str) -> Option<&CandidateAnalysis> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.analysis)
    }

    /// Candidate keys in emission order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Iterate entries in emission order
    pub fn iter(&self) -> impl Iterator<Item = &BatchEntry> {
        self.entries.iter()
    }

    /// First entry, the default selection of a presentation
    pub fn first(&self) -> Option<&BatchEntry> {
        self.entries.first()
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the batch has no candidates
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for AnalysisBatch {
    type Item = BatchEntry;
    type IntoIter = std::vec::IntoIter<BatchEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
