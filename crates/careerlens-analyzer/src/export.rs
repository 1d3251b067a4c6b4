//! Standalone JSON export of one candidate

use crate::error::AnalyzerError;
use careerlens_domain::CandidateAnalysis;

/// Suffix of every exported file name
pub const EXPORT_SUFFIX: &str = "_career_analysis.json";

/// Serialize one record as a pretty-printed JSON document
///
/// Field names and structure match the normalized record exactly, so
/// [`parse_export`] yields an equal value.
pub fn export_candidate(analysis: &CandidateAnalysis) -> Result<String, AnalyzerError> {
    serde_json::to_string_pretty(analysis).map_err(|e| AnalyzerError::Export(e.to_string()))
}

/// Re-read an exported document
pub fn parse_export(document: &str) -> Result<CandidateAnalysis, AnalyzerError> {
    serde_json::from_str(document).map_err(|e| AnalyzerError::MalformedResponse {
        text: document.to_string(),
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })
}

/// File name for the record stored under `key`, e.g. `Ada_Lovelace_career_analysis.json`
///
/// Batch keys are unique, so two candidates that share a display name still
/// get distinct files. Whitespace and path separators become underscores so
/// the name always stays inside the target directory.
pub fn export_file_name(key: &str) -> String {
    let stem: String = key
        .trim()
        .chars()
        .map(|c| {
            if c.is_whitespace() || matches!(c, '/' | '\\' | ':') {
                '_'
            } else {
                c
            }
        })
        .collect();
    let stem = if stem.is_empty() || stem.chars().all(|c| c == '.') {
        "candidate".to_string()
    } else {
        stem
    };
    format!("{}{}", stem, EXPORT_SUFFIX)
}
