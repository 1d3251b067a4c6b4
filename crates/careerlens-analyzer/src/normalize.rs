//! Validate an extracted document and normalize it into an [`AnalysisBatch`]
//!
//! This is the batch's single trust boundary. Anything past it may index into
//! every field without checking.

use crate::config::NormalizationPolicy;
use crate::error::AnalyzerError;
use careerlens_domain::{AnalysisBatch, CandidateAnalysis, SKILL_SCALE_MAX, SKILL_SCALE_MIN};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

/// Candidate label used when the whole document is at fault
pub const BATCH_SCOPE: &str = "<batch>";

/// Parse and validate extracted reply text
///
/// Fails fast: the first candidate that violates the schema rejects the
/// whole batch.
pub fn normalize_document(
    text: &str,
    policy: &NormalizationPolicy,
) -> Result<AnalysisBatch, AnalyzerError> {
    let document: Value =
        serde_json::from_str(text).map_err(|e| AnalyzerError::MalformedResponse {
            text: text.to_string(),
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })?;

    let candidates = document.as_object().ok_or_else(|| {
        violation(
            BATCH_SCOPE,
            "<root>",
            format!(
                "expected an object keyed by candidate, found {}",
                json_kind(&document)
            ),
        )
    })?;

    if candidates.is_empty() {
        return Err(violation(BATCH_SCOPE, "<root>", "reply contains no candidates"));
    }

    let mut batch = AnalysisBatch::new();
    for (key, record) in candidates {
        let analysis = normalize_candidate(key, record, policy)?;
        batch.insert(key.clone(), analysis);
    }

    info!("Normalized {} candidate analyses", batch.len());
    Ok(batch)
}

/// Validate one candidate record
pub fn normalize_candidate(
    key: &str,
    record: &Value,
    policy: &NormalizationPolicy,
) -> Result<CandidateAnalysis, AnalyzerError> {
    let obj = record.as_object().ok_or_else(|| {
        violation(
            key,
            "<record>",
            format!("expected an object, found {}", json_kind(record)),
        )
    })?;

    // Presence before types, so an absent field is never reported as a type error
    if let Some(missing) = CandidateAnalysis::REQUIRED_FIELDS
        .iter()
        .find(|field| !obj.contains_key(**field))
    {
        return Err(violation(key, missing, "missing required field"));
    }

    let mut analysis = CandidateAnalysis {
        name: field(key, obj, "name")?,
        email: field(key, obj, "email")?,
        career_scores: field(key, obj, "careerScores")?,
        career_fit: field(key, obj, "careerFit")?,
        skill_assessment: field(key, obj, "skillAssessment")?,
        strengths: field(key, obj, "strengths")?,
        development: field(key, obj, "development")?,
        career_readiness: field(key, obj, "careerReadiness")?,
        top_career: optional_field(key, obj, "topCareer")?,
        experience: field(key, obj, "experience")?,
        tech_tools: field(key, obj, "techTools")?,
        seeking_role: field(key, obj, "seekingRole")?,
        quote: field(key, obj, "quote")?,
        recommendation: field(key, obj, "recommendation")?,
    };

    apply_policy(key, &mut analysis, policy);

    if analysis
        .career_scores
        .windows(2)
        .any(|pair| pair[0].score < pair[1].score)
    {
        warn!(
            "careerScores for '{}' are not in descending order; keeping oracle order",
            key
        );
    }

    Ok(analysis)
}

fn apply_policy(key: &str, analysis: &mut CandidateAnalysis, policy: &NormalizationPolicy) {
    if policy.recompute_readiness_gap {
        for entry in &mut analysis.career_readiness {
            let expected = entry.expected_gap();
            if entry.gap != expected {
                debug!(
                    "Repairing readiness gap for '{}' / '{}': {} -> {}",
                    key, entry.category, entry.gap, expected
                );
                entry.gap = expected;
            }
        }
    }

    if policy.clamp_skill_values {
        for rating in &mut analysis.skill_assessment {
            let clamped = rating.value.clamp(SKILL_SCALE_MIN, SKILL_SCALE_MAX);
            if rating.value != clamped {
                debug!(
                    "Clamping skill '{}' for '{}': {} -> {}",
                    rating.skill, key, rating.value, clamped
                );
                rating.value = clamped;
            }
        }
    }
}

fn field<T: DeserializeOwned>(
    key: &str,
    obj: &Map<String, Value>,
    name: &str,
) -> Result<T, AnalyzerError> {
    let value = obj
        .get(name)
        .ok_or_else(|| violation(key, name, "missing required field"))?;
    T::deserialize(value).map_err(|e| violation(key, name, e.to_string()))
}

fn optional_field<T: DeserializeOwned>(
    key: &str,
    obj: &Map<String, Value>,
    name: &str,
) -> Result<Option<T>, AnalyzerError> {
    match obj.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(|e| violation(key, name, e.to_string())),
    }
}

fn violation(candidate: &str, field: &str, reason: impl Into<String>) -> AnalyzerError {
    AnalyzerError::SchemaViolation {
        candidate: candidate.to_string(),
        field: field.to_string(),
        reason: reason.into(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{candidate_json, reply_for};
    use serde_json::json;

    fn policy() -> NormalizationPolicy {
        NormalizationPolicy::default()
    }

    #[test]
    fn test_valid_batch() {
        let text = reply_for(&["Ada Lovelace", "Alan Turing"]).to_string();
        let batch = normalize_document(&text, &policy()).unwrap();

        assert_eq!(batch.len(), 2);
        let keys: Vec<_> = batch.keys().collect();
        assert_eq!(keys, vec!["Ada Lovelace", "Alan Turing"]);
        assert_eq!(batch.get("Alan Turing").unwrap().email, "alan.turing@example.com");
    }

    #[test]
    fn test_malformed_keeps_text_and_position() {
        let text = "{\n  \"Ada\": {\"name\": }\n}";
        let err = normalize_document(text, &policy()).unwrap_err();
        match err {
            AnalyzerError::MalformedResponse {
                text: offending,
                line,
                column,
                ..
            } => {
                assert_eq!(offending, text);
                assert_eq!(line, 2);
                assert!(column > 0);
            }
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_prose_is_malformed() {
        let err = normalize_document("I could not analyze this file.", &policy()).unwrap_err();
        assert!(matches!(err, AnalyzerError::MalformedResponse { .. }));
    }

    #[test]
    fn test_missing_email_rejects_entire_batch() {
        let mut reply = reply_for(&["Ada", "Bob", "Cy"]);
        reply["Bob"].as_object_mut().unwrap().remove("email");

        let err = normalize_document(&reply.to_string(), &policy()).unwrap_err();
        match err {
            AnalyzerError::SchemaViolation {
                candidate, field, ..
            } => {
                assert_eq!(candidate, "Bob");
                assert_eq!(field, "email");
            }
            other => panic!("Expected SchemaViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_type_names_field() {
        let mut reply = reply_for(&["Ada"]);
        reply["Ada"]["careerScores"] = json!("Data Science");

        let err = normalize_document(&reply.to_string(), &policy()).unwrap_err();
        assert!(matches!(
            err,
            AnalyzerError::SchemaViolation { ref field, .. } if field == "careerScores"
        ));
    }

    #[test]
    fn test_null_required_field_is_a_violation() {
        let mut reply = reply_for(&["Ada"]);
        reply["Ada"]["quote"] = Value::Null;

        let err = normalize_document(&reply.to_string(), &policy()).unwrap_err();
        assert!(matches!(
            err,
            AnalyzerError::SchemaViolation { ref field, .. } if field == "quote"
        ));
    }

    #[test]
    fn test_root_must_be_object() {
        let err = normalize_document("[1, 2, 3]", &policy()).unwrap_err();
        match err {
            AnalyzerError::SchemaViolation {
                candidate, reason, ..
            } => {
                assert_eq!(candidate, BATCH_SCOPE);
                assert!(reason.contains("an array"));
            }
            other => panic!("Expected SchemaViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_object_is_rejected() {
        let err = normalize_document("{}", &policy()).unwrap_err();
        assert!(matches!(err, AnalyzerError::SchemaViolation { .. }));
    }

    #[test]
    fn test_record_must_be_object() {
        let err = normalize_document(r#"{"Ada": "great candidate"}"#, &policy()).unwrap_err();
        assert!(matches!(
            err,
            AnalyzerError::SchemaViolation { ref field, .. } if field == "<record>"
        ));
    }

    #[test]
    fn test_gap_is_recomputed() {
        let mut record = candidate_json("Ada");
        record["careerReadiness"] = json!([
            {"category": "Technical Skills", "current": 3, "required": 4, "gap": 0},
            {"category": "Networking", "current": 1, "required": 4, "gap": 7}
        ]);

        let analysis = normalize_candidate("Ada", &record, &policy()).unwrap();
        assert_eq!(analysis.career_readiness[0].gap, 1.0);
        assert_eq!(analysis.career_readiness[1].gap, 3.0);
    }

    #[test]
    fn test_trusting_policy_keeps_oracle_numbers() {
        let mut record = candidate_json("Ada");
        record["careerReadiness"][0]["gap"] = json!(9);
        record["skillAssessment"][0]["value"] = json!(7);

        let analysis =
            normalize_candidate("Ada", &record, &NormalizationPolicy::trusting()).unwrap();
        assert_eq!(analysis.career_readiness[0].gap, 9.0);
        assert_eq!(analysis.skill_assessment[0].value, 7.0);
    }

    #[test]
    fn test_skill_values_are_clamped() {
        let mut record = candidate_json("Ada");
        record["skillAssessment"] = json!([
            {"skill": "Creativity", "value": 6.5},
            {"skill": "Teamwork", "value": -1},
            {"skill": "Focus", "value": 3}
        ]);

        let analysis = normalize_candidate("Ada", &record, &policy()).unwrap();
        let values: Vec<f64> = analysis.skill_assessment.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![5.0, 0.0, 3.0]);
    }

    #[test]
    fn test_unsorted_scores_are_kept_in_order() {
        let mut record = candidate_json("Ada");
        record["careerScores"] = json!([
            {"career": "UI/UX Design", "score": 5},
            {"career": "Cybersecurity", "score": 8}
        ]);

        let analysis = normalize_candidate("Ada", &record, &policy()).unwrap();
        assert_eq!(analysis.career_scores[0].career, "UI/UX Design");
    }

    #[test]
    fn test_optional_top_career() {
        let mut record = candidate_json("Ada");
        record["topCareer"] = json!("Data Science / UI/UX Design");
        let analysis = normalize_candidate("Ada", &record, &policy()).unwrap();
        assert_eq!(
            analysis.top_career.as_deref(),
            Some("Data Science / UI/UX Design")
        );

        record["topCareer"] = Value::Null;
        let analysis = normalize_candidate("Ada", &record, &policy()).unwrap();
        assert!(analysis.top_career.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut record = candidate_json("Ada");
        record["favouriteColour"] = json!("teal");
        assert!(normalize_candidate("Ada", &record, &policy()).is_ok());
    }
}
