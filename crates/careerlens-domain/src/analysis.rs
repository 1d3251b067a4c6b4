//! Candidate analysis - the normalized per-candidate record
//!
//! Field names on the wire are camelCase and match the instruction schema sent
//! to the oracle, so an exported record re-parses into an equal value.

use serde::{Deserialize, Serialize};

/// Lower bound of the skill rating scale
pub const SKILL_SCALE_MIN: f64 = 0.0;

/// Upper bound of the skill rating scale
pub const SKILL_SCALE_MAX: f64 = 5.0;

/// Compatibility score for one career path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerScore {
    /// Career path name
    pub career: String,
    /// Match score (higher is better)
    pub score: f64,
}

/// Share of one career path in the overall fit distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerFitShare {
    /// Career path name
    pub name: String,
    /// Proportion of the whole, intended to sum to about 100 across entries
    pub value: f64,
}

/// Rating of one skill on the 0-5 scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRating {
    /// Skill name
    pub skill: String,
    /// Rating in `[0, 5]`
    pub value: f64,
}

/// A key strength and its weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strength {
    /// Strength name
    pub name: String,
    /// Weight
    pub value: f64,
}

/// An area to develop and its current score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentArea {
    /// Area name
    pub area: String,
    /// Current score
    pub score: f64,
}

/// Readiness for one category: where the candidate is versus where they need to be
///
/// Invariant once normalized: `gap == required - current`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessGap {
    /// Category name (technical skills, portfolio projects, ...)
    pub category: String,
    /// Current level
    pub current: f64,
    /// Required level
    pub required: f64,
    /// Distance from current to required
    pub gap: f64,
}

impl ReadinessGap {
    /// The gap implied by the two levels
    pub fn expected_gap(&self) -> f64 {
        self.required - self.current
    }
}

/// The normalized analysis of one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateAnalysis {
    /// Candidate name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Career paths ordered by descending score
    pub career_scores: Vec<CareerScore>,
    /// Fit distribution over career paths
    pub career_fit: Vec<CareerFitShare>,
    /// Skill ratings
    pub skill_assessment: Vec<SkillRating>,
    /// Top strengths, already ranked
    pub strengths: Vec<Strength>,
    /// Development areas, already ranked
    pub development: Vec<DevelopmentArea>,
    /// Readiness per category
    pub career_readiness: Vec<ReadinessGap>,
    /// Optional summary label of the best-fitting careers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_career: Option<String>,
    /// Self-reported experience level
    pub experience: String,
    /// Tools and platforms used
    pub tech_tools: String,
    /// Role the candidate is looking for
    pub seeking_role: String,
    /// Personal statement
    pub quote: String,
    /// Personalized recommendation
    pub recommendation: String,
}

impl CandidateAnalysis {
    /// Wire names of every required field, in schema order
    pub const REQUIRED_FIELDS: [&'static str; 13] = [
        "name",
        "email",
        "careerScores",
        "careerFit",
        "skillAssessment",
        "strengths",
        "development",
        "careerReadiness",
        "experience",
        "techTools",
        "seekingRole",
        "quote",
        "recommendation",
    ];

    /// Highest-scoring career, if any were scored
    pub fn top_score(&self) -> Option<&CareerScore> {
        self.career_scores.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "careerScores": [{"career": "Data Science", "score": 9}],
            "careerFit": [{"name": "Data Science", "value": 100}],
            "skillAssessment": [{"skill": "Creativity", "value": 4}],
            "strengths": [{"name": "Problem Solving", "value": 5}],
            "development": [{"area": "Networking", "score": 2}],
            "careerReadiness": [{"category": "Certifications", "current": 1, "required": 3, "gap": 2}],
            "experience": "Beginner",
            "techTools": "Python",
            "seekingRole": "Internship",
            "quote": "I like patterns",
            "recommendation": "Start with statistics"
        }"#
    }

    #[test]
    fn test_deserialize_camel_case() {
        let analysis: CandidateAnalysis = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(analysis.name, "Ada Lovelace");
        assert_eq!(analysis.tech_tools, "Python");
        assert_eq!(analysis.seeking_role, "Internship");
        assert_eq!(analysis.career_readiness[0].gap, 2.0);
        assert!(analysis.top_career.is_none());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let analysis: CandidateAnalysis = serde_json::from_str(sample_json()).unwrap();
        let value = serde_json::to_value(&analysis).unwrap();
        let obj = value.as_object().unwrap();

        for field in CandidateAnalysis::REQUIRED_FIELDS {
            assert!(obj.contains_key(field), "missing {}", field);
        }
        // Absent optional label is not emitted
        assert!(!obj.contains_key("topCareer"));
    }

    #[test]
    fn test_top_score() {
        let analysis: CandidateAnalysis = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(analysis.top_score().unwrap().career, "Data Science");
    }

    #[test]
    fn test_expected_gap() {
        let gap = ReadinessGap {
            category: "Networking".to_string(),
            current: 3.0,
            required: 4.0,
            gap: 0.0,
        };
        assert_eq!(gap.expected_gap(), 1.0);
    }
}
