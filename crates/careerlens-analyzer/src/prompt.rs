//! Request builder: survey rows in, oracle instruction out

use crate::error::AnalyzerError;
use careerlens_domain::CandidateRow;

/// System instruction sent with every analysis request
pub const SYSTEM_PROMPT: &str = "You are a career analytics expert who specializes in analyzing tech career test responses. You return data in JSON format only, with no explanation text.";

/// A fully assembled request for one batch
///
/// Stateless and built fresh per batch.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    /// System instruction
    pub system: String,
    /// Rows serialized as a JSON array of objects, every field verbatim
    pub records: String,
    /// User instruction embedding the records and the target schema
    pub prompt: String,
    /// Number of rows in the request
    pub row_count: usize,
}

/// Builds the instruction the oracle receives for a batch of rows
pub struct PromptBuilder<'a> {
    rows: &'a [CandidateRow],
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(rows: &'a [CandidateRow]) -> Self {
        Self { rows }
    }

    /// Serialize the rows as a record list
    ///
    /// Column names and cell values pass through untouched; no column is
    /// renamed, filtered or reordered.
    pub fn records(&self) -> Result<String, AnalyzerError> {
        serde_json::to_string(self.rows)
            .map_err(|e| AnalyzerError::Config(format!("Failed to serialize rows: {}", e)))
    }

    /// Build the complete analysis request
    pub fn build(&self) -> Result<AnalysisRequest, AnalyzerError> {
        if self.rows.is_empty() {
            return Err(AnalyzerError::EmptyInput);
        }

        let records = self.records()?;
        let mut prompt = String::new();

        // 1. Role and the six analysis facets
        prompt.push_str(ANALYSIS_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. The rows to analyze
        prompt.push_str("The data is in JSON format:\n");
        prompt.push_str(&records);
        prompt.push_str("\n\n");

        // 3. The exact output schema
        prompt.push_str(OUTPUT_SCHEMA);
        prompt.push_str("\n\n");

        // 4. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        Ok(AnalysisRequest {
            system: SYSTEM_PROMPT.to_string(),
            records,
            prompt,
            row_count: self.rows.len(),
        })
    }
}

const ANALYSIS_INSTRUCTIONS: &str = r#"You are a tech career analytics expert. Please analyze these career test responses and provide detailed career path recommendations for each candidate.

For each candidate, identify:
1. Top 3 recommended tech career paths with percentage match scores
2. Skills assessment (technical aptitude, creativity, problem solving, team collaboration, independent work, learning speed, experience level) on a scale of 1-5
3. Key strengths (top 5)
4. Development areas (top 5)
5. Career readiness assessment (current level, required level, and gap for: technical skills, portfolio projects, industry knowledge, certifications, networking)
6. Personalized career recommendation and next steps

Column names vary between questionnaires; map whatever fields are present onto the structure below."#;

const OUTPUT_SCHEMA: &str = r#"Return your analysis as a JSON object with this structure:
{
  "candidate_name": {
    "name": "Candidate Name",
    "email": "email@example.com",
    "careerScores": [
      { "career": "Career Path Name", "score": 8 },
      { "career": "Another Career", "score": 7 }
    ],
    "careerFit": [
      { "name": "Career Path Name", "value": 60 },
      { "name": "Another Career", "value": 30 },
      { "name": "Third Career", "value": 10 }
    ],
    "skillAssessment": [
      { "skill": "Technical Aptitude", "value": 4 },
      { "skill": "Creativity", "value": 3 }
    ],
    "strengths": [
      { "name": "Problem Solving", "value": 5 },
      { "name": "Learning Speed", "value": 4 }
    ],
    "development": [
      { "area": "Portfolio Development", "score": 2 },
      { "area": "Technical Skills", "score": 3 }
    ],
    "careerReadiness": [
      { "category": "Technical Skills", "current": 3, "required": 4, "gap": 1 },
      { "category": "Portfolio Projects", "current": 2, "required": 4, "gap": 2 }
    ],
    "topCareer": "Software Development / Data Analysis / UI/UX Design",
    "experience": "Beginner (just exploring)",
    "techTools": "GitHub, Python",
    "seekingRole": "Internship/Junior position",
    "quote": "Personal statement from the candidate",
    "recommendation": "Personalized career recommendation"
  }
}

Rules:
- careerScores sorted by descending score, at least one entry
- careerFit values are shares of 100
- skillAssessment values between 0 and 5
- gap equals required minus current"#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Ensure all values and scoring are based on the candidate's responses, especially their interests, experience, and strengths.

Remember: Return ONLY valid JSON, no explanations."#;

#[cfg(test)]
mod tests {
    use super::*;
    use careerlens_domain::CellValue;

    fn rows() -> Vec<CandidateRow> {
        vec![
            CandidateRow::new()
                .with("Full Name", "Ada Lovelace")
                .with("Email Address", "ada@example.com")
                .with("What tech areas are you interested in?", "Data, AI"),
            CandidateRow::new()
                .with("Full Name", "Alan Turing")
                .with("Years coding", 12i64)
                .with("Certifications", CellValue::Empty),
        ]
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = PromptBuilder::new(&[]).build();
        assert!(matches!(result, Err(AnalyzerError::EmptyInput)));
    }

    #[test]
    fn test_prompt_includes_records() {
        let rows = rows();
        let request = PromptBuilder::new(&rows).build().unwrap();
        assert_eq!(request.row_count, 2);
        assert!(request.prompt.contains(&request.records));
        assert!(request.prompt.contains("What tech areas are you interested in?"));
        assert!(request.prompt.contains("Alan Turing"));
    }

    #[test]
    fn test_records_are_verbatim() {
        let rows = rows();
        let request = PromptBuilder::new(&rows).build().unwrap();
        let parsed: Vec<CandidateRow> = serde_json::from_str(&request.records).unwrap();
        assert_eq!(parsed, rows);
    }

    #[test]
    fn test_prompt_names_every_schema_field() {
        let rows = rows();
        let request = PromptBuilder::new(&rows).build().unwrap();
        for field in careerlens_domain::CandidateAnalysis::REQUIRED_FIELDS {
            assert!(
                request.prompt.contains(&format!("\"{}\"", field)),
                "schema missing {}",
                field
            );
        }
    }

    #[test]
    fn test_prompt_includes_instructions() {
        let rows = rows();
        let request = PromptBuilder::new(&rows).build().unwrap();
        assert!(request.prompt.contains("Top 3 recommended tech career paths"));
        assert!(request.prompt.contains("Career readiness assessment"));
        assert!(request.prompt.contains("Return ONLY valid JSON"));
        assert_eq!(request.system, SYSTEM_PROMPT);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn row_strategy() -> impl Strategy<Value = CandidateRow> {
            prop::collection::vec(("[A-Za-z ?/]{1,24}", "[ -~]{0,16}"), 1..6).prop_map(|cells| {
                let mut row = CandidateRow::new();
                for (column, value) in cells {
                    row.insert(column, CellValue::infer(&value));
                }
                row
            })
        }

        proptest! {
            #[test]
            fn every_field_of_every_row_is_serialized(rows in prop::collection::vec(row_strategy(), 1..8)) {
                let request = PromptBuilder::new(&rows).build().unwrap();
                let parsed: Vec<serde_json::Map<String, serde_json::Value>> =
                    serde_json::from_str(&request.records).unwrap();

                prop_assert_eq!(parsed.len(), rows.len());
                for (row, record) in rows.iter().zip(parsed.iter()) {
                    for column in row.columns() {
                        prop_assert_eq!(record.get(column), row.get(column));
                    }
                    prop_assert_eq!(record.len(), row.len());
                }
            }
        }
    }
}
