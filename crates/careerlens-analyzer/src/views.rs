//! Dashboard view composition
//!
//! Turns one normalized [`CandidateAnalysis`] into the chart-ready series the
//! presentation renders. Pure and deterministic: the input is never mutated and
//! category order is always the oracle's order.

use crate::error::AnalyzerError;
use crate::guidance::next_steps;
use careerlens_domain::{
    BatchEntry, CandidateAnalysis, CareerFitShare, CareerScore, DevelopmentArea, SkillRating, Strength,
    SKILL_SCALE_MAX, SKILL_SCALE_MIN,
};
use serde::Serialize;

/// Maximum entries in the compatibility bar chart
pub const COMPATIBILITY_BAR_LIMIT: usize = 5;

/// Free-text profile fields shown in the header card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCard {
    /// Candidate name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Experience level
    pub experience: String,
    /// Tools and platforms
    pub tech_tools: String,
    /// Target role
    pub seeking_role: String,
    /// Personal statement
    pub quote: String,
    /// Personalized recommendation
    pub recommendation: String,
}

/// Skills polygon over a fixed radial domain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsPolygon {
    /// One axis per skill, in input order
    pub axes: Vec<SkillRating>,
    /// Radial domain `(min, max)`
    pub domain: (f64, f64),
}

/// Aligned series for the readiness chart
///
/// Index `i` of every series belongs to `categories[i]`. Stacking `gap` on top
/// of `current` reaches the `required` marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessComposite {
    /// Category labels
    pub categories: Vec<String>,
    /// Current level bars
    pub current: Vec<f64>,
    /// Gap segments stacked on the current bars
    pub gap: Vec<f64>,
    /// Required level markers
    pub required: Vec<f64>,
}

impl ReadinessComposite {
    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// True when there are no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Every derived view for one candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewBundle {
    /// Header card
    pub profile: ProfileCard,
    /// Top-career metric
    pub top_career: CareerScore,
    /// Proportion view of career fit
    pub career_fit: Vec<CareerFitShare>,
    /// Skills radar
    pub skills: SkillsPolygon,
    /// Compatibility bars, at most five
    pub compatibility: Vec<CareerScore>,
    /// Strength bars
    pub strengths: Vec<Strength>,
    /// Development bars
    pub development: Vec<DevelopmentArea>,
    /// Readiness chart
    pub readiness: ReadinessComposite,
    /// Next-step checklist
    pub next_steps: Vec<String>,
}

/// Compose the dashboard views for one candidate
///
/// # Errors
///
/// `InsufficientData` when `careerScores` is empty, since the top-career
/// metric and the next-step checklist both hang off its first entry. The
/// error names the candidate by its `name` field; use
/// [`compose_entry_views`] to name it by batch key instead.
pub fn compose_views(analysis: &CandidateAnalysis) -> Result<ViewBundle, AnalyzerError> {
    let top_career = analysis
        .top_score()
        .cloned()
        .ok_or_else(|| AnalyzerError::InsufficientData {
            candidate: analysis.name.clone(),
            field: "careerScores",
        })?;

    let readiness = ReadinessComposite {
        categories: analysis
            .career_readiness
            .iter()
            .map(|r| r.category.clone())
            .collect(),
        current: analysis.career_readiness.iter().map(|r| r.current).collect(),
        gap: analysis.career_readiness.iter().map(|r| r.gap).collect(),
        required: analysis.career_readiness.iter().map(|r| r.required).collect(),
    };

    Ok(ViewBundle {
        profile: ProfileCard {
            name: analysis.name.clone(),
            email: analysis.email.clone(),
            experience: analysis.experience.clone(),
            tech_tools: analysis.tech_tools.clone(),
            seeking_role: analysis.seeking_role.clone(),
            quote: analysis.quote.clone(),
            recommendation: analysis.recommendation.clone(),
        },
        next_steps: next_steps(&top_career.career),
        top_career,
        career_fit: analysis.career_fit.clone(),
        skills: SkillsPolygon {
            axes: analysis.skill_assessment.clone(),
            domain: (SKILL_SCALE_MIN, SKILL_SCALE_MAX),
        },
        compatibility: analysis
            .career_scores
            .iter()
            .take(COMPATIBILITY_BAR_LIMIT)
            .cloned()
            .collect(),
        strengths: analysis.strengths.clone(),
        development: analysis.development.clone(),
        readiness,
    })
}

/// Compose the views for a batch entry
///
/// Same as [`compose_views`], but errors name the candidate by its batch key,
/// which is unique where display names may not be.
pub fn compose_entry_views(entry: &BatchEntry) -> Result<ViewBundle, AnalyzerError> {
    compose_views(&entry.analysis).map_err(|err| match err {
        AnalyzerError::InsufficientData { field, .. } => AnalyzerError::InsufficientData {
            candidate: entry.key.clone(),
            field,
        },
        other => other,
    })
}
