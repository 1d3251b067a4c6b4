//! Shared reply fixtures for tests

use careerlens_domain::CandidateAnalysis;
use serde_json::{json, Map, Value};

/// A schema-complete candidate record as the oracle would emit it
pub(crate) fn candidate_json(name: &str) -> Value {
    json!({
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "careerScores": [
            {"career": "Software Development", "score": 8},
            {"career": "Data Science", "score": 7},
            {"career": "UI/UX Design", "score": 5}
        ],
        "careerFit": [
            {"name": "Software Development", "value": 60},
            {"name": "Data Science", "value": 30},
            {"name": "UI/UX Design", "value": 10}
        ],
        "skillAssessment": [
            {"skill": "Technical Aptitude", "value": 4},
            {"skill": "Creativity", "value": 3},
            {"skill": "Problem Solving", "value": 5}
        ],
        "strengths": [
            {"name": "Problem Solving", "value": 5},
            {"name": "Learning Speed", "value": 4}
        ],
        "development": [
            {"area": "Portfolio Development", "score": 2},
            {"area": "Networking", "score": 3}
        ],
        "careerReadiness": [
            {"category": "Technical Skills", "current": 3, "required": 4, "gap": 1},
            {"category": "Portfolio Projects", "current": 2, "required": 4, "gap": 2}
        ],
        "experience": "Beginner (just exploring)",
        "techTools": "GitHub, Python",
        "seekingRole": "Internship/Junior position",
        "quote": "I love turning ideas into working software",
        "recommendation": "Focus on shipping small full-stack projects"
    })
}

/// A reply document holding one record per name, keyed by name
pub(crate) fn reply_for(names: &[&str]) -> Value {
    let mut map = Map::new();
    for name in names {
        map.insert(name.to_string(), candidate_json(name));
    }
    Value::Object(map)
}

/// A normalized analysis built from [`candidate_json`]
pub(crate) fn candidate(name: &str) -> CandidateAnalysis {
    serde_json::from_value(candidate_json(name)).expect("fixture matches schema")
}
