//! Survey and reply fixtures for shell tests

use careerlens_domain::CandidateAnalysis;
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};

pub(crate) fn candidate_json(name: &str) -> Value {
    json!({
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "careerScores": [
            {"career": "Data Science", "score": 9},
            {"career": "Software Development", "score": 6},
            {"career": "Cybersecurity", "score": 4}
        ],
        "careerFit": [
            {"name": "Data Science", "value": 50},
            {"name": "Software Development", "value": 35},
            {"name": "Cybersecurity", "value": 15}
        ],
        "skillAssessment": [
            {"skill": "Analytical Thinking", "value": 5},
            {"skill": "Communication", "value": 3}
        ],
        "strengths": [
            {"name": "Statistics", "value": 5}
        ],
        "development": [
            {"area": "Cloud Platforms", "score": 2}
        ],
        "careerReadiness": [
            {"category": "Technical Skills", "current": 3, "required": 4, "gap": 1}
        ],
        "experience": "Some coursework",
        "techTools": "Python, Jupyter",
        "seekingRole": "Junior data analyst",
        "quote": "Numbers tell stories",
        "recommendation": "Build a public Kaggle portfolio"
    })
}

pub(crate) fn reply_for(names: &[&str]) -> Value {
    let mut map = Map::new();
    for name in names {
        map.insert(name.to_string(), candidate_json(name));
    }
    Value::Object(map)
}

pub(crate) fn candidate(name: &str) -> CandidateAnalysis {
    serde_json::from_value(candidate_json(name)).expect("fixture matches schema")
}

/// Write a two-column survey CSV with one row per name
pub(crate) fn write_survey(dir: &Path, names: &[&str]) -> PathBuf {
    let path = dir.join("survey.csv");
    let mut contents = String::from("Full Name,What tech areas are you interested in?\n");
    for name in names {
        contents.push_str(&format!("{},\"AI, data\"\n", name));
    }
    std::fs::write(&path, contents).expect("write survey fixture");
    path
}
