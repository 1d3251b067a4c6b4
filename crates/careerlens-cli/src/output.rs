//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::session::{BatchOrigin, LoadedBatch};
use careerlens_analyzer::{AnalysisRequest, ViewBundle, RESOURCE_GROUPS};
use careerlens_domain::AnalysisBatch;
use colored::*;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const BAR_WIDTH: usize = 20;
const BAR_FILLED: &str = "█";
const BAR_GAP: &str = "░";

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Render one candidate's dashboard.
    pub fn format_dashboard(&self, views: &ViewBundle) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(views)?),
            OutputFormat::Table => Ok(self.format_dashboard_text(views)),
        }
    }

    /// List the candidates of a batch.
    pub fn format_candidates(&self, batch: &AnalysisBatch) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<_> = batch
                    .iter()
                    .map(|entry| {
                        json!({
                            "key": entry.key,
                            "name": entry.analysis.name,
                            "email": entry.analysis.email,
                            "topCareer": entry.analysis.top_score().map(|s| &s.career),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Table => {
                if batch.is_empty() {
                    return Ok(self.colorize("No candidates found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Key", "Name", "Email", "Top Career"]);
                for entry in batch.iter() {
                    let top = entry
                        .analysis
                        .top_score()
                        .map(|s| format!("{} ({})", s.career, s.score))
                        .unwrap_or_else(|| "-".to_string());
                    builder.push_record([
                        entry.key.as_str(),
                        entry.analysis.name.as_str(),
                        entry.analysis.email.as_str(),
                        top.as_str(),
                    ]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Show the instruction that would be sent to the oracle.
    pub fn format_request(&self, request: &AnalysisRequest) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "system": request.system,
                "prompt": request.prompt,
                "rowCount": request.row_count,
            }))?),
            OutputFormat::Table => Ok(format!(
                "{}\n{}\n\n{}\n{}",
                self.heading("System"),
                request.system,
                self.heading(&format!("Instruction ({} rows)", request.row_count)),
                request.prompt
            )),
        }
    }

    /// List recommended questionnaire columns.
    pub fn format_columns(&self, columns: &[&str]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(columns)?),
            OutputFormat::Table => {
                let mut out = self.heading("Recommended survey columns");
                for column in columns {
                    out.push_str(&format!("\n  - {}", column));
                }
                out.push_str("\n\nColumns may be named differently; every column is sent as-is.");
                Ok(out)
            }
        }
    }

    /// One line on how a batch was loaded: origin, time, model and extraction rule.
    pub fn load_summary(&self, loaded: &LoadedBatch) -> String {
        let origin = match loaded.origin {
            BatchOrigin::Oracle => "analyzed",
            BatchOrigin::Cache => "from cache",
            BatchOrigin::Replay => "from saved reply",
        };
        let metadata = &loaded.metadata;
        format!(
            "Loaded {} candidate(s) from {} ({} in {:.2}s, model {}, extraction: {})",
            loaded.batch.len(),
            loaded.source.display(),
            origin,
            metadata.processing_time_ms as f64 / 1000.0,
            metadata.model_name,
            metadata.extraction_source.as_str()
        )
    }

    /// Describe a failure, with the raw oracle text when there is one.
    pub fn failure(&self, err: &CliError) -> String {
        let mut out = self.error(&err.to_string());
        if let Some(text) = err.offending_text() {
            out.push('\n');
            out.push_str(&self.colorize("Raw oracle reply:", "yellow"));
            out.push('\n');
            out.push_str(text);
        }
        out
    }

    fn format_dashboard_text(&self, views: &ViewBundle) -> String {
        let profile = &views.profile;
        let mut sections = Vec::new();

        sections.push(self.heading(&format!("Career Analysis: {}", profile.name)));

        let mut card = Builder::default();
        card.push_record(["Email", profile.email.as_str()]);
        card.push_record(["Experience", profile.experience.as_str()]);
        card.push_record(["Tech Tools", profile.tech_tools.as_str()]);
        card.push_record(["Seeking", profile.seeking_role.as_str()]);
        sections.push(self.table(card));

        sections.push(format!(
            "Top Career Match: {} ({})",
            self.colorize(&views.top_career.career, "green"),
            views.top_career.score
        ));
        if !profile.quote.is_empty() {
            sections.push(format!("\"{}\"", profile.quote));
        }

        let fit_total: f64 = views.career_fit.iter().map(|f| f.value.max(0.0)).sum();
        let mut fit = Builder::default();
        fit.push_record(["Career", "Share", ""]);
        for share in &views.career_fit {
            let percent = if fit_total > 0.0 {
                share.value.max(0.0) / fit_total * 100.0
            } else {
                0.0
            };
            fit.push_record([
                share.name.clone(),
                format!("{:.0}%", percent),
                bar(percent, 100.0),
            ]);
        }
        sections.push(self.section("Career Fit", fit));

        let (_, skill_max) = views.skills.domain;
        let mut skills = Builder::default();
        skills.push_record(["Skill", "Rating", ""]);
        for axis in &views.skills.axes {
            skills.push_record([
                axis.skill.clone(),
                format!("{}/{}", axis.value, skill_max),
                bar(axis.value, skill_max),
            ]);
        }
        sections.push(self.section("Skills Assessment", skills));

        let compat_max = views
            .compatibility
            .iter()
            .map(|c| c.score)
            .fold(0.0_f64, f64::max);
        let mut compat = Builder::default();
        compat.push_record(["Career", "Score", ""]);
        for score in &views.compatibility {
            compat.push_record([
                score.career.clone(),
                score.score.to_string(),
                bar(score.score, compat_max),
            ]);
        }
        sections.push(self.section("Career Compatibility", compat));

        let mut strengths = Builder::default();
        strengths.push_record(["Strength", "Level", ""]);
        for strength in &views.strengths {
            strengths.push_record([
                strength.name.clone(),
                strength.value.to_string(),
                bar(strength.value, skill_max),
            ]);
        }
        sections.push(self.section("Top Strengths", strengths));

        let mut development = Builder::default();
        development.push_record(["Area", "Score", ""]);
        for area in &views.development {
            development.push_record([
                area.area.clone(),
                area.score.to_string(),
                bar(area.score, skill_max),
            ]);
        }
        sections.push(self.section("Development Areas", development));

        let readiness = &views.readiness;
        let mut ready = Builder::default();
        ready.push_record(["Category", "Current", "Gap", "Required", ""]);
        for i in 0..readiness.len() {
            ready.push_record([
                readiness.categories[i].clone(),
                readiness.current[i].to_string(),
                readiness.gap[i].to_string(),
                readiness.required[i].to_string(),
                readiness_bar(readiness.current[i], readiness.gap[i], skill_max),
            ]);
        }
        sections.push(self.section("Career Readiness", ready));

        sections.push(format!(
            "{}\n{}",
            self.heading("Recommendation"),
            profile.recommendation
        ));

        let mut steps = self.heading("Next Steps");
        for step in &views.next_steps {
            steps.push_str(&format!("\n  - {}", step));
        }
        sections.push(steps);

        let mut resources =
            self.heading(&format!("Resources for {}", views.top_career.career));
        for group in RESOURCE_GROUPS {
            resources.push_str(&format!("\n  {}", group.title));
            for (name, description) in group.items {
                resources.push_str(&format!("\n    - {}: {}", name, description));
            }
        }
        sections.push(resources);

        sections.join("\n\n")
    }

    fn section(&self, title: &str, builder: Builder) -> String {
        format!("{}\n{}", self.heading(title), self.table(builder))
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn heading(&self, title: &str) -> String {
        if self.color_enabled {
            title.cyan().bold().to_string()
        } else {
            title.to_string()
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Horizontal bar for `value` on a `0..=max` scale.
fn bar(value: f64, max: f64) -> String {
    BAR_FILLED.repeat(cells(value, max))
}

/// Current level filled, remaining gap shaded.
fn readiness_bar(current: f64, gap: f64, max: f64) -> String {
    let filled = cells(current, max);
    let total = cells(current + gap.max(0.0), max).max(filled);
    format!("{}{}", BAR_FILLED.repeat(filled), BAR_GAP.repeat(total - filled))
}

fn cells(value: f64, max: f64) -> usize {
    if max <= 0.0 || !value.is_finite() {
        return 0;
    }
    let ratio = (value / max).clamp(0.0, 1.0);
    (ratio * BAR_WIDTH as f64).round() as usize
}
