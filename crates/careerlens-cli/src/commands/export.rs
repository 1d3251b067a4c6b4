//! Export command implementation.

use crate::cli::ExportArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;
use careerlens_analyzer::{export_candidate, export_file_name};
use careerlens_domain::traits::LlmProvider;
use careerlens_domain::CandidateAnalysis;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Execute the export command.
pub async fn execute_export<L>(
    args: ExportArgs,
    session: &mut Session<L>,
    formatter: &Formatter,
) -> Result<String>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    session
        .load(&args.source.file, args.source.reply_file.as_deref())
        .await?;
    let entry = session.select(args.candidate.as_deref())?;
    let path = write_export(&entry.key, &entry.analysis, &args.output)?;
    Ok(formatter.success(&format!("Exported {} to {}", entry.key, path.display())))
}

/// Write the record stored under `key` into `dir`, returning the file path.
pub fn write_export(key: &str, analysis: &CandidateAnalysis, dir: &Path) -> Result<PathBuf> {
    let document = export_candidate(analysis)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(key));
    fs::write(&path, document)?;
    info!("Wrote {}", path.display());
    Ok(path)
}
