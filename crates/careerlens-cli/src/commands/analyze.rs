//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;
use careerlens_analyzer::compose_entry_views;
use careerlens_domain::traits::LlmProvider;

/// Execute the analyze command.
pub async fn execute_analyze<L>(
    args: AnalyzeArgs,
    session: &mut Session<L>,
    formatter: &Formatter,
) -> Result<String>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let loaded = session
        .load(&args.source.file, args.source.reply_file.as_deref())
        .await?;
    eprintln!("{}", formatter.info(&formatter.load_summary(loaded)));

    if args.list {
        return formatter.format_candidates(&loaded.batch);
    }

    let entry = session.select(args.candidate.as_deref())?;
    let views = compose_entry_views(entry)?;
    formatter.format_dashboard(&views)
}
