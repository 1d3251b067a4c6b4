//! Prompt command implementation.

use crate::cli::PromptArgs;
use crate::error::Result;
use crate::ingest;
use crate::output::Formatter;
use careerlens_analyzer::CareerAnalyzer;
use careerlens_domain::traits::LlmProvider;

/// Execute the prompt command: build the request, never send it.
pub fn execute_prompt<L>(
    args: PromptArgs,
    analyzer: &CareerAnalyzer<L>,
    formatter: &Formatter,
) -> Result<String>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let rows = ingest::read_rows(&args.file)?;
    let request = analyzer.build_request(&rows)?;
    formatter.format_request(&request)
}
