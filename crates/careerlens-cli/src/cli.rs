//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CareerLens - Turn career-interest survey responses into candidate dashboards.
#[derive(Debug, Parser)]
#[command(name = "careerlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(long, global = true, env = "CAREERLENS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Text dashboard (default)
    Table,
    /// JSON format
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a survey file and show a candidate dashboard
    Analyze(AnalyzeArgs),

    /// Write one candidate's analysis as a standalone JSON file
    Export(ExportArgs),

    /// Print the oracle instruction for a survey file without sending it
    Prompt(PromptArgs),

    /// Show the recommended survey columns
    Columns,

    /// Enter interactive REPL mode
    Repl,
}

/// Where the batch for a survey file comes from.
#[derive(Debug, Clone, Parser)]
pub struct SourceArgs {
    /// Survey file (.csv or .json)
    pub file: PathBuf,

    /// Normalize a saved oracle reply instead of calling the oracle
    #[arg(long)]
    pub reply_file: Option<PathBuf>,

    /// Skip the on-disk batch cache
    #[arg(long)]
    pub no_cache: bool,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Candidate to show (defaults to the first one)
    #[arg(short, long)]
    pub candidate: Option<String>,

    /// List candidates instead of showing a dashboard
    #[arg(short, long)]
    pub list: bool,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Candidate to export (defaults to the first one)
    #[arg(short, long)]
    pub candidate: Option<String>,

    /// Directory to write into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

/// Arguments for the prompt command.
#[derive(Debug, Parser)]
pub struct PromptArgs {
    /// Survey file (.csv or .json)
    pub file: PathBuf,
}
