//! CareerLens CLI - career survey analysis from the command line.

use careerlens_cli::commands;
use careerlens_cli::config::OutputFormat;
use careerlens_cli::repl;
use careerlens_cli::{open_session, Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Formatter may not exist yet if config loading fails
    let fallback = Formatter::new(OutputFormat::Table, !cli.no_color);
    if let Err(e) = run(cli).await {
        eprintln!("{}", fallback.failure(&e));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

async fn run(cli: Cli) -> careerlens_cli::Result<()> {
    // Load or create config
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!("Using default configuration: {}", e);
            let cfg = Config::default();
            cfg.save().ok();
            cfg
        }),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    let output = match cli.command {
        None | Some(Command::Repl) => {
            let mut session = open_session(&config, true)?;
            return repl::run_repl(&mut session, &config, &formatter).await;
        }
        Some(Command::Columns) => commands::execute_columns(&formatter)?,
        Some(Command::Prompt(args)) => {
            let session = open_session(&config, false)?;
            commands::execute_prompt(args, session.analyzer(), &formatter)?
        }
        Some(Command::Analyze(args)) => {
            let mut session = open_session(&config, !args.source.no_cache)?;
            commands::execute_analyze(args, &mut session, &formatter).await?
        }
        Some(Command::Export(args)) => {
            let mut session = open_session(&config, !args.source.no_cache)?;
            commands::execute_export(args, &mut session, &formatter).await?
        }
    };

    println!("{}", output);
    Ok(())
}
