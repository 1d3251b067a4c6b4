//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::commands::{self, write_export};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use careerlens_analyzer::compose_entry_views;
use careerlens_domain::traits::LlmProvider;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub async fn run_repl<L>(
    session: &mut Session<L>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    println!(
        "{}",
        formatter.info("CareerLens REPL - Type 'help' for commands, 'exit' to quit")
    );
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    let history_path = Config::history_path()?;
    if let Some(parent) = history_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let _ = editor.load_history(&history_path);

    loop {
        let prompt = match session.current() {
            Some(loaded) => format!("careerlens [{} candidates]> ", loaded.batch.len()),
            None => "careerlens> ".to_string(),
        };

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => match execute_repl_command(cmd, session, formatter).await {
                        Ok(output) => println!("{}", output),
                        Err(e) => eprintln!("{}", formatter.failure(&e)),
                    },
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq)]
enum ReplCommand {
    Exit,
    Help,
    Load {
        file: PathBuf,
        reply: Option<PathBuf>,
    },
    List,
    Show(Option<String>),
    Export {
        candidate: Option<String>,
        dir: PathBuf,
    },
    Columns,
}

/// Parse a REPL command line.
///
/// Candidate names may contain spaces, so `show` and `export` take the rest
/// of the line as the name.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0] {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "load" => parse_load_command(&parts[1..]),
        "list" | "ls" => Ok(ReplCommand::List),
        "show" => Ok(ReplCommand::Show(rest_as_name(&parts[1..]))),
        "export" => parse_export_command(&parts[1..]),
        "columns" => Ok(ReplCommand::Columns),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

/// Execute a REPL command.
async fn execute_repl_command<L>(
    cmd: ReplCommand,
    session: &mut Session<L>,
    formatter: &Formatter,
) -> Result<String>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    match cmd {
        ReplCommand::Load { file, reply } => {
            let loaded = session.load(&file, reply.as_deref()).await?;
            Ok(formatter.success(&formatter.load_summary(loaded)))
        }
        ReplCommand::List => {
            let loaded = session.current().ok_or(CliError::NothingLoaded)?;
            formatter.format_candidates(&loaded.batch)
        }
        ReplCommand::Show(candidate) => {
            let entry = session.select(candidate.as_deref())?;
            formatter.format_dashboard(&compose_entry_views(entry)?)
        }
        ReplCommand::Export { candidate, dir } => {
            let entry = session.select(candidate.as_deref())?;
            let path = write_export(&entry.key, &entry.analysis, &dir)?;
            Ok(formatter.success(&format!("Exported {} to {}", entry.key, path.display())))
        }
        ReplCommand::Columns => commands::execute_columns(formatter),
        ReplCommand::Exit | ReplCommand::Help => Ok(String::new()),
    }
}

// load <file> [--reply <file>]
fn parse_load_command(args: &[&str]) -> Result<ReplCommand> {
    match args {
        [file] => Ok(ReplCommand::Load {
            file: PathBuf::from(file),
            reply: None,
        }),
        [file, "--reply", reply] => Ok(ReplCommand::Load {
            file: PathBuf::from(file),
            reply: Some(PathBuf::from(reply)),
        }),
        _ => Err(CliError::InvalidInput(
            "Usage: load <file> [--reply <saved reply>]".to_string(),
        )),
    }
}

// export [--to <dir>] [candidate name]
fn parse_export_command(args: &[&str]) -> Result<ReplCommand> {
    match args {
        ["--to"] => Err(CliError::InvalidInput(
            "Usage: export [--to <dir>] [candidate]".to_string(),
        )),
        ["--to", dir, rest @ ..] => Ok(ReplCommand::Export {
            candidate: rest_as_name(rest),
            dir: PathBuf::from(dir),
        }),
        rest => Ok(ReplCommand::Export {
            candidate: rest_as_name(rest),
            dir: PathBuf::from("."),
        }),
    }
}

fn rest_as_name(args: &[&str]) -> Option<String> {
    if args.is_empty() {
        None
    } else {
        Some(args.join(" "))
    }
}

fn editor_error(err: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        format!("Failed to initialize editor: {}", err),
    ))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  load <file> [--reply <file>]   - Analyze a survey (.csv or .json)");
    println!("  list, ls                       - List candidates in the loaded batch");
    println!("  show [candidate]               - Show a dashboard (default: first)");
    println!("  export [--to <dir>] [candidate] - Write a candidate's JSON file");
    println!("  columns                        - Recommended survey columns");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}
