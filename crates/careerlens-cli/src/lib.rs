//! CareerLens CLI library.
//!
//! Shell around the analysis pipeline: survey ingest, the content-keyed batch
//! cache, the per-session state, output formatting and the interactive REPL.

pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod ingest;
pub mod oracle;
pub mod output;
pub mod repl;
pub mod session;

#[cfg(test)]
mod test_support;

pub use cache::ReplyCache;
pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use oracle::Oracle;
pub use output::Formatter;
pub use session::{open_session, Session};
