//! Per-session state: the analyzer, the reply cache and the loaded batch.

use crate::cache::ReplyCache;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::ingest;
use crate::oracle::Oracle;
use careerlens_analyzer::{AnalysisMetadata, CareerAnalyzer};
use careerlens_domain::traits::LlmProvider;
use careerlens_domain::{AnalysisBatch, BatchEntry};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where a loaded batch came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOrigin {
    /// Fresh oracle call
    Oracle,
    /// Cached reply for identical input, normalized again
    Cache,
    /// Saved oracle reply replayed from a file
    Replay,
}

/// A survey file turned into a batch
#[derive(Debug, Clone)]
pub struct LoadedBatch {
    /// Survey file
    pub source: PathBuf,
    /// Cache key of the request built from the file
    pub key: String,
    /// Normalized analyses
    pub batch: AnalysisBatch,
    /// How the batch was obtained
    pub origin: BatchOrigin,
    /// Timing, model and extraction details of the run
    pub metadata: AnalysisMetadata,
}

/// One analysis session.
///
/// Holds at most one batch; loading a new file replaces it.
pub struct Session<L>
where
    L: LlmProvider,
{
    analyzer: CareerAnalyzer<L>,
    cache: ReplyCache,
    current: Option<LoadedBatch>,
}

impl<L> Session<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a session around an analyzer and a cache.
    pub fn new(analyzer: CareerAnalyzer<L>, cache: ReplyCache) -> Self {
        Self {
            analyzer,
            cache,
            current: None,
        }
    }

    /// The analyzer in use.
    pub fn analyzer(&self) -> &CareerAnalyzer<L> {
        &self.analyzer
    }

    /// Load a survey file, replacing any previous batch.
    ///
    /// With `reply` set, the saved oracle reply is normalized instead of
    /// calling the oracle; such replies are never cached. Cached replies are
    /// normalized under the current policy on every hit. On failure the
    /// previous batch is already gone.
    pub async fn load(&mut self, path: &Path, reply: Option<&Path>) -> Result<&LoadedBatch> {
        self.current = None;

        let rows = ingest::read_rows(path)?;
        let request = self.analyzer.build_request(&rows)?;
        let key = ReplyCache::key_for(&request, self.analyzer.model_name());

        let (outcome, origin) = if let Some(reply_path) = reply {
            let text = fs::read_to_string(reply_path)?;
            let outcome = self.analyzer.replay(request.row_count, &text)?;
            (outcome, BatchOrigin::Replay)
        } else if let Some(text) = self.cache.get(&key) {
            let outcome = self.analyzer.replay(request.row_count, &text)?;
            (outcome, BatchOrigin::Cache)
        } else {
            let outcome = self.analyzer.analyze(&rows).await?;
            self.cache.insert(key.clone(), outcome.reply.clone())?;
            (outcome, BatchOrigin::Oracle)
        };

        info!(
            "Loaded {} candidates from {} ({:?})",
            outcome.batch.len(),
            path.display(),
            origin
        );

        Ok(self.current.insert(LoadedBatch {
            source: path.to_path_buf(),
            key,
            batch: outcome.batch,
            origin,
            metadata: outcome.metadata,
        }))
    }

    /// The loaded batch, if any.
    pub fn current(&self) -> Option<&LoadedBatch> {
        self.current.as_ref()
    }

    /// Pick a candidate by key, or the first one when `key` is `None`.
    pub fn select(&self, key: Option<&str>) -> Result<&BatchEntry> {
        let loaded = self.current.as_ref().ok_or(CliError::NothingLoaded)?;
        select_entry(&loaded.batch, key)
    }
}

/// Open a session against the configured oracle.
pub fn open_session(config: &Config, use_disk_cache: bool) -> Result<Session<Oracle>> {
    let oracle = Oracle::from_config(&config.oracle);
    if !oracle.is_available() {
        info!("No oracle configured; only cached batches and saved replies can be loaded");
    }
    let analyzer = CareerAnalyzer::new(oracle, config.analysis.clone())?;
    let cache = match config.cache_dir()? {
        Some(dir) if use_disk_cache => ReplyCache::persistent(dir),
        _ => ReplyCache::in_memory(),
    };
    Ok(Session::new(analyzer, cache))
}

/// Pick a candidate by key, or the first one when `key` is `None`.
pub fn select_entry<'a>(batch: &'a AnalysisBatch, key: Option<&str>) -> Result<&'a BatchEntry> {
    match key {
        Some(key) => batch
            .iter()
            .find(|entry| entry.key == key)
            .ok_or_else(|| CliError::UnknownCandidate(key.to_string())),
        None => batch
            .first()
            .ok_or_else(|| CliError::InvalidInput("The batch has no candidates".to_string())),
    }
}
