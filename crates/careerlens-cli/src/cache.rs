//! Content-keyed cache of raw oracle replies.
//!
//! Identical uploads produce the same request text and therefore the same key,
//! so re-opening a survey never pays for a second oracle call. Only the reply
//! text is kept; every hit goes back through extraction and normalization.

use crate::error::Result;
use careerlens_analyzer::AnalysisRequest;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Oracle replies keyed by a SHA-256 digest of the request and model.
#[derive(Debug, Default)]
pub struct ReplyCache {
    entries: HashMap<String, String>,
    dir: Option<PathBuf>,
}

impl ReplyCache {
    /// Cache that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Cache that also writes each reply to `<dir>/<key>.txt`.
    pub fn persistent(dir: impl Into<PathBuf>) -> Self {
        Self {
            entries: HashMap::new(),
            dir: Some(dir.into()),
        }
    }

    /// Key for a request sent to `model`.
    ///
    /// Covers the system prompt, the instruction with its embedded records,
    /// and the model name.
    pub fn key_for(request: &AnalysisRequest, model: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(request.system.as_bytes());
        hasher.update([0u8]);
        hasher.update(request.prompt.as_bytes());
        hasher.update([0u8]);
        hasher.update(model.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Look up a reply, falling back to disk.
    ///
    /// An unreadable file on disk counts as a miss.
    pub fn get(&mut self, key: &str) -> Option<String> {
        if let Some(reply) = self.entries.get(key) {
            debug!("Reply cache hit (memory): {}", short(key));
            return Some(reply.clone());
        }

        let path = self.file_for(key)?;
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(reply) => {
                debug!("Reply cache hit (disk): {}", short(key));
                self.entries.insert(key.to_string(), reply.clone());
                Some(reply)
            }
            Err(e) => {
                warn!("Ignoring unreadable cache file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Store a reply.
    pub fn insert(&mut self, key: impl Into<String>, reply: impl Into<String>) -> Result<()> {
        let key = key.into();
        let reply = reply.into();
        if let Some(path) = self.file_for(&key) {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, &reply)?;
            debug!("Persisted reply to {}", path.display());
        }
        self.entries.insert(key, reply);
        Ok(())
    }

    /// Number of replies held in memory.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is held in memory.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File backing `key`, when the cache is persistent.
    pub fn file_for(&self, key: &str) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(format!("{}.txt", key)))
    }
}

fn short(key: &str) -> &str {
    key.get(..12).unwrap_or(key)
}
