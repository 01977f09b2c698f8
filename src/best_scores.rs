//! Best score per game, persisted to ~/.arcade/best_scores.json.
//!
//! The file is a JSON object keyed by game id. Values are read leniently: a
//! number or a numeric string is taken as-is, anything else counts as 0.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::constants::BEST_SCORES_FILE;
use crate::games::GameKind;
use crate::utils::persistence::{arcade_dir, load_json_or_default, save_json};

/// In-memory best scores with an optional backing file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestScores {
    /// `None` keeps scores for this run only.
    path: Option<PathBuf>,
    scores: BTreeMap<String, u32>,
}

/// Lenient score parse: non-negative integers and numeric strings.
fn parse_score(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .map(|v| v.min(u32::MAX as u64) as u32),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl BestScores {
    /// Scores that are never written to disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load from ~/.arcade/. Fails only when the directory is unavailable.
    pub fn load() -> io::Result<Self> {
        Ok(Self::load_from(&arcade_dir()?))
    }

    /// Load `best_scores.json` from `dir`. A missing or malformed file is an
    /// empty table.
    pub fn load_from(dir: &Path) -> Self {
        let path = dir.join(BEST_SCORES_FILE);
        let raw: BTreeMap<String, Value> = load_json_or_default(&path);
        let scores = raw
            .iter()
            .filter_map(|(key, value)| parse_score(value).map(|score| (key.clone(), score)))
            .collect();
        debug!(path = %path.display(), "best scores loaded");
        Self {
            path: Some(path),
            scores,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Stored best for `kind`, 0 if none.
    pub fn get(&self, kind: GameKind) -> u32 {
        self.scores.get(kind.id()).copied().unwrap_or(0)
    }

    /// Keep `score` if it beats the stored best. Returns whether it did.
    ///
    /// The in-memory best is updated even when writing the file fails.
    pub fn record(&mut self, kind: GameKind, score: u32) -> io::Result<bool> {
        if score <= self.get(kind) {
            return Ok(false);
        }
        self.scores.insert(kind.id().to_string(), score);
        if let Some(path) = &self.path {
            if let Err(e) = save_json(path, &self.scores) {
                warn!(error = %e, path = %path.display(), "failed to save best scores");
                return Err(e);
            }
        }
        debug!(game = kind.id(), score, "new best score");
        Ok(true)
    }
}
