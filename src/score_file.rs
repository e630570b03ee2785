//! Score persistence between sessions.
//!
//! A tiny JSON document (`{"score": .., "best": ..}`) next to the binary, or
//! wherever `TILE_MATCH_SCORE_FILE` points.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const DEFAULT_PATH: &str = "tile-match-score.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u32,
    #[serde(default)]
    pub best: u32,
}

impl ScoreRecord {
    /// Take a new running score, raising `best` when it is beaten.
    /// Returns true if anything changed.
    pub fn record(&mut self, score: u32) -> bool {
        let before = *self;
        self.score = score;
        self.best = self.best.max(score);
        *self != before
    }
}

#[derive(Debug, Clone)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        let path = std::env::var_os("TILE_MATCH_SCORE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the record. A missing file is a fresh start; a corrupt one is
    /// logged and replaced on the next save.
    pub fn load(&self) -> Result<ScoreRecord> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(ScoreRecord::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", self.path.display()));
            }
        };

        match serde_json::from_str(&text) {
            Ok(record) => Ok(record),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "ignoring unreadable score file");
                Ok(ScoreRecord::default())
            }
        }
    }

    pub fn save(&self, record: &ScoreRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json).with_context(|| format!("writing {}", self.path.display()))?;
        debug!(score = record.score, best = record.best, "score saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> ScoreFile {
        let path = std::env::temp_dir().join(format!("tile-match-{}-{name}.json", std::process::id()));
        let _ = fs::remove_file(&path);
        ScoreFile::new(path)
    }

    #[test]
    fn record_tracks_best() {
        let mut record = ScoreRecord::default();
        assert!(record.record(40));
        assert!(record.record(0));
        assert_eq!(record, ScoreRecord { score: 0, best: 40 });
        assert!(!record.record(0));
    }

    #[test]
    fn missing_file_loads_default() {
        let file = temp_file("missing");
        assert_eq!(file.load().unwrap(), ScoreRecord::default());
    }

    #[test]
    fn save_then_load() {
        let file = temp_file("saved");
        let record = ScoreRecord { score: 30, best: 90 };
        file.save(&record).unwrap();
        assert_eq!(file.load().unwrap(), record);
        let _ = fs::remove_file(file.path());
    }

    #[test]
    fn corrupt_file_loads_default() {
        let file = temp_file("corrupt");
        fs::write(file.path(), "not json").unwrap();
        assert_eq!(file.load().unwrap(), ScoreRecord::default());
        let _ = fs::remove_file(file.path());
    }
}
