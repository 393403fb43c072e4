//! JSON persistence for the high-score record in ~/.flappy/.

use crate::config::DATA_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl From<PersistenceError> for io::Error {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::Other, other),
        }
    }
}

/// The persisted record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    #[serde(default)]
    pub high_score: u32,
}

/// Get the ~/.flappy/ directory path, creating it if needed.
pub fn flappy_dir() -> Result<PathBuf, PersistenceError> {
    let home_dir = dirs::home_dir().ok_or(PersistenceError::NoHomeDir)?;
    let dir = home_dir.join(".flappy");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Reads and writes the high-score file. Every write replaces the whole file.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Store at the default location, ~/.flappy/flappy_bird_data.json.
    pub fn new() -> Result<Self, PersistenceError> {
        Ok(Self::at(flappy_dir()?.join(DATA_FILE_NAME)))
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the record.
    ///
    /// A missing file yields the default record, which is written immediately.
    /// A malformed file yields the default record and is left untouched until
    /// the next high score overwrites it.
    pub fn load_or_init(&self) -> Result<HighScoreRecord, PersistenceError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let record = HighScoreRecord::default();
                self.save(&record)?;
                info!(path = %self.path.display(), "created high score file");
                return Ok(record);
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&json) {
            Ok(record) => Ok(record),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed high score file, starting from 0");
                Ok(HighScoreRecord::default())
            }
        }
    }

    /// Save the record as pretty-printed JSON.
    pub fn save(&self, record: &HighScoreRecord) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn temp_store() -> HighScoreStore {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "flappy_persistence_test_{}_{}",
            std::process::id(),
            id
        ));
        fs::create_dir_all(&dir).expect("create temp dir");
        HighScoreStore::at(dir.join(DATA_FILE_NAME))
    }

    fn cleanup(store: &HighScoreStore) {
        if let Some(dir) = store.path().parent() {
            fs::remove_dir_all(dir).ok();
        }
    }

    #[test]
    fn test_missing_file_writes_default() {
        let store = temp_store();
        assert!(!store.path().exists());

        let record = store.load_or_init().expect("load should succeed");
        assert_eq!(record.high_score, 0);
        assert!(store.path().exists());

        let json = fs::read_to_string(store.path()).unwrap();
        let on_disk: HighScoreRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(on_disk, HighScoreRecord::default());

        cleanup(&store);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = temp_store();
        store
            .save(&HighScoreRecord { high_score: 7 })
            .expect("save should succeed");

        let record = store.load_or_init().expect("load should succeed");
        assert_eq!(record.high_score, 7);

        cleanup(&store);
    }

    #[test]
    fn test_save_overwrites_whole_file() {
        let store = temp_store();
        store.save(&HighScoreRecord { high_score: 120 }).unwrap();
        store.save(&HighScoreRecord { high_score: 9 }).unwrap();
        assert_eq!(store.load_or_init().unwrap().high_score, 9);

        cleanup(&store);
    }

    #[test]
    fn test_malformed_file_falls_back_without_overwriting() {
        let store = temp_store();
        fs::write(store.path(), "{ not json").unwrap();

        let record = store.load_or_init().expect("load should succeed");
        assert_eq!(record.high_score, 0);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{ not json");

        cleanup(&store);
    }

    #[test]
    fn test_missing_key_defaults_to_zero() {
        let store = temp_store();
        fs::write(store.path(), "{}").unwrap();
        assert_eq!(store.load_or_init().unwrap().high_score, 0);

        cleanup(&store);
    }

    #[test]
    fn test_file_format() {
        let json = serde_json::to_string(&HighScoreRecord { high_score: 3 }).unwrap();
        assert_eq!(json, r#"{"high_score":3}"#);
    }
}
