//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so log output goes to ~/.flappy/flappy.log.

use super::persistence::{flappy_dir, PersistenceError};
use crate::config::LOG_FILE_NAME;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, appending to ~/.flappy/flappy.log.
pub fn init() -> Result<(), PersistenceError> {
    init_at(&flappy_dir()?.join(LOG_FILE_NAME))
}

/// Install the global subscriber, appending to `path`.
///
/// Fails if a global subscriber is already installed.
pub fn init_at(path: &Path) -> Result<(), PersistenceError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| PersistenceError::Logging(e.to_string()))
}
