//! Flappy - a terminal Flappy Bird.
//!
//! This module exposes the simulation, persistence and rendering for testing
//! and for the `flappy` binary.

pub mod config;
pub mod game;
pub mod input;
pub mod ui;
pub mod utils;

pub use config::{GameConfig, FRAME_INTERVAL_MS, FRAME_RATE};
pub use game::logic::{FlappyEvent, GameState};
pub use game::types::{Bird, BirdBox, Obstacle, ObstacleView, Snapshot};
pub use utils::persistence::{HighScoreRecord, HighScoreStore, PersistenceError};
