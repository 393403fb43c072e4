//! Terminal rendering of the game snapshot.

pub mod flappy_scene;
pub mod game_common;
pub mod terminal;

use crate::game::types::Snapshot;
use ratatui::Frame;

/// Draw one frame of the game.
pub fn draw(frame: &mut Frame, snapshot: &Snapshot) {
    let area = frame.size();
    flappy_scene::render_flappy(frame, area, snapshot);
}
