//! Simulation configuration.
//!
//! All physics, geometry, and timing constants live here so the simulation
//! can be driven headless in tests with the same numbers the game uses.
//! Coordinates are in field pixels: x grows to the right, y grows downward.

use std::ops::RangeInclusive;

/// Frames per second the driver ticks the simulation at.
pub const FRAME_RATE: u64 = 60;

/// Milliseconds between simulation frames.
pub const FRAME_INTERVAL_MS: u64 = 1000 / FRAME_RATE;

/// Name of the persisted high-score file.
pub const DATA_FILE_NAME: &str = "flappy_bird_data.json";

/// Name of the log file written next to the save file.
pub const LOG_FILE_NAME: &str = "flappy.log";

/// Tunable constants for one game session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Width of the play field.
    pub field_width: f64,
    /// Height of the play field.
    pub field_height: f64,
    /// Top edge of the floor; the bird dies once its bottom edge passes it.
    pub floor_y: f64,

    /// Fixed horizontal position of the bird's left edge.
    pub bird_x: f64,
    /// Vertical position of the bird's top edge at the start of a session.
    pub bird_start_y: f64,
    /// Bird bounding box width.
    pub bird_width: f64,
    /// Bird bounding box height.
    pub bird_height: f64,

    /// Velocity added every frame while alive (positive = downward).
    pub gravity: f64,
    /// Velocity set (not added) when the player jumps.
    pub jump_impulse: f64,
    /// Velocity set on death, giving the little hop before the fall.
    pub death_velocity: f64,
    /// Acceleration applied during the death fall.
    pub death_gravity: f64,

    /// Pixels an obstacle scrolls left per frame.
    pub scroll_speed: f64,
    /// Width of a pipe pair.
    pub pipe_width: f64,
    /// Obstacles whose x drops below this are removed.
    pub offscreen_threshold: f64,
    /// Frames between obstacle spawns while alive.
    pub spawn_interval_frames: u64,
    /// Frames between death and the automatic restart.
    pub death_timeout_frames: u64,
    /// Inclusive range the gap's top edge is drawn from.
    pub gap_offset_range: RangeInclusive<u32>,
    /// Inclusive range the gap height is drawn from.
    pub gap_height_range: RangeInclusive<u32>,

    /// Degrees of tilt per unit of velocity while alive.
    pub alive_rotation: f64,
    /// Degrees of tilt per unit of velocity during the death fall.
    pub death_rotation: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 500.0,
            field_height: 500.0,
            floor_y: 400.0,

            bird_x: 50.0,
            bird_start_y: 100.0,
            bird_width: 40.0,
            bird_height: 35.0,

            gravity: 0.1,
            jump_impulse: -3.0,
            death_velocity: -5.0,
            death_gravity: 0.1,

            scroll_speed: 3.0,
            pipe_width: 50.0,
            offscreen_threshold: -50.0,
            spawn_interval_frames: 100,
            death_timeout_frames: 240,
            gap_offset_range: 10..=250,
            gap_height_range: 100..=150,

            alive_rotation: 5.0,
            death_rotation: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gap_always_above_floor() {
        let config = GameConfig::default();
        let lowest = config.gap_offset_range.end() + config.gap_height_range.end();
        assert!(f64::from(lowest) <= config.floor_y);
    }

    #[test]
    fn test_bird_starts_above_floor() {
        let config = GameConfig::default();
        assert!(config.bird_start_y + config.bird_height < config.floor_y);
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(FRAME_INTERVAL_MS, 16);
    }
}
