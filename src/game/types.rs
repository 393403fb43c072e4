//! Flappy Bird data structures.
//!
//! The bird, the pipe-pair obstacles, and the read-only snapshot handed to
//! the renderer each frame.

use crate::config::GameConfig;

/// Axis-aligned bounding box of the bird. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BirdBox {
    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// The player's bird. Only `y` moves; `x` stays fixed for the whole session.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    /// Vertical velocity in pixels/frame (negative = upward).
    pub velocity: f64,
    /// Vertical acceleration in pixels/frame².
    pub acceleration: f64,
    pub width: f64,
    pub height: f64,
}

impl Bird {
    /// A bird at its starting position, at rest.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_x,
            y: config.bird_start_y,
            velocity: 0.0,
            acceleration: config.gravity,
            width: config.bird_width,
            height: config.bird_height,
        }
    }

    /// Advance one frame: velocity first, then position.
    pub fn integrate(&mut self) {
        self.velocity += self.acceleration;
        self.y += self.velocity;
    }

    pub fn bounding_box(&self) -> BirdBox {
        BirdBox {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A single pipe pair: a top pipe and a bottom pipe with a gap between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge (float for smooth scrolling).
    pub x: f64,
    /// Y of the top of the opening.
    pub gap_offset: f64,
    /// Height of the opening.
    pub gap_height: f64,
    /// Pixels scrolled left per `advance`.
    pub speed: f64,
    pub width: f64,
    /// Whether this obstacle has already counted towards the score.
    pub scored: bool,
    offscreen_threshold: f64,
}

impl Obstacle {
    /// Create an obstacle at the right edge of the field.
    pub fn new(gap_offset: f64, gap_height: f64, speed: f64, config: &GameConfig) -> Self {
        Self {
            x: config.field_width,
            gap_offset,
            gap_height,
            speed,
            width: config.pipe_width,
            scored: false,
            offscreen_threshold: config.offscreen_threshold,
        }
    }

    pub fn advance(&mut self) {
        self.x -= self.speed;
    }

    /// Upper bound of the opening.
    pub fn gap_top(&self) -> f64 {
        self.gap_offset
    }

    /// Lower bound of the opening.
    pub fn gap_bottom(&self) -> f64 {
        self.gap_offset + self.gap_height
    }

    /// Whether the bird's horizontal extent overlaps this pipe pair.
    ///
    /// Edges merely touching do not count.
    pub fn overlaps_horizontally(&self, bird: &BirdBox) -> bool {
        self.x - bird.width < bird.x && bird.x < self.x + self.width
    }

    /// True if the bird overlaps the pipe horizontally and pokes out of the gap.
    pub fn collides(&self, bird: &BirdBox) -> bool {
        if !self.overlaps_horizontally(bird) {
            return false;
        }
        bird.top() < self.gap_top() || bird.bottom() > self.gap_bottom()
    }

    pub fn is_off_screen(&self) -> bool {
        self.x < self.offscreen_threshold
    }
}

/// Read-only view of one obstacle for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleView {
    pub x: f64,
    pub width: f64,
    pub gap_top: f64,
    pub gap_bottom: f64,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub bird: BirdBox,
    /// Tilt in degrees; positive = nose up.
    pub bird_rotation: f64,
    pub obstacles: Vec<ObstacleView>,
    pub score: u32,
    pub high_score: u32,
    pub alive: bool,
    pub frame: u64,
    pub field_width: f64,
    pub field_height: f64,
    pub floor_y: f64,
    /// How far the floor has scrolled left, wrapped to the field width.
    /// Frozen at the death frame during the death fall.
    pub floor_scroll: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipe(gap_offset: f64, gap_height: f64) -> Obstacle {
        let config = GameConfig::default();
        let mut obstacle = Obstacle::new(gap_offset, gap_height, config.scroll_speed, &config);
        obstacle.x = 60.0;
        obstacle
    }

    fn bird_at(x: f64, y: f64) -> BirdBox {
        BirdBox {
            x,
            y,
            width: 40.0,
            height: 35.0,
        }
    }

    #[test]
    fn test_new_obstacle_at_right_edge() {
        let config = GameConfig::default();
        let obstacle = Obstacle::new(120.0, 120.0, 3.0, &config);
        assert!((obstacle.x - 500.0).abs() < f64::EPSILON);
        assert!(!obstacle.scored);
        assert!((obstacle.gap_bottom() - 240.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_advance_moves_left_by_speed() {
        let config = GameConfig::default();
        let mut obstacle = Obstacle::new(120.0, 120.0, 3.0, &config);
        obstacle.advance();
        obstacle.advance();
        assert!((obstacle.x - 494.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inside_gap_no_collision() {
        let obstacle = pipe(120.0, 120.0);
        assert!(!obstacle.collides(&bird_at(50.0, 130.0)));
        // Exactly flush with both gap edges is still inside.
        assert!(!obstacle.collides(&bird_at(50.0, 120.0)));
        assert!(!obstacle.collides(&bird_at(50.0, 205.0)));
    }

    #[test]
    fn test_above_gap_collides() {
        let obstacle = pipe(120.0, 120.0);
        assert!(obstacle.collides(&bird_at(50.0, 90.0)));
        assert!(obstacle.collides(&bird_at(50.0, 100.0)));
    }

    #[test]
    fn test_below_gap_collides() {
        let obstacle = pipe(120.0, 120.0);
        // bottom = 206 + 35 = 241 > 240
        assert!(obstacle.collides(&bird_at(50.0, 206.0)));
    }

    #[test]
    fn test_no_collision_without_horizontal_overlap() {
        let obstacle = pipe(120.0, 120.0);
        // Pipe spans 60..110; bird ends exactly at the pipe's left edge.
        assert!(!obstacle.collides(&bird_at(20.0, 0.0)));
        // Bird starts exactly at the pipe's right edge.
        assert!(!obstacle.collides(&bird_at(110.0, 0.0)));
        assert!(obstacle.collides(&bird_at(21.0, 0.0)));
        assert!(obstacle.collides(&bird_at(109.0, 0.0)));
    }

    #[test]
    fn test_off_screen_threshold() {
        let mut obstacle = pipe(120.0, 120.0);
        obstacle.x = -50.0;
        assert!(!obstacle.is_off_screen());
        obstacle.x = -50.5;
        assert!(obstacle.is_off_screen());
    }

    #[test]
    fn test_bird_integrate_velocity_then_position() {
        let config = GameConfig::default();
        let mut bird = Bird::new(&config);
        bird.integrate();
        assert!((bird.velocity - 0.1).abs() < 1e-9);
        assert!((bird.y - 100.1).abs() < 1e-9);
    }
}
