//! Per-frame simulation for the Flappy Bird game.

use super::types::{Bird, Obstacle, ObstacleView, Snapshot};
use crate::config::GameConfig;
use rand::Rng;
use std::collections::VecDeque;
use tracing::{debug, info};

/// Things that happened during a frame, for the driver to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlappyEvent {
    ObstacleSpawned,
    Scored {
        score: u32,
    },
    /// The bird hit a pipe or the floor. `new_high_score` is set when the
    /// session beat the persisted record and the record must be rewritten.
    Died {
        score: u32,
        new_high_score: Option<u32>,
    },
    /// The death timeout elapsed and a fresh session started.
    Restarted,
}

/// Whole game state. Created once at startup and reset in place on restart.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub bird: Bird,
    /// Active obstacles in spawn order; only the front is ever removed.
    pub obstacles: VecDeque<Obstacle>,
    pub alive: bool,
    pub score: u32,
    /// Best score seen, including the live score of the current session.
    pub high_score: u32,
    /// Value last written to (or read from) disk.
    pub persisted_high_score: u32,
    pub frame: u64,
    pub death_frame: u64,
}

impl GameState {
    pub fn new(config: GameConfig, high_score: u32) -> Self {
        Self {
            bird: Bird::new(&config),
            config,
            obstacles: VecDeque::new(),
            alive: true,
            score: 0,
            high_score,
            persisted_high_score: high_score,
            frame: 0,
            death_frame: 0,
        }
    }

    /// Start a fresh session, keeping the high score.
    pub fn reset(&mut self) {
        self.bird = Bird::new(&self.config);
        self.obstacles.clear();
        self.alive = true;
        self.score = 0;
        self.frame = 0;
        self.death_frame = 0;
    }

    /// Apply this frame's jump request. Sets velocity directly; ignored while dead.
    pub fn handle_input(&mut self, jump_requested: bool) {
        if self.alive && jump_requested {
            self.bird.velocity = self.config.jump_impulse;
        }
    }

    /// Advance the simulation by one frame.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Vec<FlappyEvent> {
        let mut events = Vec::new();

        if self.alive {
            self.step_alive(rng, &mut events);
        } else {
            self.bird.integrate();
            if self.frame >= self.death_frame + self.config.death_timeout_frames {
                self.reset();
                info!(high_score = self.high_score, "restarting session");
                events.push(FlappyEvent::Restarted);
            }
        }

        // Also runs on the restart frame: a fresh session's first live frame
        // is 1, so its first pipe spawns at frame 100.
        self.frame += 1;
        events
    }

    fn step_alive<R: Rng>(&mut self, rng: &mut R, events: &mut Vec<FlappyEvent>) {
        self.bird.integrate();

        while self.obstacles.front().is_some_and(Obstacle::is_off_screen) {
            self.obstacles.pop_front();
        }

        let bird_box = self.bird.bounding_box();
        let mut crashed = false;
        for obstacle in &mut self.obstacles {
            if !obstacle.scored && obstacle.x <= bird_box.x {
                obstacle.scored = true;
                self.score += 1;
                self.high_score = self.high_score.max(self.score);
                debug!(score = self.score, "passed obstacle");
                events.push(FlappyEvent::Scored { score: self.score });
            }
            if obstacle.collides(&bird_box) {
                crashed = true;
            }
            obstacle.advance();
        }

        if self.bird.bottom() > self.config.floor_y {
            crashed = true;
        }

        if crashed {
            events.push(self.trigger_death());
            return;
        }

        if self.frame % self.config.spawn_interval_frames == 0 {
            self.spawn_obstacle(rng);
            events.push(FlappyEvent::ObstacleSpawned);
        }
    }

    /// Switch to the death fall. Returns the `Died` event.
    fn trigger_death(&mut self) -> FlappyEvent {
        self.alive = false;
        self.death_frame = self.frame;
        self.bird.velocity = self.config.death_velocity;
        self.bird.acceleration = self.config.death_gravity;

        let new_high_score = if self.score > self.persisted_high_score {
            self.persisted_high_score = self.score;
            Some(self.score)
        } else {
            None
        };

        info!(
            score = self.score,
            frame = self.frame,
            new_high_score = new_high_score.is_some(),
            "bird crashed"
        );

        FlappyEvent::Died {
            score: self.score,
            new_high_score,
        }
    }

    /// Push a new pipe pair at the right edge with a random gap.
    pub fn spawn_obstacle<R: Rng>(&mut self, rng: &mut R) {
        let gap_offset = rng.gen_range(self.config.gap_offset_range.clone());
        let gap_height = rng.gen_range(self.config.gap_height_range.clone());
        debug!(gap_offset, gap_height, frame = self.frame, "spawning obstacle");
        self.obstacles.push_back(Obstacle::new(
            f64::from(gap_offset),
            f64::from(gap_height),
            self.config.scroll_speed,
            &self.config,
        ));
    }

    /// Bird tilt in degrees, steeper during the death fall.
    pub fn bird_rotation(&self) -> f64 {
        let coefficient = if self.alive {
            self.config.alive_rotation
        } else {
            self.config.death_rotation
        };
        -coefficient * self.bird.velocity
    }

    /// Floor scroll offset; stops moving once the bird dies.
    pub fn floor_scroll(&self) -> f64 {
        let frame = if self.alive {
            self.frame
        } else {
            self.death_frame
        };
        (frame as f64 * self.config.scroll_speed) % self.config.field_width
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            bird: self.bird.bounding_box(),
            bird_rotation: self.bird_rotation(),
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.x,
                    width: o.width,
                    gap_top: o.gap_top(),
                    gap_bottom: o.gap_bottom(),
                })
                .collect(),
            score: self.score,
            high_score: self.high_score,
            alive: self.alive,
            frame: self.frame,
            field_width: self.config.field_width,
            field_height: self.config.field_height,
            floor_y: self.config.floor_y,
            floor_scroll: self.floor_scroll(),
        }
    }
}
