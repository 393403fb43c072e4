//! Flappy Bird game core.
//!
//! The bird falls under gravity, the player flaps to push it upward, and
//! pipe pairs scroll in from the right. Touching a pipe or the floor starts
//! the death fall, after which the session restarts on its own.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
