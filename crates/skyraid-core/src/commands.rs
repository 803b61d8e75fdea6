//! The per-tick input command consumed by the player craft.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Immutable snapshot of external input for one tick.
///
/// `movement` is the sum of the active directional impulses; opposite
/// keys canceling to zero is ordinary input, not an error. The command
/// is consumed exactly once, by the tick it is passed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Desired player velocity for this tick (pixels per tick).
    pub movement: Vec2,
    /// Whether the fire key is held this tick.
    pub fire: bool,
}

impl Command {
    /// A command with no movement and no fire intent.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn new(movement: Vec2, fire: bool) -> Self {
        Self { movement, fire }
    }
}
