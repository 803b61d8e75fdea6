//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Round lifecycle state. Both non-`Running` states are terminal:
/// once reached, the simulation ignores further ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    #[default]
    Running,
    /// The player's hit points reached zero.
    PlayerDefeated,
    /// The enemy set and the spawn reserve are both exhausted.
    AllEnemiesCleared,
}

impl RoundState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundState::Running)
    }
}

/// Drawable entity classification, used by the rendering collaborator
/// to pick a sprite for each snapshot entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKind {
    Player,
    Enemy,
    PlayerBullet,
    EnemyBullet,
}
