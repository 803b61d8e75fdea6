//! Events emitted by the simulation for frontend audio and FX feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{RoundState, SpriteKind};
use crate::types::Position;

/// One simulation event. Each tick's events are carried in the frame
/// snapshot and cleared afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The spawn reserve produced a new enemy.
    EnemySpawned { position: Position },
    /// A craft fired a bullet.
    ShotFired { kind: SpriteKind },
    /// The player took damage from a bullet or a ram.
    PlayerHit { damage: i32, remaining: i32 },
    /// An enemy's hit points reached zero.
    EnemyDestroyed { position: Position },
    /// An enemy rammed the player, spending its remaining hit points.
    EnemyRammed { damage: i32 },
    /// The round reached a terminal state.
    RoundOver { outcome: RoundState },
}
