//! Frame snapshot — the complete visible state handed to the rendering
//! collaborator after each tick.

use serde::{Deserialize, Serialize};

use crate::components::Footprint;
use crate::enums::{RoundState, SpriteKind};
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Everything the frontend needs to present one frame. The core never
/// draws; it exposes this read-only view of the drawable group instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub round: RoundState,
    /// All live entities, in registry order.
    pub sprites: Vec<SpriteView>,
    pub player: PlayerView,
    /// Live enemy craft count.
    pub enemies_alive: u32,
    /// Enemies the spawn reserve can still produce.
    pub reserve_remaining: u32,
    /// Events emitted during this tick.
    pub events: Vec<GameEvent>,
}

/// One drawable entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteView {
    pub kind: SpriteKind,
    pub position: Position,
    pub footprint: Footprint,
}

/// Player status for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub hit_points: i32,
    pub max_hit_points: i32,
    pub position: Position,
}
