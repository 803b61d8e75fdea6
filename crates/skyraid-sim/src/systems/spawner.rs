//! Lazy enemy spawning.
//!
//! The reserve is an explicit resumable state object: each draw yields
//! one enemy or reports exhaustion. The engine resumes it at most once
//! per tick, and only while the live population sits below the floor,
//! so the round's enemies trickle in instead of arriving all at once.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use skyraid_core::components::Enemy;
use skyraid_core::events::GameEvent;
use skyraid_core::types::{Field, Position};

use crate::world_setup;

/// Bounded supply of enemies for one round. Not restartable: once
/// drained, every further draw is a no-op, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyReserve {
    remaining: u32,
}

impl EnemyReserve {
    pub fn new(total: u32) -> Self {
        Self { remaining: total }
    }

    /// Enemies this reserve can still produce.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Take one enemy from the reserve. Returns false once exhausted.
    /// Safe to call any number of times.
    pub fn draw(&mut self) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
            true
        } else {
            false
        }
    }
}

/// Spawn at most one enemy this tick, if the live count is below the
/// floor and the reserve still has stock.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    reserve: &mut EnemyReserve,
    field: Field,
    floor: u32,
    events: &mut Vec<GameEvent>,
) {
    let live = world.query_mut::<&Enemy>().into_iter().count() as u32;
    if live >= floor {
        return;
    }

    if reserve.draw() {
        let entity = world_setup::spawn_enemy(world, rng, field);
        if let Ok(pos) = world.get::<&Position>(entity) {
            events.push(GameEvent::EnemySpawned { position: *pos });
        }
    }
}
