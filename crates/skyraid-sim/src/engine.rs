//! Simulation engine — the core of the game.
//!
//! `Simulation` owns the hecs ECS world, consumes one `Command` per
//! tick, runs all systems in a fixed order, and produces a
//! `FrameSnapshot`. Completely headless, enabling deterministic testing.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use skyraid_core::commands::Command;
use skyraid_core::components::{Enemy, Health, Player};
use skyraid_core::constants::{ENEMY_FLOOR, ENEMY_RESERVE_TOTAL};
use skyraid_core::enums::RoundState;
use skyraid_core::events::GameEvent;
use skyraid_core::state::FrameSnapshot;
use skyraid_core::types::{Field, SimTime};

use crate::systems;
use crate::systems::spawner::EnemyReserve;
use crate::world_setup;

/// Configuration for starting a new round.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same round.
    pub seed: u64,
    /// Play field geometry.
    pub field: Field,
    /// Total enemies the spawn reserve yields over the round.
    pub enemy_reserve: u32,
    /// The reserve is drawn from only while fewer enemies are live.
    pub enemy_floor: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            field: Field::default(),
            enemy_reserve: ENEMY_RESERVE_TOTAL,
            enemy_floor: ENEMY_FLOOR,
        }
    }
}

/// The simulation. Owns the ECS world and all round state.
pub struct Simulation {
    world: World,
    time: SimTime,
    round: RoundState,
    field: Field,
    enemy_floor: u32,
    rng: ChaCha8Rng,
    reserve: EnemyReserve,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl Simulation {
    /// Create a new simulation with the player craft already placed.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        world_setup::spawn_player(&mut world, config.field);

        Self {
            world,
            time: SimTime::default(),
            round: RoundState::default(),
            field: config.field,
            enemy_floor: config.enemy_floor,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            reserve: EnemyReserve::new(config.enemy_reserve),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. Once the round is terminal, ticks no longer advance
    /// anything; the final state is returned unchanged.
    pub fn tick(&mut self, command: Command) -> FrameSnapshot {
        if self.round == RoundState::Running {
            self.run_systems(command);
            self.time.advance();
            self.evaluate_round();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(&self.world, self.time, self.round, &self.reserve, events)
    }

    /// Get the current round state.
    pub fn round(&self) -> RoundState {
        self.round
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the field geometry.
    pub fn field(&self) -> Field {
        self.field
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the enemy spawn reserve.
    pub fn reserve(&self) -> &EnemyReserve {
        &self.reserve
    }

    /// Run all systems in order.
    fn run_systems(&mut self, command: Command) {
        // 1. Apply the external command to the player craft.
        systems::player_control::run(&mut self.world, command);
        // 2. Enemy autonomy: bounce off edges, roll fire intent.
        systems::enemy_ai::run(&mut self.world, &mut self.rng, self.field);
        // 3. Movement integration + player wrap.
        systems::movement::run(&mut self.world, self.field);
        // 4. Fire/reload state machines; bullets spawn here.
        systems::fire_control::run(&mut self.world, &mut self.events);
        // 5. Lazy enemy spawning (at most one per tick).
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.reserve,
            self.field,
            self.enemy_floor,
            &mut self.events,
        );
        // 6. Fixed-order collision resolution.
        systems::collision::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);
        // 7. Reap dead crafts and out-of-field bullets.
        systems::cleanup::run(&mut self.world, self.field, &mut self.despawn_buffer);
    }

    /// Evaluate the end-of-round condition.
    fn evaluate_round(&mut self) {
        let player_alive = self
            .world
            .query_mut::<(&Player, &Health)>()
            .into_iter()
            .next()
            .is_some();

        if !player_alive {
            self.round = RoundState::PlayerDefeated;
        } else {
            let enemies_alive = self.world.query_mut::<&Enemy>().into_iter().count();
            if enemies_alive == 0 && self.reserve.is_exhausted() {
                self.round = RoundState::AllEnemiesCleared;
            }
        }

        if self.round.is_terminal() {
            self.events.push(GameEvent::RoundOver {
                outcome: self.round,
            });
        }
    }

    /// Spawn an enemy with a fixed position and velocity (for tests).
    #[cfg(test)]
    pub fn spawn_enemy_at(
        &mut self,
        position: glam::Vec2,
        velocity: glam::Vec2,
    ) -> hecs::Entity {
        world_setup::spawn_enemy_at(&mut self.world, position, velocity)
    }

    /// Spawn a bullet of either side at a fixed position (for tests).
    #[cfg(test)]
    pub fn spawn_bullet_at(
        &mut self,
        kind: skyraid_core::enums::SpriteKind,
        position: glam::Vec2,
    ) -> Option<hecs::Entity> {
        use skyraid_core::components::CraftProperties;
        use skyraid_core::enums::SpriteKind;

        match kind {
            SpriteKind::PlayerBullet => Some(world_setup::spawn_player_bullet(
                &mut self.world,
                position,
                CraftProperties::player().bullet,
            )),
            SpriteKind::EnemyBullet => Some(world_setup::spawn_enemy_bullet(
                &mut self.world,
                position,
                CraftProperties::enemy().bullet,
            )),
            _ => None,
        }
    }

    /// Move the player craft to a fixed position (for tests).
    #[cfg(test)]
    pub fn set_player_position(&mut self, position: glam::Vec2) {
        use skyraid_core::types::Position;
        for (_entity, (_player, pos)) in self.world.query_mut::<(&Player, &mut Position)>() {
            pos.0 = position;
        }
    }

    /// Current player hit points, if the player is still in the world
    /// (for tests).
    #[cfg(test)]
    pub fn player_hit_points(&self) -> Option<i32> {
        let mut query = self.world.query::<(&Player, &Health)>();
        query.iter().next().map(|(_e, (_p, health))| health.current)
    }
}
