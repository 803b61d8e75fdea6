//! Player command application.
//!
//! The per-tick command overwrites the player's velocity and fire
//! intent; nothing accumulates across ticks.

use hecs::World;

use skyraid_core::commands::Command;
use skyraid_core::components::{Player, Weapon};
use skyraid_core::types::Velocity;

pub fn run(world: &mut World, command: Command) {
    for (_entity, (_player, vel, weapon)) in
        world.query_mut::<(&Player, &mut Velocity, &mut Weapon)>()
    {
        vel.0 = command.movement;
        weapon.fire_intent = command.fire;
    }
}
