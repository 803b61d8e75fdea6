//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity.
//! Velocities are in pixels per tick, so there is no dt scaling.
//! The player additionally wraps toroidally at the field edges.

use hecs::World;

use skyraid_core::components::Player;
use skyraid_core::types::{Field, Position, Velocity};

pub fn run(world: &mut World, field: Field) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0;
    }

    for (_entity, (_player, pos)) in world.query_mut::<(&Player, &mut Position)>() {
        pos.0 = field.wrap(pos.0);
    }
}
