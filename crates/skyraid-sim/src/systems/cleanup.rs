//! Cleanup system: reaps bullets that left the field and crafts whose
//! hit points reached zero. Despawning removes an entity from every
//! group at once, so a kill can only ever happen exactly once.

use hecs::{Entity, World};

use skyraid_core::components::{Footprint, Health, Warhead};
use skyraid_core::types::{Field, Position};

pub fn run(world: &mut World, field: Field, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    // Bullets die on leaving the field on either axis.
    for (entity, (pos, footprint, _warhead)) in
        world.query_mut::<(&Position, &Footprint, &Warhead)>()
    {
        if field.outside(pos.0, footprint) {
            despawn_buffer.push(entity);
        }
    }

    // Crafts die at zero hit points.
    for (entity, health) in world.query_mut::<&Health>() {
        if health.is_dead() {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
