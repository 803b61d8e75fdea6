//! Enemy autonomous policy: elastic bounce and stochastic fire.
//!
//! The bounce check runs against the position *before* this tick's
//! move, negating the velocity component on each axis whose boundary
//! predicate reports out-of-range. Fire intent is a fresh Bernoulli
//! trial every tick; the reload state machine still gates actual shots.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyraid_core::components::{Enemy, FirePolicy, Footprint, Weapon};
use skyraid_core::types::{Field, Position, Velocity};

pub fn run(world: &mut World, rng: &mut ChaCha8Rng, field: Field) {
    for (_entity, (_enemy, pos, vel, footprint, weapon, policy)) in world.query_mut::<(
        &Enemy,
        &Position,
        &mut Velocity,
        &Footprint,
        &mut Weapon,
        &FirePolicy,
    )>() {
        if field.outside_x(pos.0, footprint) {
            vel.0.x = -vel.0.x;
        }
        if field.outside_y(pos.0, footprint) {
            vel.0.y = -vel.0.y;
        }

        weapon.fire_intent = rng.gen_bool(policy.shot_chance);
    }
}
