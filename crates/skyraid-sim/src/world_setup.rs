//! Entity spawn factories.
//!
//! All entities enter the world through these functions with their full
//! component bundles; the marker component decides every group an
//! entity belongs to, so membership is fixed at construction.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyraid_core::components::*;
use skyraid_core::constants::*;
use skyraid_core::types::{Field, Position, Velocity};

/// Spawn the player craft at the bottom center of the field.
pub fn spawn_player(world: &mut World, field: Field) -> hecs::Entity {
    let props = CraftProperties::player();
    let position = Vec2::new(
        field.width * 0.5,
        field.height - props.footprint.height,
    );

    world.spawn((
        Player,
        Position(position),
        Velocity::default(),
        props.footprint,
        Health::new(props.hit_points),
        Weapon::new(props.reload_ticks, props.bullet),
    ))
}

/// Spawn one enemy craft at a uniformly random position in the upper
/// half of the field, with a uniformly random velocity from the bounded
/// spawn ranges.
pub fn spawn_enemy(world: &mut World, rng: &mut ChaCha8Rng, field: Field) -> hecs::Entity {
    let props = CraftProperties::enemy();
    let half = props.footprint.half_extents();

    let x = rng.gen_range(half.x..field.width - half.x);
    let y = rng.gen_range(half.y..field.height * 0.5);

    let vx = rng.gen_range(-ENEMY_SPEED_X_MAX..=ENEMY_SPEED_X_MAX);
    let vy = rng.gen_range(ENEMY_SPEED_Y_MIN..=ENEMY_SPEED_Y_MAX);

    spawn_enemy_at(world, Vec2::new(x, y), Vec2::new(vx, vy))
}

/// Spawn an enemy craft with explicit position and velocity.
pub fn spawn_enemy_at(world: &mut World, position: Vec2, velocity: Vec2) -> hecs::Entity {
    let props = CraftProperties::enemy();

    world.spawn((
        Enemy,
        Position(position),
        Velocity(velocity),
        props.footprint,
        Health::new(props.hit_points),
        Weapon::new(props.reload_ticks, props.bullet),
        FirePolicy {
            shot_chance: ENEMY_SHOT_CHANCE,
        },
    ))
}

/// Spawn a player bullet at the firing craft's center.
pub fn spawn_player_bullet(
    world: &mut World,
    position: Vec2,
    props: BulletProperties,
) -> hecs::Entity {
    world.spawn((
        PlayerBullet,
        Position(position),
        Velocity(props.velocity),
        props.footprint,
        Warhead {
            damage: props.damage,
        },
    ))
}

/// Spawn an enemy bullet at the firing craft's center.
pub fn spawn_enemy_bullet(
    world: &mut World,
    position: Vec2,
    props: BulletProperties,
) -> hecs::Entity {
    world.spawn((
        EnemyBullet,
        Position(position),
        Velocity(props.velocity),
        props.footprint,
        Warhead {
            damage: props.damage,
        },
    ))
}
