//! Fire/reload state machine processing.
//!
//! Every craft's reload counter advances by one each tick regardless of
//! intent. A craft whose intent is set and whose counter has reached
//! the reload threshold emits exactly one bullet at its current center
//! and resets the counter, so at most one shot per craft per tick and
//! never two shots closer than the threshold.

use glam::Vec2;
use hecs::World;

use skyraid_core::components::{BulletProperties, Enemy, Player, Weapon};
use skyraid_core::enums::SpriteKind;
use skyraid_core::events::GameEvent;
use skyraid_core::types::Position;

use crate::world_setup;

pub fn run(world: &mut World, events: &mut Vec<GameEvent>) {
    // Buffer spawns; bullets cannot be inserted while craft queries
    // hold the world.
    let mut player_shots: Vec<(Vec2, BulletProperties)> = Vec::new();
    let mut enemy_shots: Vec<(Vec2, BulletProperties)> = Vec::new();

    for (_entity, (_player, pos, weapon)) in
        world.query_mut::<(&Player, &Position, &mut Weapon)>()
    {
        if advance_and_fire(weapon) {
            player_shots.push((pos.0, weapon.bullet));
        }
    }

    for (_entity, (_enemy, pos, weapon)) in world.query_mut::<(&Enemy, &Position, &mut Weapon)>()
    {
        if advance_and_fire(weapon) {
            enemy_shots.push((pos.0, weapon.bullet));
        }
    }

    for (position, bullet) in player_shots {
        world_setup::spawn_player_bullet(world, position, bullet);
        events.push(GameEvent::ShotFired {
            kind: SpriteKind::PlayerBullet,
        });
    }
    for (position, bullet) in enemy_shots {
        world_setup::spawn_enemy_bullet(world, position, bullet);
        events.push(GameEvent::ShotFired {
            kind: SpriteKind::EnemyBullet,
        });
    }
}

/// Advance one weapon's reload counter; returns true if it fires.
fn advance_and_fire(weapon: &mut Weapon) -> bool {
    weapon.ticks_since_fire = weapon.ticks_since_fire.saturating_add(1);

    if weapon.fire_intent && weapon.is_armed() {
        weapon.ticks_since_fire = 0;
        true
    } else {
        false
    }
}
