//! Collision resolution — one fixed-order pass per tick.
//!
//! Order matters: each pass may kill entities a later pass would have
//! paired. The passes are
//!   1. player bullets x enemies,
//!   2. enemy bullets x the player,
//!   3. the player x enemies (ram contact).
//! Entities killed mid-pass are excluded from every later pairing, so
//! damage is never applied to an already-dead entity and a bullet never
//! scores twice.

use glam::Vec2;
use hecs::{Entity, World};

use skyraid_core::components::{
    Enemy, EnemyBullet, Footprint, Health, Player, PlayerBullet, Warhead,
};
use skyraid_core::events::GameEvent;
use skyraid_core::types::{aabb_overlap, Position};

/// Working copy of a craft's collision state for one resolver pass.
struct CraftEntry {
    entity: Entity,
    position: Vec2,
    footprint: Footprint,
    hit_points: i32,
}

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<GameEvent>) {
    despawn_buffer.clear();

    let mut enemies: Vec<CraftEntry> = Vec::new();
    for (entity, (_enemy, pos, footprint, health)) in
        world.query_mut::<(&Enemy, &Position, &Footprint, &Health)>()
    {
        enemies.push(CraftEntry {
            entity,
            position: pos.0,
            footprint: *footprint,
            hit_points: health.current,
        });
    }

    let mut player: Option<CraftEntry> = None;
    for (entity, (_player, pos, footprint, health)) in
        world.query_mut::<(&Player, &Position, &Footprint, &Health)>()
    {
        player = Some(CraftEntry {
            entity,
            position: pos.0,
            footprint: *footprint,
            hit_points: health.current,
        });
    }

    // --- Pass 1: player bullets x enemies ---
    let mut player_bullets: Vec<(Entity, Vec2, Footprint, i32)> = Vec::new();
    for (entity, (_bullet, pos, footprint, warhead)) in
        world.query_mut::<(&PlayerBullet, &Position, &Footprint, &Warhead)>()
    {
        player_bullets.push((entity, pos.0, *footprint, warhead.damage));
    }

    for (bullet_entity, bullet_pos, bullet_fp, damage) in player_bullets {
        let mut scored = false;

        // The bullet hits every enemy it overlaps this tick, then is
        // removed; enemies already dead in this pass are skipped.
        for enemy in enemies.iter_mut() {
            if enemy.hit_points <= 0 {
                continue;
            }
            if !aabb_overlap(bullet_pos, &bullet_fp, enemy.position, &enemy.footprint) {
                continue;
            }

            scored = true;
            enemy.hit_points -= damage;
            apply_damage(world, enemy.entity, damage);

            if enemy.hit_points <= 0 {
                events.push(GameEvent::EnemyDestroyed {
                    position: Position(enemy.position),
                });
            }
        }

        if scored {
            despawn_buffer.push(bullet_entity);
        }
    }

    // --- Pass 2: enemy bullets x the player ---
    if let Some(player) = player.as_mut() {
        let mut enemy_bullets: Vec<(Entity, Vec2, Footprint, i32)> = Vec::new();
        for (entity, (_bullet, pos, footprint, warhead)) in
            world.query_mut::<(&EnemyBullet, &Position, &Footprint, &Warhead)>()
        {
            enemy_bullets.push((entity, pos.0, *footprint, warhead.damage));
        }

        for (bullet_entity, bullet_pos, bullet_fp, damage) in enemy_bullets {
            if !aabb_overlap(bullet_pos, &bullet_fp, player.position, &player.footprint) {
                continue;
            }

            despawn_buffer.push(bullet_entity);

            // A bullet still overlapping a player killed earlier in
            // this pass is consumed without applying damage.
            if player.hit_points <= 0 {
                continue;
            }

            player.hit_points -= damage;
            apply_damage(world, player.entity, damage);
            events.push(GameEvent::PlayerHit {
                damage,
                remaining: player.hit_points,
            });
        }
    }

    // --- Pass 3: the player x enemies (ram contact) ---
    if let Some(player) = player.as_mut() {
        for enemy in enemies.iter_mut() {
            if player.hit_points <= 0 || enemy.hit_points <= 0 {
                continue;
            }
            if !aabb_overlap(
                player.position,
                &player.footprint,
                enemy.position,
                &enemy.footprint,
            ) {
                continue;
            }

            // Self-destructing ram: the enemy spends its remaining hit
            // points as damage, then dies. The player is only damaged.
            let damage = enemy.hit_points;
            player.hit_points -= damage;
            apply_damage(world, player.entity, damage);

            enemy.hit_points = 0;
            apply_damage(world, enemy.entity, damage);

            events.push(GameEvent::EnemyRammed { damage });
            events.push(GameEvent::PlayerHit {
                damage,
                remaining: player.hit_points,
            });
            events.push(GameEvent::EnemyDestroyed {
                position: Position(enemy.position),
            });
        }
    }

    // Spent bullets are removed immediately; dead crafts are reaped by
    // the cleanup system.
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

fn apply_damage(world: &mut World, entity: Entity, amount: i32) {
    if let Ok(mut health) = world.get::<&mut Health>(entity) {
        health.apply_damage(amount);
    }
}
