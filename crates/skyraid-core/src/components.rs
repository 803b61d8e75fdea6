//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic; behavior lives
//! in the simulation systems. Entity kinds are a closed set of marker
//! components rather than an inheritance chain: a craft is whatever
//! carries `Health` + `Weapon`, a bullet is whatever carries `Warhead`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Marks the player craft. Exactly one per round.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an autonomous enemy craft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks a bullet fired by the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerBullet;

/// Marks a bullet fired by an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyBullet;

/// Visual footprint — the collision box derived from the sprite size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: f32,
    pub height: f32,
}

impl Footprint {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Hit-point counter. `current` starts at `max` and only ever decreases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Apply damage. Callers must not damage an already-dead entity;
    /// the collision resolver enforces this by skipping dead entries.
    pub fn apply_damage(&mut self, amount: i32) {
        self.current -= amount;
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

/// Static bullet attributes shared by every bullet a craft fires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletProperties {
    /// Fixed bullet velocity in pixels per tick.
    pub velocity: Vec2,
    /// Damage dealt on a hit. Never negative.
    pub damage: i32,
    pub footprint: Footprint,
}

/// Static craft attributes — the property table a craft is built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CraftProperties {
    pub hit_points: i32,
    /// Minimum ticks between consecutive shots.
    pub reload_ticks: u32,
    pub footprint: Footprint,
    pub bullet: BulletProperties,
}

impl CraftProperties {
    /// Property table for the player craft.
    pub fn player() -> Self {
        Self {
            hit_points: PLAYER_HIT_POINTS,
            reload_ticks: PLAYER_RELOAD_TICKS,
            footprint: Footprint::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            bullet: BulletProperties {
                velocity: Vec2::new(0.0, -PLAYER_BULLET_SPEED),
                damage: PLAYER_BULLET_DAMAGE,
                footprint: Footprint::new(BULLET_WIDTH, BULLET_HEIGHT),
            },
        }
    }

    /// Property table for the standard enemy craft.
    pub fn enemy() -> Self {
        Self {
            hit_points: ENEMY_HIT_POINTS,
            reload_ticks: ENEMY_RELOAD_TICKS,
            footprint: Footprint::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            bullet: BulletProperties {
                velocity: Vec2::new(0.0, ENEMY_BULLET_SPEED),
                damage: ENEMY_BULLET_DAMAGE,
                footprint: Footprint::new(BULLET_WIDTH, BULLET_HEIGHT),
            },
        }
    }
}

/// Fire/reload state machine data for a craft.
///
/// The craft is Armed once `ticks_since_fire >= reload_ticks`; firing
/// resets the counter to zero, re-entering Idle. The counter increments
/// every tick regardless of intent, so the interval between two shots
/// is never below `reload_ticks`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub reload_ticks: u32,
    /// Ticks since the last shot. Starts at `reload_ticks` so a fresh
    /// craft may fire immediately.
    pub ticks_since_fire: u32,
    /// Recomputed every tick from the command (player) or a Bernoulli
    /// roll (enemy).
    pub fire_intent: bool,
    pub bullet: BulletProperties,
}

impl Weapon {
    pub fn new(reload_ticks: u32, bullet: BulletProperties) -> Self {
        Self {
            reload_ticks,
            ticks_since_fire: reload_ticks,
            fire_intent: false,
            bullet,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.ticks_since_fire >= self.reload_ticks
    }
}

/// Autonomous fire policy for enemy craft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FirePolicy {
    /// Per-tick probability of forming fire intent.
    pub shot_chance: f64,
}

/// Projectile payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Warhead {
    pub damage: i32,
}
