//! Snapshot construction — flattens the world into the read-only frame
//! view the rendering collaborator consumes.

use hecs::World;

use skyraid_core::components::{
    Enemy, EnemyBullet, Footprint, Health, Player, PlayerBullet,
};
use skyraid_core::enums::{RoundState, SpriteKind};
use skyraid_core::events::GameEvent;
use skyraid_core::state::{FrameSnapshot, PlayerView, SpriteView};
use skyraid_core::types::{Position, SimTime};

use crate::systems::spawner::EnemyReserve;

pub fn build(
    world: &World,
    time: SimTime,
    round: RoundState,
    reserve: &EnemyReserve,
    events: Vec<GameEvent>,
) -> FrameSnapshot {
    let mut sprites = Vec::new();
    let mut player_view = PlayerView::default();
    let mut enemies_alive = 0;

    for (_entity, (_player, pos, footprint, health)) in world
        .query::<(&Player, &Position, &Footprint, &Health)>()
        .iter()
    {
        sprites.push(SpriteView {
            kind: SpriteKind::Player,
            position: *pos,
            footprint: *footprint,
        });
        player_view = PlayerView {
            hit_points: health.current,
            max_hit_points: health.max,
            position: *pos,
        };
    }

    for (_entity, (_enemy, pos, footprint)) in
        world.query::<(&Enemy, &Position, &Footprint)>().iter()
    {
        sprites.push(SpriteView {
            kind: SpriteKind::Enemy,
            position: *pos,
            footprint: *footprint,
        });
        enemies_alive += 1;
    }

    for (_entity, (_bullet, pos, footprint)) in world
        .query::<(&PlayerBullet, &Position, &Footprint)>()
        .iter()
    {
        sprites.push(SpriteView {
            kind: SpriteKind::PlayerBullet,
            position: *pos,
            footprint: *footprint,
        });
    }

    for (_entity, (_bullet, pos, footprint)) in world
        .query::<(&EnemyBullet, &Position, &Footprint)>()
        .iter()
    {
        sprites.push(SpriteView {
            kind: SpriteKind::EnemyBullet,
            position: *pos,
            footprint: *footprint,
        });
    }

    FrameSnapshot {
        time,
        round,
        sprites,
        player: player_view,
        enemies_alive,
        reserve_remaining: reserve.remaining(),
        events,
    }
}
