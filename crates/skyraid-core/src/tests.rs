#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::Command;
    use crate::components::*;
    use crate::enums::{RoundState, SpriteKind};
    use crate::events::GameEvent;
    use crate::state::FrameSnapshot;
    use crate::types::{aabb_overlap, Field, Position, SimTime};

    // ---- Field geometry ----

    #[test]
    fn test_wrap_normalizes_both_axes() {
        let field = Field::new(400.0, 300.0);

        let wrapped = field.wrap(Vec2::new(410.0, -20.0));
        assert_eq!(wrapped, Vec2::new(10.0, 280.0));

        // Already inside: unchanged.
        let inside = field.wrap(Vec2::new(200.0, 150.0));
        assert_eq!(inside, Vec2::new(200.0, 150.0));
    }

    #[test]
    fn test_wrap_result_always_in_range() {
        let field = Field::new(400.0, 300.0);
        for &x in &[-1000.0, -0.5, 0.0, 399.9, 400.0, 12345.0] {
            for &y in &[-900.0, 0.0, 299.9, 300.0, 901.5] {
                let w = field.wrap(Vec2::new(x, y));
                assert!((0.0..400.0).contains(&w.x), "x out of range: {w:?}");
                assert!((0.0..300.0).contains(&w.y), "y out of range: {w:?}");
            }
        }
    }

    #[test]
    fn test_boundary_predicate_per_axis() {
        let field = Field::new(400.0, 300.0);
        let fp = Footprint::new(32.0, 32.0);

        // Center of the field: inside on both axes.
        let center = Vec2::new(200.0, 150.0);
        assert!(!field.outside_x(center, &fp));
        assert!(!field.outside_y(center, &fp));

        // Box poking past the left edge: X only.
        let left = Vec2::new(10.0, 150.0);
        assert!(field.outside_x(left, &fp));
        assert!(!field.outside_y(left, &fp));

        // Box poking past the bottom edge: Y only.
        let bottom = Vec2::new(200.0, 295.0);
        assert!(!field.outside_x(bottom, &fp));
        assert!(field.outside_y(bottom, &fp));

        // Exactly at the half-extent margin counts as inside on the low
        // side and outside on the high side (half-open interval).
        assert!(!field.outside_x(Vec2::new(16.0, 150.0), &fp));
        assert!(field.outside_x(Vec2::new(384.0, 150.0), &fp));
    }

    #[test]
    fn test_aabb_overlap() {
        let big = Footprint::new(32.0, 32.0);
        let small = Footprint::new(8.0, 8.0);

        let a = Vec2::new(100.0, 100.0);
        assert!(aabb_overlap(a, &big, Vec2::new(110.0, 95.0), &small));
        assert!(!aabb_overlap(a, &big, Vec2::new(200.0, 100.0), &small));

        // Touching edges (distance exactly the summed half extents) is
        // not an overlap.
        assert!(!aabb_overlap(a, &big, Vec2::new(120.0, 100.0), &small));
        assert!(aabb_overlap(a, &big, Vec2::new(119.9, 100.0), &small));
    }

    // ---- Components ----

    #[test]
    fn test_health_damage_and_death() {
        let mut health = Health::new(3);
        assert!(!health.is_dead());

        health.apply_damage(1);
        assert_eq!(health.current, 2);
        assert!(!health.is_dead());

        health.apply_damage(2);
        assert_eq!(health.current, 0);
        assert!(health.is_dead());
    }

    #[test]
    fn test_weapon_starts_armed_and_rearms_on_threshold() {
        let props = CraftProperties::player();
        let mut weapon = Weapon::new(props.reload_ticks, props.bullet);
        assert!(weapon.is_armed(), "fresh weapon should be armed");

        weapon.ticks_since_fire = 0;
        for _ in 0..props.reload_ticks - 1 {
            weapon.ticks_since_fire += 1;
            assert!(!weapon.is_armed());
        }
        weapon.ticks_since_fire += 1;
        assert!(weapon.is_armed());
    }

    #[test]
    fn test_property_tables() {
        let player = CraftProperties::player();
        assert!(player.hit_points > 0);
        assert!(player.bullet.damage >= 0);
        // Player bullets travel up (negative Y).
        assert!(player.bullet.velocity.y < 0.0);

        let enemy = CraftProperties::enemy();
        assert!(enemy.hit_points > 0);
        // Enemy bullets travel down (positive Y).
        assert!(enemy.bullet.velocity.y > 0.0);
    }

    // ---- Commands ----

    #[test]
    fn test_idle_command_is_zero_movement() {
        let cmd = Command::idle();
        assert_eq!(cmd.movement, Vec2::ZERO);
        assert!(!cmd.fire);
    }

    #[test]
    fn test_command_serde() {
        let cmd = Command::new(Vec2::new(4.0, -4.0), true);
        let json = serde_json::to_string(&cmd).unwrap();
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);
    }

    // ---- Enums / events / snapshot serde ----

    #[test]
    fn test_round_state_serde_and_terminal() {
        let variants = vec![
            RoundState::Running,
            RoundState::PlayerDefeated,
            RoundState::AllEnemiesCleared,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: RoundState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
        assert!(!RoundState::Running.is_terminal());
        assert!(RoundState::PlayerDefeated.is_terminal());
        assert!(RoundState::AllEnemiesCleared.is_terminal());
    }

    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::EnemySpawned {
                position: Position::new(100.0, 50.0),
            },
            GameEvent::ShotFired {
                kind: SpriteKind::PlayerBullet,
            },
            GameEvent::PlayerHit {
                damage: 1,
                remaining: 2,
            },
            GameEvent::EnemyDestroyed {
                position: Position::new(10.0, 20.0),
            },
            GameEvent::RoundOver {
                outcome: RoundState::AllEnemiesCleared,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = FrameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.round, back.round);
    }

    // ---- Time ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second.
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }
}
