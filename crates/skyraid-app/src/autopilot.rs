//! Scripted command source for headless demo runs.
//!
//! Stands in for the keyboard collaborator: sweeps the player back and
//! forth across the bottom of the field with the fire key held.

use glam::Vec2;

use skyraid_core::commands::Command;
use skyraid_core::constants::PLAYER_IMPULSE;
use skyraid_core::state::FrameSnapshot;
use skyraid_core::types::Field;

use crate::game_loop::CommandSource;

/// Margin from the field edge at which the sweep reverses.
const TURN_MARGIN: f32 = 40.0;

pub struct Autopilot {
    field: Field,
    direction: f32,
}

impl Autopilot {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            direction: 1.0,
        }
    }
}

impl CommandSource for Autopilot {
    fn poll(&mut self, frame: &FrameSnapshot) -> Command {
        let x = frame.player.position.0.x;
        if x <= TURN_MARGIN {
            self.direction = 1.0;
        } else if x >= self.field.width - TURN_MARGIN {
            self.direction = -1.0;
        }

        Command::new(Vec2::new(self.direction * PLAYER_IMPULSE, 0.0), true)
    }
}
