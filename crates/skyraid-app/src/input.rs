//! Keyboard input mapping — held keys to a per-tick `Command`.
//!
//! The simulation never polls hardware; whatever windowing layer is in
//! use reports key presses and releases here, and once per tick the
//! held set is folded into a movement vector plus fire intent.

use std::collections::HashSet;

use glam::Vec2;

use skyraid_core::commands::Command;
use skyraid_core::constants::PLAYER_IMPULSE;

/// A logical key, independent of any windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Char(char),
}

/// Configurable key-to-action mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
    pub fire: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: Key::Up,
            down: Key::Down,
            left: Key::Left,
            right: Key::Right,
            fire: Key::Space,
        }
    }
}

/// The set of currently held keys.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Fold the held set into this tick's command: the sum of the
    /// active directional impulses, each of fixed magnitude. Opposite
    /// keys cancel to zero movement, which is valid input.
    pub fn command(&self, bindings: &KeyBindings) -> Command {
        let mut movement = Vec2::ZERO;
        if self.is_held(bindings.up) {
            movement.y -= PLAYER_IMPULSE;
        }
        if self.is_held(bindings.down) {
            movement.y += PLAYER_IMPULSE;
        }
        if self.is_held(bindings.left) {
            movement.x -= PLAYER_IMPULSE;
        }
        if self.is_held(bindings.right) {
            movement.x += PLAYER_IMPULSE;
        }

        Command::new(movement, self.is_held(bindings.fire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_direction() {
        let bindings = KeyBindings::default();
        let mut input = InputState::new();
        input.press(Key::Left);

        let cmd = input.command(&bindings);
        assert_eq!(cmd.movement, Vec2::new(-PLAYER_IMPULSE, 0.0));
        assert!(!cmd.fire);
    }

    #[test]
    fn test_diagonal_sums_impulses() {
        let bindings = KeyBindings::default();
        let mut input = InputState::new();
        input.press(Key::Up);
        input.press(Key::Right);

        let cmd = input.command(&bindings);
        assert_eq!(cmd.movement, Vec2::new(PLAYER_IMPULSE, -PLAYER_IMPULSE));
    }

    #[test]
    fn test_opposite_keys_cancel_to_zero() {
        let bindings = KeyBindings::default();
        let mut input = InputState::new();
        input.press(Key::Left);
        input.press(Key::Right);
        input.press(Key::Space);

        let cmd = input.command(&bindings);
        assert_eq!(cmd.movement, Vec2::ZERO);
        assert!(cmd.fire);
    }

    #[test]
    fn test_release_clears_key() {
        let bindings = KeyBindings::default();
        let mut input = InputState::new();
        input.press(Key::Space);
        input.release(Key::Space);

        assert!(!input.command(&bindings).fire);
    }

    #[test]
    fn test_rebinding() {
        let bindings = KeyBindings {
            fire: Key::Char('z'),
            ..Default::default()
        };
        let mut input = InputState::new();
        input.press(Key::Char('z'));

        assert!(input.command(&bindings).fire);
    }
}
