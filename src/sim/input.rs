//! Keyboard input
//!
//! Key names are canonicalised to a [`Direction`] once; the frame update only
//! ever sees the two held flags in [`InputState`].

use serde::{Deserialize, Serialize};

/// Logical direction of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    None,
}

impl Direction {
    /// Map a DOM `KeyboardEvent.key` value, accepting legacy and modern names
    pub fn from_key(key: &str) -> Self {
        match key {
            "Left" | "ArrowLeft" => Direction::Left,
            "Right" | "ArrowRight" => Direction::Right,
            _ => Direction::None,
        }
    }
}

/// Held-key flags read once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left_pressed: bool,
    pub right_pressed: bool,
}

impl InputState {
    /// Record a key-down; returns false for keys the game ignores
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set(Direction::from_key(key), true)
    }

    /// Record a key-up; returns false for keys the game ignores
    pub fn key_up(&mut self, key: &str) -> bool {
        self.set(Direction::from_key(key), false)
    }

    fn set(&mut self, direction: Direction, pressed: bool) -> bool {
        match direction {
            Direction::Left => self.left_pressed = pressed,
            Direction::Right => self.right_pressed = pressed,
            Direction::None => return false,
        }
        true
    }

    /// Input holding exactly one direction
    pub fn holding(direction: Direction) -> Self {
        Self {
            left_pressed: direction == Direction::Left,
            right_pressed: direction == Direction::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_spellings() {
        assert_eq!(Direction::from_key("Left"), Direction::Left);
        assert_eq!(Direction::from_key("ArrowLeft"), Direction::Left);
        assert_eq!(Direction::from_key("Right"), Direction::Right);
        assert_eq!(Direction::from_key("ArrowRight"), Direction::Right);
        assert_eq!(Direction::from_key("ArrowUp"), Direction::None);
        assert_eq!(Direction::from_key("a"), Direction::None);
    }

    #[test]
    fn test_key_down_up() {
        let mut input = InputState::default();
        assert!(input.key_down("ArrowLeft"));
        assert!(input.left_pressed);
        assert!(!input.right_pressed);

        assert!(input.key_up("Left"));
        assert!(!input.left_pressed);
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut input = InputState::default();
        assert!(!input.key_down("Space"));
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn test_holding() {
        let input = InputState::holding(Direction::Right);
        assert!(input.right_pressed && !input.left_pressed);
        assert_eq!(InputState::holding(Direction::None), InputState::default());
    }
}
