//! Discrete input events
//!
//! The platform layer turns key presses into these; the core never polls
//! hardware state.

/// Horizontal move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Input delivered to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveBegin(Direction),
    MoveEnd(Direction),
    /// Close the visible overlay
    Dismiss,
}

/// Key that closes overlays
pub const DISMISS_KEY: &str = "Enter";

impl InputEvent {
    /// Map a `KeyboardEvent.key` value. Dismiss fires on press only.
    pub fn from_key(key: &str, pressed: bool) -> Option<Self> {
        let direction = match key {
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            _ => None,
        };

        match (direction, pressed) {
            (Some(dir), true) => Some(InputEvent::MoveBegin(dir)),
            (Some(dir), false) => Some(InputEvent::MoveEnd(dir)),
            (None, true) if key == DISMISS_KEY => Some(InputEvent::Dismiss),
            _ => None,
        }
    }
}
