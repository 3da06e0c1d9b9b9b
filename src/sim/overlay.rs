//! Pause / overlay state machine
//!
//! While an overlay is visible the simulation does not tick. Level-up notices
//! raised alongside a catch wait in a queue and take over the screen the
//! moment the catch overlay is dismissed.

use std::collections::VecDeque;

/// Image shown next to an overlay message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayImage {
    Catch,
    LevelUp,
}

impl OverlayImage {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayImage::Catch => "catch",
            OverlayImage::LevelUp => "levelup",
        }
    }
}

/// A modal message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub message: String,
    pub image: OverlayImage,
}

impl Overlay {
    pub fn caught(species: &str) -> Self {
        Self {
            message: format!("You caught a {}!", species),
            image: OverlayImage::Catch,
        }
    }

    pub fn level_up(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            image: OverlayImage::LevelUp,
        }
    }
}

/// Inputs to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    /// A fish was caught, possibly completing a level
    Caught {
        species: String,
        level_up: Option<String>,
    },
    /// The dismiss key was pressed
    Dismiss,
}

/// Whether gameplay is running or held behind an overlay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Running,
    Paused {
        current: Overlay,
        /// Level-up notices waiting for `current` to close
        queued: VecDeque<Overlay>,
    },
}

impl OverlayState {
    pub fn is_paused(&self) -> bool {
        matches!(self, OverlayState::Paused { .. })
    }

    /// The overlay on screen, if any
    pub fn visible(&self) -> Option<&Overlay> {
        match self {
            OverlayState::Running => None,
            OverlayState::Paused { current, .. } => Some(current),
        }
    }

    /// Number of overlays waiting behind the visible one
    pub fn queued_len(&self) -> usize {
        match self {
            OverlayState::Running => 0,
            OverlayState::Paused { queued, .. } => queued.len(),
        }
    }

    /// Apply one event (transition table)
    pub fn apply(&mut self, event: OverlayEvent) {
        let state = std::mem::take(self);
        *self = match (state, event) {
            (OverlayState::Running, OverlayEvent::Caught { species, level_up }) => {
                OverlayState::Paused {
                    current: Overlay::caught(&species),
                    queued: level_up.into_iter().map(Overlay::level_up).collect(),
                }
            }
            // Several fish in one tick: newest species wins, notices accumulate
            (OverlayState::Paused { mut queued, .. }, OverlayEvent::Caught { species, level_up }) => {
                queued.extend(level_up.map(Overlay::level_up));
                OverlayState::Paused {
                    current: Overlay::caught(&species),
                    queued,
                }
            }
            (OverlayState::Paused { mut queued, .. }, OverlayEvent::Dismiss) => {
                match queued.pop_front() {
                    Some(next) => OverlayState::Paused {
                        current: next,
                        queued,
                    },
                    None => OverlayState::Running,
                }
            }
            (OverlayState::Running, OverlayEvent::Dismiss) => OverlayState::Running,
        };
    }
}
