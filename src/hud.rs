//! HUD sinks
//!
//! The scoreboard and the overlay panel live outside the simulation. The
//! driver pushes changes to them; they never read game state themselves.

use crate::sim::{GameState, Overlay, OverlayImage};

/// Receives the scoreboard line
pub trait ScoreboardSink {
    fn set_text(&mut self, text: &str);
}

/// Shows and hides the modal overlay
pub trait OverlaySink {
    fn show(&mut self, message: &str, image: OverlayImage);
    fn hide(&mut self);
}

/// Scoreboard text for a score/level pair
pub fn scoreboard_text(score: u32, level: u32) -> String {
    format!("Fish: {} | Level: {}", score, level)
}

/// Remembers what the sinks currently show so only changes are pushed
#[derive(Debug, Default)]
pub struct HudSync {
    shown_score: Option<(u32, u32)>,
    shown_overlay: Option<Overlay>,
}

impl HudSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push score/level and overlay changes
    pub fn sync<B: ScoreboardSink, O: OverlaySink>(
        &mut self,
        state: &GameState,
        scoreboard: &mut B,
        overlay: &mut O,
    ) {
        let score = (state.score, state.level);
        if self.shown_score != Some(score) {
            scoreboard.set_text(&scoreboard_text(score.0, score.1));
            self.shown_score = Some(score);
        }

        let visible = state.overlay.visible();
        if visible != self.shown_overlay.as_ref() {
            match visible {
                Some(o) => overlay.show(&o.message, o.image),
                None => overlay.hide(),
            }
            self.shown_overlay = visible.cloned();
        }
    }
}
