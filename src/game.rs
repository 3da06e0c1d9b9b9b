//! Frame driver
//!
//! Called once per display refresh. Frames are not fixed-step: one call is
//! one tick, and the tuning constants assume a typical refresh rate.

use crate::assets::AssetTable;
use crate::hud::{HudSync, OverlaySink, ScoreboardSink};
use crate::input::InputEvent;
use crate::renderer::{Surface, render};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// What the scheduler should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Schedule another frame
    Continue,
    /// The session was stopped; do not reschedule
    Stop,
}

/// Game instance holding all state and collaborators
pub struct Game<S: Surface, B, O> {
    pub state: GameState,
    assets: AssetTable<S::Image>,
    settings: Settings,
    surface: S,
    scoreboard: B,
    overlay: O,
    hud: HudSync,
    running: bool,
}

impl<S, B, O> Game<S, B, O>
where
    S: Surface,
    B: ScoreboardSink,
    O: OverlaySink,
{
    pub fn new(
        state: GameState,
        assets: AssetTable<S::Image>,
        settings: Settings,
        surface: S,
        scoreboard: B,
        overlay: O,
    ) -> Self {
        let mut game = Self {
            state,
            assets,
            settings,
            surface,
            scoreboard,
            overlay,
            hud: HudSync::new(),
            running: true,
        };
        game.sync_hud();
        game
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One-way shutdown; the next frame returns `Frame::Stop`
    pub fn stop(&mut self) {
        if self.running {
            log::info!(
                "Session stopped (score {}, level {})",
                self.state.score,
                self.state.level
            );
        }
        self.running = false;
    }

    /// Apply input between frames
    pub fn handle_input(&mut self, event: InputEvent) {
        self.state.apply_input(event);
        if event == InputEvent::Dismiss {
            self.sync_hud();
        }
    }

    /// Run one frame: tick and render unless paused
    pub fn frame(&mut self) -> Frame {
        if !self.running {
            return Frame::Stop;
        }

        if !self.state.is_paused() {
            let events = tick(&mut self.state, &self.assets);
            for event in &events {
                match event {
                    GameEvent::FishCaught { species, score } => {
                        log::info!("Caught a {} (fish: {})", species, score)
                    }
                    GameEvent::LevelUp { level } => log::info!("Level up -> {}", level),
                    GameEvent::ObstacleHit { score } => log::debug!("Ouch! (fish: {})", score),
                }
            }
            render(&self.state, &self.assets, &self.settings, &mut self.surface);
        }

        self.sync_hud();
        Frame::Continue
    }

    fn sync_hud(&mut self) {
        self.hud
            .sync(&self.state, &mut self.scoreboard, &mut self.overlay);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
