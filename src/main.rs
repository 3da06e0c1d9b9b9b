//! Slope Fisher entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use slope_fisher::input::InputEvent;
    use slope_fisher::platform::web::{
        ASSET_BASE, DomOverlay, DomScoreboard, load_assets, read_json_block,
    };
    use slope_fisher::renderer::CanvasSurface;
    use slope_fisher::sim::GameState;
    use slope_fisher::{Frame, Game, Settings, Tuning};

    type WebGame = Game<CanvasSurface, DomScoreboard, DomOverlay>;

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Slope Fisher starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let tuning = read_json_block(&document, "tuning")
            .map(|json| Tuning::from_json_or_default(&json))
            .unwrap_or_default();
        let settings = read_json_block(&document, "settings")
            .map(|json| Settings::from_json_or_default(&json))
            .unwrap_or_default();

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // Every sprite must be in memory before the first frame
        let assets = match load_assets(ASSET_BASE).await {
            Ok(assets) => assets,
            Err(e) => {
                log::error!("Cannot start: {}", e);
                return;
            }
        };

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let seed = js_sys::Date::now() as u64;
        let bounds = Vec2::new(canvas.width() as f32, canvas.height() as f32);
        let state = match GameState::new(seed, tuning, bounds, &assets) {
            Ok(state) => state,
            Err(e) => {
                log::error!("Cannot start: {}", e);
                return;
            }
        };

        let Some(scoreboard) = DomScoreboard::from_document(&document, "scoreboard") else {
            log::error!("Cannot start: #scoreboard element missing");
            return;
        };
        let Some(overlay) = DomOverlay::from_document(&document) else {
            log::error!("Cannot start: overlay elements missing");
            return;
        };

        let game = Rc::new(RefCell::new(Game::new(
            state,
            assets,
            settings,
            CanvasSurface::new(canvas, ctx),
            scoreboard,
            overlay,
        )));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_shutdown(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Slope Fisher running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<WebGame>>) {
        let window = web_sys::window().unwrap();

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                if let Some(input) = InputEvent::from_key(&event.key(), pressed) {
                    event.prevent_default();
                    game.borrow_mut().handle_input(input);
                }
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_shutdown(game: Rc<RefCell<WebGame>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().stop();
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<WebGame>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<WebGame>>) {
        let frame = game.borrow_mut().frame();
        match frame {
            Frame::Continue => request_animation_frame(game),
            Frame::Stop => log::info!("Game loop stopped"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use slope_fisher::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use slope_fisher::hud::{OverlaySink, ScoreboardSink};
    use slope_fisher::input::{Direction, InputEvent};
    use slope_fisher::renderer::Surface;
    use slope_fisher::sim::{Aabb, GameState, OverlayImage};
    use slope_fisher::{AssetError, AssetTable, Frame, Game, Settings, Tuning};

    /// Surface that only counts draw calls
    #[derive(Default)]
    pub struct NullSurface {
        pub draws: u64,
    }

    impl Surface for NullSurface {
        type Image = ();

        fn size(&self) -> Vec2 {
            Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT)
        }

        fn clear(&mut self) {}

        fn draw_image(&mut self, _image: &(), _rect: Aabb, _opacity: f32) {
            self.draws += 1;
        }

        fn fill_rect(&mut self, _rect: Aabb, _rgba: [f32; 4]) {
            self.draws += 1;
        }
    }

    struct LogScoreboard;

    impl ScoreboardSink for LogScoreboard {
        fn set_text(&mut self, text: &str) {
            log::info!("[scoreboard] {}", text);
        }
    }

    struct LogOverlay;

    impl OverlaySink for LogOverlay {
        fn show(&mut self, message: &str, image: OverlayImage) {
            log::info!("[overlay:{}] {}", image.as_str(), message);
        }

        fn hide(&mut self) {
            log::debug!("[overlay] hidden");
        }
    }

    /// Run a seeded session with a scripted weave and auto-dismissed overlays
    pub fn run(seed: u64, frames: u64) -> Result<(), AssetError> {
        let assets = AssetTable::with_uniform_size(64.0, 64.0);
        assets.require_all()?;
        let bounds = Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT);
        let state = GameState::new(seed, Tuning::default(), bounds, &assets)?;
        let mut game = Game::new(
            state,
            assets,
            Settings::default(),
            NullSurface::default(),
            LogScoreboard,
            LogOverlay,
        );

        for frame in 0..frames {
            if game.state.is_paused() {
                game.handle_input(InputEvent::Dismiss);
            }
            match frame % 120 {
                0 => game.handle_input(InputEvent::MoveBegin(Direction::Left)),
                40 => game.handle_input(InputEvent::MoveEnd(Direction::Left)),
                60 => game.handle_input(InputEvent::MoveBegin(Direction::Right)),
                100 => game.handle_input(InputEvent::MoveEnd(Direction::Right)),
                _ => {}
            }
            if game.frame() == Frame::Stop {
                break;
            }
        }
        game.stop();

        log::info!(
            "Headless run finished: {} ticks, {} draw calls, fish {}, level {}",
            game.state.time_ticks,
            game.surface().draws,
            game.state.score,
            game.state.level
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Slope Fisher (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let frames = args.next().and_then(|a| a.parse().ok()).unwrap_or(3600);
    let seed = args.next().and_then(|a| a.parse().ok()).unwrap_or(12345);

    if let Err(e) = headless::run(seed, frames) {
        log::error!("Headless run failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
