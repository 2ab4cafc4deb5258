//! Flappy Canvas entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use flappy_canvas::Settings;
    use flappy_canvas::audio::AudioManager;
    use flappy_canvas::highscores::{load_best, save_best};
    use flappy_canvas::platform::{LocalStorage, client_to_playfield};
    use flappy_canvas::renderer::{CanvasSurface, draw, draw_fps};
    use flappy_canvas::sim::{GameEvent, GameState, TickInput, tick};
    use glam::Vec2;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        audio: AudioManager,
        storage: LocalStorage,
        settings: Settings,
        input: TickInput,
        /// Window currently unfocused
        blurred: bool,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        /// One animation frame: tick, react to events, draw
        fn frame(&mut self, time: f64) {
            let input = self.input.clone();
            tick(&mut self.state, &input);
            // Clear one-shot inputs after processing
            self.input.consume_tap();

            let events = self.state.drain_events();
            self.handle_events(&events);

            draw(&mut self.surface, &self.state);
            self.track_fps(time);
            if self.settings.show_fps {
                draw_fps(&mut self.surface, self.fps);
            }
        }

        fn handle_events(&mut self, events: &[GameEvent]) {
            self.audio.play_events(events);
            for event in events {
                match event {
                    GameEvent::Started => log::info!("Run started"),
                    GameEvent::Scored { value, best } => {
                        log::debug!("Score {} (best {})", value, best);
                        save_best(&mut self.storage, *best);
                    }
                    GameEvent::HitPipe | GameEvent::HitGround => {
                        log::info!(
                            "Game over ({:?}): score {}, best {}",
                            event,
                            self.state.score.value,
                            self.state.score.best
                        );
                    }
                    GameEvent::Restarted => log::info!("Restarted"),
                    GameEvent::Flapped => {}
                }
            }
        }

        fn track_fps(&mut self, time: f64) {
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        fn apply_mute(&mut self) {
            let muted = self.settings.muted || (self.blurred && self.settings.mute_on_blur);
            self.audio.set_volume(self.settings.sfx_level());
            self.audio.set_muted(muted);
        }

        fn save_settings(&mut self) {
            self.settings.save(&mut self.storage);
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Flappy Canvas starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("bird")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let surface = CanvasSurface::new(&canvas).await?;

        let storage = LocalStorage::new();
        let settings = Settings::load(&storage);
        let best = load_best(&storage);
        let seed = js_sys::Date::now() as u64;

        let mut audio = AudioManager::new(settings.sfx_level());
        audio.set_muted(settings.muted);

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, best),
            surface,
            audio,
            storage,
            input: TickInput {
                autopilot: settings.autopilot,
                ..Default::default()
            },
            settings,
            blurred: false,
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone())?;
        setup_focus_handlers(&window, game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Flappy Canvas running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Click/tap - buffered until the next frame
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let pos = client_to_playfield(
                    Vec2::new(event.client_x() as f32, event.client_y() as f32),
                    Vec2::new(rect.left() as f32, rect.top() as f32),
                    Vec2::new(rect.width() as f32, rect.height() as f32),
                );
                let mut g = game.borrow_mut();
                g.input.tap = true;
                g.input.tap_pos = Some(pos);
            });
            canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " | "Enter" | "ArrowUp" => {
                        event.prevent_default();
                        g.input.tap = true;
                    }
                    "i" | "I" => {
                        g.settings.autopilot = !g.settings.autopilot;
                        g.input.autopilot = g.settings.autopilot;
                        log::info!("Autopilot: {}", g.settings.autopilot);
                        g.save_settings();
                    }
                    "f" | "F" => {
                        g.settings.show_fps = !g.settings.show_fps;
                        g.save_settings();
                    }
                    "m" | "M" => {
                        g.settings.muted = !g.settings.muted;
                        g.apply_mute();
                        log::info!("Muted: {}", g.settings.muted);
                        g.save_settings();
                    }
                    _ => {}
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_focus_handlers(
        window: &web_sys::Window,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Window blur (click outside, tab switch)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                g.blurred = true;
                g.apply_mute();
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                g.blurred = false;
                g.apply_mute();
            });
            window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        web_sys::console::error_1(&e);
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use flappy_canvas::highscores::{load_best, save_best};
    use flappy_canvas::platform::MemoryStorage;
    use flappy_canvas::sim::{GameEvent, GameState, TickInput, tick};

    /// Summary of a headless autopilot session
    pub struct Report {
        pub frames: u64,
        pub runs: u32,
        pub best: u32,
    }

    /// Let the autopilot play for `frames` frames
    pub fn run(seed: u64, frames: u64) -> Report {
        let mut storage = MemoryStorage::new();
        let mut state = GameState::new(seed, load_best(&storage));
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };

        let mut runs = 0;
        for _ in 0..frames {
            tick(&mut state, &input);
            for event in state.drain_events() {
                match event {
                    GameEvent::Scored { value, best } => {
                        log::debug!("Score {} (best {})", value, best);
                        save_best(&mut storage, best);
                    }
                    GameEvent::HitPipe | GameEvent::HitGround => {
                        runs += 1;
                        log::info!(
                            "Run {} over ({:?}) at frame {}: score {}",
                            runs,
                            event,
                            state.frames,
                            state.score.value
                        );
                    }
                    _ => {}
                }
            }
        }

        Report {
            frames,
            runs,
            best: load_best(&storage),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    env_logger::init();
    log::info!("Flappy Canvas (native) starting...");
    log::info!("Native mode runs the autopilot headlessly - build for wasm32 to play");

    let frames = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(10_000);
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let report = headless::run(seed, frames);
    println!(
        "\nSimulated {} frames (seed {}): {} runs ended, best score {}",
        report.frames, seed, report.runs, report.best
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
