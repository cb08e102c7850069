//! Fruit Rush entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use fruit_rush::assets::SpriteStore;
    use fruit_rush::audio::{AudioManager, SoundEffect};
    use fruit_rush::highscores::HighScores;
    use fruit_rush::renderer::CanvasRenderer;
    use fruit_rush::settings::GameSettings;
    use fruit_rush::sim::{self, GameOutcome, GamePhase, GameState};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        sprites: SpriteStore,
        renderer: CanvasRenderer,
        audio: AudioManager,
        highscores: HighScores,
        /// Handle of the 1 Hz session timer; Some only while armed
        timer_handle: Option<i32>,
        /// Last phase seen, for transition detection
        last_phase: GamePhase,
    }

    impl Game {
        /// Cancel the 1 Hz timer. Safe to call repeatedly; the handle is
        /// taken so the interval can never be cleared twice or leak.
        fn stop_timer(&mut self) {
            if let Some(handle) = self.timer_handle.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(handle);
                }
                log::info!("Session timer cancelled");
            }
        }

        /// Refresh the score/time HUD line.
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&format!(
                    "Score: {} | Time: {}s",
                    self.state.score, self.state.time_left
                )));
            }
        }

        /// React to a phase change from any of the three callbacks (frame,
        /// timer, pointer). The first one to observe Over cancels the timer
        /// and shows the overlay; the others see last_phase already updated.
        fn sync_phase(&mut self) {
            if self.state.phase == self.last_phase {
                return;
            }
            self.last_phase = self.state.phase;

            if let GamePhase::Over(outcome) = self.state.phase {
                // The 1 Hz timer must die with the session
                self.stop_timer();

                match outcome {
                    GameOutcome::TargetReached => self.audio.play(SoundEffect::TargetReached),
                    GameOutcome::TimeExpired => self.audio.play(SoundEffect::TimeUp),
                    // The slice handler already played the blast
                    GameOutcome::BombHit => {}
                }

                let score = self.state.score;
                let rank = self.highscores.add_score(score, outcome, js_sys::Date::now());
                if rank.is_some() {
                    self.highscores.save();
                }
                self.show_game_over(outcome, rank);
                log::info!("Game over: {:?}, final score {}", outcome, score);
            }
        }

        /// Reveal the game-over overlay with message, score, and best.
        fn show_game_over(&self, outcome: GameOutcome, rank: Option<usize>) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("gameOver") {
                let _ = el.set_attribute("class", "");
            }
            if let Some(el) = document.get_element_by_id("gameOverMessage") {
                el.set_text_content(Some(outcome.message()));
            }
            if let Some(el) = document.get_element_by_id("finalScore") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("bestScore") {
                let best = self.highscores.top_score().unwrap_or(self.state.score);
                let text = match rank {
                    Some(1) => format!("New best: {}", self.state.score),
                    _ => format!("Best: {best}"),
                };
                el.set_text_content(Some(&text));
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Fruit Rush starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = GameSettings::load();
        let sprites = SpriteStore::load().expect("Failed to create sprite elements");
        let renderer = CanvasRenderer::new(&canvas).expect("Failed to acquire 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, settings),
            sprites,
            renderer,
            audio: AudioManager::new(),
            highscores: HighScores::load(),
            timer_handle: None,
            last_phase: GamePhase::Loading,
        }));

        log::info!("Session seeded with {}", seed);

        add_slice_listener(&canvas, game.clone(), "mousemove");
        add_slice_listener(&canvas, game.clone(), "click");
        setup_restart_button(game.clone());

        // The loop idles in Loading until the sprites are ready
        request_animation_frame(game);
    }

    /// Forward a pointer event type to the hit tester.
    fn add_slice_listener(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>, event_name: &str) {
        let canvas_clone = canvas.clone();
        let unlock_audio = event_name == "click";
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let mut g = game.borrow_mut();
            if !g.state.is_running() {
                return;
            }
            if unlock_audio {
                g.audio.resume();
            }

            let rect = canvas_clone.get_bounding_client_rect();
            let x = event.client_x() as f32 - rect.left() as f32;
            let y = event.client_y() as f32 - rect.top() as f32;

            let report = sim::check_for_slice(&mut g.state, x, y);
            if report.fruits_sliced > 0 {
                g.audio.play(SoundEffect::SliceFruit);
            }
            if report.bomb_hit {
                g.audio.play(SoundEffect::SliceBomb);
            }
            if report.hit_anything() {
                g.update_hud();
                g.sync_phase();
            }
        });
        let _ = canvas.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// The restart control discards the session and returns to the menu.
    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(btn) = document.get_element_by_id("restartBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                // The timer must not outlive the session it was counting
                game.borrow_mut().stop_timer();
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("index.html");
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Arm the once-per-second session timer, independent of the frame loop.
    fn arm_timer(g: &mut Game, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut g = game.borrow_mut();
            sim::second_tick(&mut g.state);
            g.update_hud();
            g.sync_phase();
        });

        let window = web_sys::window().expect("no window");
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            1000,
        ) {
            Ok(handle) => g.timer_handle = Some(handle),
            Err(e) => log::error!("Failed to start session timer: {:?}", e),
        }
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let keep_going = {
            let mut g = game.borrow_mut();
            match g.state.phase {
                GamePhase::Loading => {
                    if g.sprites.is_ready() {
                        g.state.start();
                        g.last_phase = g.state.phase;
                        arm_timer(&mut g, game.clone());
                        g.update_hud();
                        log::info!("Sprites ready, session running");
                    }
                    true
                }
                GamePhase::Running => {
                    sim::tick(&mut g.state);
                    g.renderer.draw(&g.state, &g.sprites);
                    sim::check_target(&mut g.state);
                    g.update_hud();
                    g.sync_phase();
                    // Halt permanently once the session ends
                    !matches!(g.state.phase, GamePhase::Over(_))
                }
                GamePhase::Over(_) => false,
            }
        };

        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use fruit_rush::settings::GameSettings;
    use fruit_rush::sim::{self, GameState};

    env_logger::init();
    log::info!("Fruit Rush (native) starting headless demo...");

    let settings = GameSettings {
        time_limit: 30,
        target_score: 200,
    };
    let mut state = GameState::new(0xF00D, settings);
    state.start();

    // Auto-slice everything airborne each frame; tick the 1 Hz timer every
    // 60 frames to approximate the browser cadence.
    let mut frames = 0u32;
    while state.is_running() {
        sim::tick(&mut state);
        let targets: Vec<(f32, f32)> = state.visible().map(|p| (p.pos.x, p.pos.y)).collect();
        for (x, y) in targets {
            sim::check_for_slice(&mut state, x, y);
        }
        sim::check_target(&mut state);

        frames += 1;
        if frames % 60 == 0 {
            sim::second_tick(&mut state);
        }
    }

    if let Some(outcome) = state.outcome() {
        log::info!("Demo over after {frames} frames: {outcome:?}");
        println!("{} Final score: {}", outcome.message(), state.score);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
