//! Arcade entry point
//!
//! Mounts the snake, flappy, pong and automaton canvases in the browser. The native
//! build runs the same simulations headless on a simulated clock.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use arcade_sim::highscores::ArcadeGame;
    use arcade_sim::persistence::{KeyValueStore, LocalStore, MemoryStore};
    use arcade_sim::consts::{PONG_FPS, SURFACE_SIZE_F};
    use arcade_sim::platform::{clock_seed, document_visible};
    use arcade_sim::renderer::{CanvasSurface, Render};
    use arcade_sim::{BestScores, FlappyGame, LifeGame, PongGame, Runner, Settings, SnakeGame};

    /// A scheduled `requestAnimationFrame` callback, cancelled when dropped
    struct FrameHandle {
        id: i32,
    }

    impl FrameHandle {
        fn request(arcade: Rc<RefCell<Arcade>>) -> Option<Self> {
            let window = web_sys::window()?;
            let callback = Closure::once_into_js(move |time: f64| on_frame(arcade, time));
            match window.request_animation_frame(callback.unchecked_ref()) {
                Ok(id) => Some(Self { id }),
                Err(e) => {
                    log::error!("requestAnimationFrame failed: {:?}", e);
                    None
                }
            }
        }
    }

    impl Drop for FrameHandle {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(self.id);
            }
        }
    }

    /// All mounted views
    struct Arcade {
        snake: Runner<SnakeGame>,
        flappy: Runner<FlappyGame>,
        pong: Runner<PongGame>,
        life: Runner<LifeGame>,
        snake_surface: Option<CanvasSurface>,
        flappy_surface: Option<CanvasSurface>,
        pong_surface: Option<CanvasSurface>,
        life_surface: Option<CanvasSurface>,
        store: Box<dyn KeyValueStore>,
        best: BestScores,
        settings: Settings,
        frame: Option<FrameHandle>,
    }

    impl Arcade {
        fn new(store: Box<dyn KeyValueStore>) -> Self {
            let settings = Settings::load(store.as_ref());
            let best = BestScores::load(store.as_ref());
            let fps = settings.target_fps;

            let snake = SnakeGame::new(clock_seed(1))
                .with_best(best.get(ArcadeGame::Snake) as usize);
            let flappy = FlappyGame::new(clock_seed(2))
                .with_best(best.get(ArcadeGame::Flappy))
                .with_spawn_interval(settings.spawn_interval_ms);
            let pong = PongGame::new().with_best(best.get(ArcadeGame::Pong));
            // The automaton is a backdrop; it only pauses with the document
            let life = LifeGame::from_settings(clock_seed(3), &settings);

            Self {
                snake: Runner::new(snake, fps),
                flappy: Runner::new(flappy, fps),
                pong: Runner::new(pong, PONG_FPS),
                life: Runner::new(life, fps).with_focus(true),
                snake_surface: surface("snake-canvas"),
                flappy_surface: surface("flappy-canvas"),
                pong_surface: surface("pong-canvas"),
                life_surface: surface("life-canvas"),
                store,
                best,
                settings,
                frame: None,
            }
        }

        fn set_visible(&mut self, visible: bool) {
            self.snake.set_visible(visible);
            self.flappy.set_visible(visible);
            self.pong.set_visible(visible);
            self.life.set_visible(visible);
        }

        /// Focus one cabinet; `None` unfocuses all of them
        fn focus(&mut self, game: Option<ArcadeGame>) {
            self.snake.set_focused(game == Some(ArcadeGame::Snake));
            self.flappy.set_focused(game == Some(ArcadeGame::Flappy));
            self.pong.set_focused(game == Some(ArcadeGame::Pong));
        }

        /// Route a key to the focused cabinet, falling back to the automaton
        fn key_down(&mut self, key: &str) -> bool {
            if self.snake.is_focused() {
                self.snake.key_down(key)
            } else if self.flappy.is_focused() {
                self.flappy.key_down(key)
            } else {
                self.life.key_down(key)
            }
        }

        fn tick(&mut self, now: f64) {
            if let Some(outcome) = self.snake.frame(now) {
                if outcome.is_terminal() {
                    let best = self.snake.sim().state().best as u32;
                    self.record(ArcadeGame::Snake, best);
                }
                if let Some(s) = self.snake_surface.as_mut() {
                    self.snake.sim().state().render(s);
                }
            }
            if let Some(outcome) = self.flappy.frame(now) {
                if outcome.is_terminal() {
                    let best = self.flappy.sim().state().best;
                    self.record(ArcadeGame::Flappy, best);
                }
                if let Some(s) = self.flappy_surface.as_mut() {
                    self.flappy.sim().state().render(s);
                }
            }
            if let Some(outcome) = self.pong.frame(now) {
                if outcome.is_terminal() {
                    let best = self.pong.sim().state().best;
                    self.record(ArcadeGame::Pong, best);
                }
                if let Some(s) = self.pong_surface.as_mut() {
                    self.pong.sim().state().render(s);
                }
            }
            if self.life.frame(now).is_some()
                && let Some(s) = self.life_surface.as_mut()
            {
                self.life.sim().grid().render(s);
            }
        }

        fn render_all(&mut self) {
            if let Some(s) = self.snake_surface.as_mut() {
                self.snake.sim().state().render(s);
            }
            if let Some(s) = self.flappy_surface.as_mut() {
                self.flappy.sim().state().render(s);
            }
            if let Some(s) = self.pong_surface.as_mut() {
                self.pong.sim().state().render(s);
            }
            if let Some(s) = self.life_surface.as_mut() {
                self.life.sim().grid().render(s);
            }
        }

        fn record(&mut self, game: ArcadeGame, score: u32) {
            if !self.best.record(game, score) || !self.settings.persist_best {
                return;
            }
            log::info!("New best for {}: {}", game.as_str(), score);
            if let Err(e) = self.best.save(self.store.as_mut()) {
                log::warn!("Could not save best scores: {}", e);
            }
        }
    }

    fn canvas(id: &str) -> Option<HtmlCanvasElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()
    }

    fn surface(id: &str) -> Option<CanvasSurface> {
        let surface = canvas(id).and_then(|c| CanvasSurface::new(&c));
        if surface.is_none() {
            log::warn!("No 2D canvas #{}, view not mounted", id);
        }
        surface
    }

    /// `time` is the monotonic frame timestamp, immune to wall clock changes
    fn on_frame(arcade: Rc<RefCell<Arcade>>, time: f64) {
        {
            let mut a = arcade.borrow_mut();
            // This callback already ran; cancelling its id would be a no-op
            if let Some(handle) = a.frame.take() {
                std::mem::forget(handle);
            }
            if !document_visible() {
                return;
            }
            a.tick(time);
        }
        let handle = FrameHandle::request(arcade.clone());
        arcade.borrow_mut().frame = handle;
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Arcade starting...");

        let store: Box<dyn KeyValueStore> = match LocalStore::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("{}; best scores will not persist", e);
                Box::new(MemoryStore::new())
            }
        };

        let arcade = Rc::new(RefCell::new(Arcade::new(store)));
        {
            let mut a = arcade.borrow_mut();
            a.set_visible(document_visible());
            a.render_all();
        }

        setup_focus_handlers(arcade.clone());
        setup_pointer(arcade.clone());
        setup_keyboard(arcade.clone());
        setup_visibility(arcade.clone());

        if document_visible() {
            let handle = FrameHandle::request(arcade.clone());
            arcade.borrow_mut().frame = handle;
        }

        log::info!("Arcade running!");
    }

    fn setup_focus_handlers(arcade: Rc<RefCell<Arcade>>) {
        for (id, game) in [
            ("snake-canvas", ArcadeGame::Snake),
            ("flappy-canvas", ArcadeGame::Flappy),
            ("pong-canvas", ArcadeGame::Pong),
        ] {
            let Some(canvas) = canvas(id) else {
                continue;
            };
            let arcade = arcade.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                arcade.borrow_mut().focus(Some(game));
                log::info!("Focused {}", game.as_str());
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur (click outside the page)
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            arcade.borrow_mut().focus(None);
            log::info!("Cabinets unfocused (window blur)");
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Pong follows the pointer over its canvas and serves on release
    fn setup_pointer(arcade: Rc<RefCell<Arcade>>) {
        let Some(canvas) = canvas("pong-canvas") else {
            return;
        };

        {
            let arcade = arcade.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                if rect.width() <= 0.0 || rect.height() <= 0.0 {
                    return;
                }
                let x = (f64::from(event.client_x()) - rect.left()) / rect.width();
                let y = (f64::from(event.client_y()) - rect.top()) / rect.height();
                arcade
                    .borrow_mut()
                    .pong
                    .pointer_move(x as f32 * SURFACE_SIZE_F, y as f32 * SURFACE_SIZE_F);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            arcade.borrow_mut().pong.pointer_up();
        });
        let _ = canvas.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_keyboard(arcade: Rc<RefCell<Arcade>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            // Arrow keys and space would otherwise scroll the page
            if arcade.borrow_mut().key_down(&event.key()) {
                event.prevent_default();
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_visibility(arcade: Rc<RefCell<Arcade>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let visible = document_visible();
            let mut a = arcade.borrow_mut();
            a.set_visible(visible);
            if visible {
                log::info!("Document visible, resuming");
                if a.frame.is_none() {
                    drop(a);
                    let handle = FrameHandle::request(arcade.clone());
                    arcade.borrow_mut().frame = handle;
                }
            } else {
                log::info!("Document hidden, releasing frame callback");
                a.frame = None;
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use arcade_sim::consts::{BALL_SIZE, PONG_FPS};
    use arcade_sim::highscores::ArcadeGame;
    use arcade_sim::persistence::MemoryStore;
    use arcade_sim::platform::clock_seed;
    use arcade_sim::{BestScores, FlappyGame, LifeGame, PongGame, Runner, Settings, SnakeGame};

    env_logger::init();
    log::info!("Arcade (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in the browser");

    let mut store = MemoryStore::new();
    let settings = Settings::load(&store);
    let mut best = BestScores::load(&store);

    let mut snake = Runner::new(SnakeGame::new(clock_seed(1)), settings.target_fps).with_focus(true);
    let mut flappy = Runner::new(
        FlappyGame::new(clock_seed(2)).with_spawn_interval(settings.spawn_interval_ms),
        settings.target_fps,
    )
    .with_focus(true);
    let mut life = Runner::new(LifeGame::from_settings(clock_seed(3), &settings), settings.target_fps)
        .with_focus(true);
    let mut pong = Runner::new(PongGame::new(), PONG_FPS).with_focus(true);

    // Ten simulated seconds of 60 Hz display frames
    let mut crashes = (0u32, 0u32, 0u32);
    for i in 0..600u32 {
        let now = f64::from(i) * 1000.0 / 60.0;
        if i % 24 == 0 {
            snake.key_down(if i % 48 == 0 { "ArrowDown" } else { "ArrowRight" });
        }
        if i % 9 == 0 {
            flappy.key_down(" ");
        }
        if snake.frame(now).is_some_and(|o| o.is_terminal()) {
            crashes.0 += 1;
            best.record(ArcadeGame::Snake, snake.sim().state().best as u32);
        }
        if flappy.frame(now).is_some_and(|o| o.is_terminal()) {
            crashes.1 += 1;
            best.record(ArcadeGame::Flappy, flappy.sim().state().best);
        }
        // Pointer tracks the ball, serving again after every miss
        let ball_y = pong.sim().state().ball.pos.y + BALL_SIZE / 2.0;
        pong.pointer_move(50.0, ball_y);
        if !pong.sim().state().playing {
            pong.pointer_up();
        }
        if pong.frame(now).is_some_and(|o| o.is_terminal()) {
            crashes.2 += 1;
            best.record(ArcadeGame::Pong, pong.sim().state().best);
        }
        life.frame(now);
    }

    log::info!(
        "snake: {} ticks, length {}, {} crashes",
        snake.ticks(),
        snake.sim().state().length,
        crashes.0
    );
    log::info!(
        "flappy: {} ticks, score {}, {} blocks on screen, {} crashes",
        flappy.ticks(),
        flappy.sim().state().score,
        flappy.sim().state().blocks.len(),
        crashes.1
    );
    log::info!(
        "pong: {} ticks, rally {}, {} misses",
        pong.ticks(),
        pong.sim().state().score,
        crashes.2
    );
    log::info!(
        "automaton: {} ticks, {} cells alive",
        life.ticks(),
        life.sim().grid().population()
    );

    if let Err(e) = best.save(&mut store) {
        log::warn!("Could not save best scores: {}", e);
    }
    log::info!("Best scores: {:?}", best);
}
