//! Bug Crossing entry point
//!
//! On the web this is the host around the simulation: it owns the canvas,
//! loads the images, captures arrow keys, drives the frame loop and shows
//! the win message. Natively it runs a short scripted session headless.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement, KeyboardEvent,
        MouseEvent,
    };

    use bug_crossing::Settings;
    use bug_crossing::consts::*;
    use bug_crossing::renderer::{Canvas, all_sprites, render_frame};
    use bug_crossing::sim::{GameEvent, GameState, acknowledge_win, handle_key, update_all};

    /// Image elements keyed by resource path
    struct ImageCache {
        images: HashMap<String, HtmlImageElement>,
    }

    impl ImageCache {
        fn load(paths: &[&str]) -> Result<Self, JsValue> {
            let mut images = HashMap::with_capacity(paths.len());
            for &path in paths {
                let img = HtmlImageElement::new()?;
                img.set_src(path);
                images.insert(path.to_string(), img);
            }
            Ok(Self { images })
        }

        fn get(&self, path: &str) -> Option<&HtmlImageElement> {
            self.images.get(path)
        }
    }

    /// 2D context plus images, as a draw target for the simulation
    struct CanvasTarget<'a> {
        ctx: &'a CanvasRenderingContext2d,
        images: &'a ImageCache,
    }

    impl Canvas for CanvasTarget<'_> {
        fn draw_sprite(&mut self, sprite: &str, x: f32, y: f32) {
            match self.images.get(sprite) {
                Some(img) if img.complete() => {
                    if let Err(e) =
                        self.ctx
                            .draw_image_with_html_image_element(img, x as f64, y as f64)
                    {
                        log::warn!("Failed to draw {}: {:?}", sprite, e);
                    }
                }
                // Still loading
                Some(_) => {}
                None => log::warn!("No image loaded for {}", sprite),
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        ctx: CanvasRenderingContext2d,
        images: ImageCache,
        last_time: f64,
    }

    impl Game {
        /// Step the simulation and draw the frame
        fn frame(&mut self, dt: f32) {
            for event in update_all(&mut self.state, dt) {
                if let GameEvent::PlayerHit { index } = event {
                    log::info!("Caught by bug {}", index);
                }
            }

            self.ctx
                .clear_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
            let mut target = CanvasTarget {
                ctx: &self.ctx,
                images: &self.images,
            };
            render_frame(&self.state, &mut target);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let Some(window) = web_sys::window() else {
            log::error!("No window available");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document available");
            return;
        };

        let query = window.location().search().unwrap_or_default();
        let settings = Settings::from_query(&query);
        let seed = settings.seed_or(js_sys::Date::now() as u64);
        log::info!("Bug Crossing starting: skin={}, seed={}", settings.skin.as_str(), seed);

        let ctx = match setup_canvas(&document) {
            Ok(ctx) => ctx,
            Err(e) => {
                log::error!("Canvas setup failed: {:?}", e);
                return;
            }
        };
        let images = match ImageCache::load(&all_sprites()) {
            Ok(images) => images,
            Err(e) => {
                log::error!("Image setup failed: {:?}", e);
                return;
            }
        };

        let game = Rc::new(RefCell::new(Game {
            state: GameState::from_settings(&settings, seed),
            ctx,
            images,
            last_time: 0.0,
        }));

        setup_keyboard(game.clone());
        request_animation_frame(game);
    }

    fn setup_canvas(document: &Document) -> Result<CanvasRenderingContext2d, JsValue> {
        let canvas: HtmlCanvasElement = match document.get_element_by_id("canvas") {
            Some(el) => el.dyn_into()?,
            None => {
                let el: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
                let body = document
                    .body()
                    .ok_or_else(|| JsValue::from_str("document has no body"))?;
                body.append_child(&el)?;
                el
            }
        };
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?;
        ctx.dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let outcome = handle_key(&mut game.borrow_mut().state, &event.key());
            if outcome == Some(GameEvent::PlayerWon) {
                if let Err(e) = show_win_message(game.clone()) {
                    log::error!("Could not show win message: {:?}", e);
                }
            }
        });
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// "You won" panel; its button acknowledges the win and removes the panel
    fn show_win_message(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let panel = document.create_element("div")?;
        panel.set_class_name("msg msg--show");
        let text = document.create_element("p")?;
        text.set_text_content(Some("You won the game!"));
        let button = document.create_element("button")?;
        button.set_class_name("restart");
        button.set_text_content(Some("Play again"));
        panel.append_child(&text)?;
        panel.append_child(&button)?;
        body.append_child(&panel)?;

        let panel_handle = panel.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            acknowledge_win(&mut game.borrow_mut().state);
            panel_handle.remove();
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();

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
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            g.last_time = time;

            g.frame(dt.clamp(0.0, MAX_FRAME_DT));
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bug_crossing::Settings;
    use bug_crossing::input::Direction;
    use bug_crossing::renderer::{RecordingCanvas, render_frame};
    use bug_crossing::sim::{GameEvent, GameState, acknowledge_win, handle_input, update_all};

    const FRAMES: u32 = 60 * 60;
    const DT: f32 = 1.0 / 60.0;
    /// Frames between scripted "up" presses
    const PRESS_EVERY: u32 = 40;

    env_logger::init();

    // Optional query-style argument, e.g. `skin=boy&seed=7`
    let settings = std::env::args()
        .nth(1)
        .map(|q| Settings::from_query(&q))
        .unwrap_or_default();
    let clock_seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut state = GameState::from_settings(&settings, clock_seed);
    log::info!("Bug Crossing (native, headless) starting with seed {}", state.seed);

    let mut canvas = RecordingCanvas::new();
    let (mut wins, mut hits) = (0u32, 0u32);

    for frame in 0..FRAMES {
        if frame % PRESS_EVERY == 0 && handle_input(&mut state, Direction::Up) == Some(GameEvent::PlayerWon) {
            wins += 1;
            acknowledge_win(&mut state);
        }

        hits += update_all(&mut state, DT)
            .iter()
            .filter(|e| matches!(e, GameEvent::PlayerHit { .. }))
            .count() as u32;

        canvas.clear();
        render_frame(&state, &mut canvas);
    }

    println!(
        "Seed {}: {} frames, {} wins, {} hits, {} sprites in last frame",
        state.seed,
        FRAMES,
        wins,
        hits,
        canvas.calls.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
