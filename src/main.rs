//! Panic Blob entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use panic_blob::Settings;
    use panic_blob::consts::*;
    use panic_blob::hud::{line_style, status_lines};
    use panic_blob::renderer::{RenderState, ValueNoise, build_scene};
    use panic_blob::sim::{FrameInput, PointerInput, SimState, tick};

    /// Game instance holding all state
    struct Game {
        state: SimState,
        rng: Pcg32,
        noise: ValueNoise,
        settings: Settings,
        render_state: Option<RenderState>,
        pointer: PointerInput,
        last_time: f64,
        /// Client size of the canvas element, for pointer scaling
        client_size: (f32, f32),
        last_score: u32,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            Self {
                state: SimState::new(seed),
                rng: Pcg32::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15),
                noise: ValueNoise::new(seed),
                settings,
                render_state: None,
                pointer: PointerInput::default(),
                last_time: 0.0,
                client_size: (CANVAS_WIDTH, CANVAS_HEIGHT),
                last_score: u32::MAX,
            }
        }

        /// Map element-relative pixels into canvas space
        fn to_canvas(&self, x: f32, y: f32) -> Vec2 {
            let (cw, ch) = self.client_size;
            Vec2::new(x * CANVAS_WIDTH / cw.max(1.0), y * CANVAS_HEIGHT / ch.max(1.0))
        }

        fn update(&mut self, dt_ms: f32) {
            let input = FrameInput {
                pointer: self.pointer,
                dt_ms,
                shake_enabled: self.settings.effective_screen_shake(),
            };
            tick(&mut self.state, &input, &mut self.rng);
        }

        fn render(&mut self) {
            let vertices = build_scene(&self.state, &self.noise, &self.settings);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update the two overlay lines in the DOM when the score changes
        fn update_hud(&mut self) {
            if self.state.score == self.last_score {
                return;
            }
            self.last_score = self.state.score;

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let lines = status_lines(&self.state);
            for (id, text) in ["hud-status", "hud-tip"].iter().zip(lines.iter()) {
                if let Some(el) = document.get_element_by_id(id) {
                    el.set_text_content(Some(text.as_str()));
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Panic Blob starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fixed logical size, scaled for the display
        let dpr = window.device_pixel_ratio();
        let width = (CANVAS_WIDTH as f64 * dpr) as u32;
        let height = (CANVAS_HEIGHT as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = load_settings(&window);
        log::info!(
            "Settings: quality {}, shake {}, vignette {}, reduced motion {}",
            settings.quality.as_str(),
            settings.screen_shake,
            settings.vignette,
            settings.reduced_motion
        );
        place_hud(&document);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));
        game.borrow_mut().client_size = (
            canvas.client_width().max(1) as f32,
            canvas.client_height().max(1) as f32,
        );
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height, (CANVAS_WIDTH, CANVAS_HEIGHT)).await
        {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create device: {:?}", e),
        }

        setup_input_handlers(&canvas, game.clone());

        request_animation_frame(game);
        log::info!("Panic Blob running!");
    }

    /// Query string overrides, with the OS reduced-motion preference as a default
    fn load_settings(window: &web_sys::Window) -> Settings {
        let query = window.location().search().unwrap_or_default();
        let mut settings = Settings::from_query(&query);
        let prefers_reduced = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        if prefers_reduced && !query.contains("reduced_motion=") {
            settings.reduced_motion = true;
        }
        settings
    }

    /// Pin the overlay lines to their canvas positions
    fn place_hud(document: &web_sys::Document) {
        for (i, id) in ["hud-status", "hud-tip"].iter().enumerate() {
            if let Some(el) = document.get_element_by_id(id) {
                let _ = el.set_attribute("style", &line_style(i));
            }
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse down/up/move
        for (event_name, held) in [("mousedown", Some(true)), ("mouseup", Some(false)), ("mousemove", None)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let pos = g.to_canvas(event.offset_x() as f32, event.offset_y() as f32);
                g.pointer.pos = pos;
                if let Some(held) = held {
                    g.pointer.held = held;
                }
            });
            let _ = canvas.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Leaving the canvas releases the pointer
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().pointer.held = false;
            });
            let _ = canvas.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start/move hold, touch end releases
        for event_name in ["touchstart", "touchmove"] {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    let mut g = game.borrow_mut();
                    let pos = g.to_canvas(x, y);
                    g.pointer = PointerInput { held: true, pos };
                }
            });
            let _ = canvas.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
        for event_name in ["touchend", "touchcancel"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if event.touches().length() == 0 {
                    game.borrow_mut().pointer.held = false;
                }
            });
            let _ = canvas.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
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

            let dt_ms = if g.last_time > 0.0 {
                (time - g.last_time) as f32
            } else {
                FRAME_MS
            };
            g.last_time = time;

            g.update(dt_ms);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Panic Blob (native) starting...");
    log::info!("Native mode runs headless - use `trunk serve` for the interactive version");
    log::info!("Display overrides as arguments, e.g. `quality=high shake=off`");

    run_headless(0x0b10b, 1800);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Simulate a fixed number of frames and report what the blob got up to
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(seed: u64, frames: u32) {
    use glam::Vec2;
    use panic_blob::Settings;
    use panic_blob::consts::FRAME_MS;
    use panic_blob::hud::status_lines;
    use panic_blob::renderer::{ValueNoise, build_scene};
    use panic_blob::sim::{FrameInput, PointerInput, SimState, tick};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    let mut state = SimState::new(seed);
    let mut rng = Pcg32::seed_from_u64(seed);
    let noise = ValueNoise::new(seed);
    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = Settings::from_query(&args.join("&"));
    log::info!("Quality: {}", settings.quality.as_str());

    let mut peak_panic: f32 = 0.0;
    for frame in 0..frames {
        // Poke the blob for half a second every ten seconds
        let held = frame % 600 < 30;
        let input = FrameInput {
            pointer: PointerInput {
                held,
                pos: state.agent.pos + Vec2::new(-15.0, 0.0),
            },
            dt_ms: FRAME_MS,
            shake_enabled: settings.effective_screen_shake(),
        };
        tick(&mut state, &input, &mut rng);
        peak_panic = peak_panic.max(state.agent.panic);

        if frame % 300 == 0 {
            let vertices = build_scene(&state, &noise, &settings);
            let [status, _] = status_lines(&state);
            log::info!(
                "frame {:>5}: panic {:.2}, {} vertices | {}",
                frame,
                state.agent.panic,
                vertices.len(),
                status
            );
        }
    }

    let [status, tip] = status_lines(&state);
    println!("{status}");
    println!("{tip}");
    println!(
        "{} frames, peak panic {:.2}, {} coin(s) left",
        frames,
        peak_panic,
        state.coins_left()
    );
}
