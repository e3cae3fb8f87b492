//! Angry Bullet entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use angry_bullet::consts::*;
    use angry_bullet::platform::{HeldKeys, InputSource};
    use angry_bullet::renderer::{Palette, RenderState, hud_text, scene_vertices};
    use angry_bullet::sim::{GameEvent, Session, tick};
    use angry_bullet::Settings;

    /// Game instance holding all state
    struct Game {
        session: Session,
        settings: Settings,
        render_state: Option<RenderState>,
        accumulator: f64,
        last_time: f64,
        input: HeldKeys,
    }

    impl Game {
        fn new(settings: Settings) -> Self {
            Self {
                session: Session::default(),
                settings,
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
                input: HeldKeys::default(),
            }
        }

        /// Run input polls at the fixed interval
        fn update(&mut self, dt: f64) {
            let dt = dt.min(0.25);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= POLL_DT && substeps < MAX_SUBSTEPS {
                let input = self.input.sample();
                for event in tick(&mut self.session, &input, self.settings.flight_mode) {
                    if let GameEvent::Resolved { outcome, .. } = event {
                        log::info!("{}", outcome.message());
                    }
                }
                self.accumulator -= POLL_DT;
                substeps += 1;
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = scene_vertices(&self.session, &self.settings);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = hud_text(&self.session, &self.settings);

            let set = |id: &str, text: Option<&str>| {
                if let Some(el) = document.get_element_by_id(id) {
                    match text {
                        Some(text) => {
                            el.set_text_content(Some(text));
                            let _ = el.set_attribute("class", "hud-item");
                        }
                        None => {
                            let _ = el.set_attribute("class", "hud-item hidden");
                        }
                    }
                }
            };

            set("hud-angle", hud.angle.as_deref());
            set("hud-speed", hud.speed.as_deref());
            set("hud-message", hud.message);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Angry Bullet starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        log::info!("Flight mode: {}", settings.flight_mode.as_str());
        let clear_color = Palette::for_settings(settings.high_contrast).clear_color();
        if settings.high_contrast {
            // Flips the HUD text colors in index.html
            if let Some(root) = document.document_element() {
                let _ = root.set_attribute("class", "high-contrast");
            }
        }
        let game = Rc::new(RefCell::new(Game::new(settings)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, clear_color).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Angry Bullet running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down - held until key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().input.key_down(&event.key()) {
                    // Keep arrows and space from scrolling the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key up events will never arrive
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().input.release_all();
                log::debug!("Released held keys (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
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

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                (time - g.last_time) / 1000.0
            } else {
                POLL_DT
            };
            g.last_time = time;

            g.update(dt);
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
    log::info!("Angry Bullet (native) starting...");
    log::info!("Native mode runs a single headless launch - run with `trunk serve` for the web version");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let angle = parse_arg(&args, 0, "angle", angry_bullet::consts::INITIAL_ANGLE);
    let speed = parse_arg(&args, 1, "speed", angry_bullet::consts::INITIAL_SPEED);

    let mut settings = angry_bullet::Settings::load();
    if let Some(name) = args.get(2) {
        match angry_bullet::FlightMode::from_str(name) {
            Some(mode) => settings.flight_mode = mode,
            None => log::warn!(
                "Unknown flight mode {:?}, using {}",
                name,
                settings.flight_mode.as_str()
            ),
        }
    }

    headless_launch(angle, speed, &settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_arg(args: &[String], index: usize, name: &str, default: f64) -> f64 {
    match args.get(index).map(|s| s.parse::<f64>()) {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            log::warn!("Invalid {} {:?} ({}), using {}", name, args[index], e, default);
            default
        }
        None => default,
    }
}

/// Fire one shot with the given aim and poll until the flight resolves
#[cfg(not(target_arch = "wasm32"))]
fn headless_launch(angle: f64, speed: f64, settings: &angry_bullet::Settings) {
    use angry_bullet::platform::{Command, InputSource, ScriptedInput};
    use angry_bullet::sim::{GamePhase, Session, tick};

    log::info!("Flight mode: {}", settings.flight_mode.as_str());
    let mut session = Session::default();
    session.aim.angle = angle;
    session.aim.speed = speed;

    let mut script = ScriptedInput::default();
    script.hold(Command::Launch, 1);
    let mut polls = 0u64;
    loop {
        let input = script.sample();
        tick(&mut session, &input, settings.flight_mode);
        polls += 1;
        if session.phase == GamePhase::Resolved {
            break;
        }
    }

    let steps = session.projectile.map(|p| p.steps).unwrap_or(0);
    let landing = session.path.last().copied().unwrap_or_default();
    if let Some(outcome) = session.outcome {
        println!(
            "angle={} speed={} mode={}",
            angle,
            speed,
            settings.flight_mode.as_str()
        );
        println!("{}", outcome.message());
        println!(
            "steps={} polls={} landing=({:.2}, {:.2})",
            steps, polls, landing.x, landing.y
        );
    }
}
