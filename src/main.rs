//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent,
    };

    use brick_breaker::platform::SurfaceMapping;
    use brick_breaker::renderer::draw::css;
    use brick_breaker::renderer::{DrawCommand, RenderSink, TextAlign};
    use brick_breaker::{FrameDriver, Tuning};

    /// Draws commands onto a 2D canvas context
    struct CanvasSink {
        ctx: CanvasRenderingContext2d,
        width: f64,
        height: f64,
    }

    impl RenderSink for CanvasSink {
        fn draw(&mut self, command: &DrawCommand) {
            let ctx = &self.ctx;
            match command {
                DrawCommand::Clear { color } => {
                    ctx.set_fill_style_str(&css(*color));
                    ctx.fill_rect(0.0, 0.0, self.width, self.height);
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => {
                    ctx.set_fill_style_str(&css(*color));
                    ctx.begin_path();
                    match ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU) {
                        Ok(()) => ctx.fill(),
                        Err(e) => log::warn!("arc failed: {:?}", e),
                    }
                }
                DrawCommand::Rect { pos, size, color } => {
                    ctx.set_fill_style_str(&css(*color));
                    ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
                }
                DrawCommand::Text {
                    pos,
                    text,
                    size,
                    align,
                    color,
                } => {
                    ctx.set_fill_style_str(&css(*color));
                    ctx.set_font(&format!("{}px sans-serif", size));
                    ctx.set_text_align(match align {
                        TextAlign::Left => "left",
                        TextAlign::Center => "center",
                    });
                    if let Err(e) = ctx.fill_text(text, pos.x as f64, pos.y as f64) {
                        log::warn!("fill_text failed: {:?}", e);
                    }
                }
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        driver: FrameDriver,
        sink: CanvasSink,
        canvas: HtmlCanvasElement,
        /// Mouse button held (drag in progress)
        dragging: bool,
    }

    impl Game {
        /// Client x to world x
        fn world_x(&self, client_x: f32) -> f32 {
            let rect = self.canvas.get_bounding_client_rect();
            SurfaceMapping {
                left: rect.left() as f32,
                host_width: rect.width() as f32,
                world_width: self.canvas.width() as f32,
            }
            .to_world_x(client_x)
        }

        /// Drag start: also the tap that restarts a finished level
        fn press(&mut self, client_x: f32) {
            self.dragging = true;
            self.driver.request_restart();
            let x = self.world_x(client_x);
            self.driver.pointer(x);
        }

        fn drag(&mut self, client_x: f32) {
            if self.dragging {
                let x = self.world_x(client_x);
                self.driver.pointer(x);
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Backing store in device pixels; world units are device pixels
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let tuning = Tuning::default();
        let mut driver = FrameDriver::new(tuning);
        driver.resize(width as f32, height as f32);

        let game = Rc::new(RefCell::new(Game {
            driver,
            sink: CanvasSink {
                ctx,
                width: width as f64,
                height: height as f64,
            },
            canvas: canvas.clone(),
            dragging: false,
        }));

        log::info!("Surface {}x{} (dpr {})", width, height, dpr);

        setup_input_handlers(&canvas, game.clone())?;
        request_animation_frame(game);

        log::info!("Brick Breaker running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Mouse down - drag start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().press(event.client_x() as f32);
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse move - only while dragging
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().drag(event.client_x() as f32);
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse up - drag end (listen on window so releasing outside still counts)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().dragging = false;
            });
            let window = web_sys::window().ok_or("no window")?;
            window.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().press(touch.client_x() as f32);
                }
            });
            canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().drag(touch.client_x() as f32);
                }
            });
            canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch end
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                game.borrow_mut().dragging = false;
            });
            canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard: I toggles the autopilot, R restarts a finished level
        {
            let idle = Rc::new(RefCell::new(false));
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "i" | "I" => {
                        let mut idle = idle.borrow_mut();
                        *idle = !*idle;
                        g.driver.set_idle_mode(*idle);
                        log::info!("Idle mode: {}", *idle);
                    }
                    "r" | "R" => g.driver.request_restart(),
                    _ => {}
                }
            });
            let window = web_sys::window().ok_or("no window")?;
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            let Game { driver, sink, .. } = &mut *g;
            // rAF timestamps are milliseconds
            driver.frame(time / 1000.0, sink);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    let result = wasm_game::run();
    if let Err(ref e) = result {
        log::error!("Startup failed: {:?}", e);
    }
    result
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - build for wasm32 to play");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => brick_breaker::Tuning::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Cannot read tuning file {path}: {e}");
                brick_breaker::Tuning::default()
            }
        },
        None => brick_breaker::Tuning::default(),
    };

    run_demo(tuning);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one level on autopilot at 60 Hz and print the last frame
#[cfg(not(target_arch = "wasm32"))]
fn run_demo(tuning: brick_breaker::Tuning) {
    use brick_breaker::FrameDriver;
    use brick_breaker::renderer::TextGrid;
    use glam::Vec2;

    const WORLD: Vec2 = Vec2::new(700.0, 1000.0);
    const FRAME_SECS: f64 = 1.0 / 60.0;
    /// Five simulated minutes
    const MAX_FRAMES: u32 = 5 * 60 * 60;

    let mut driver = FrameDriver::new(tuning);
    driver.resize(WORLD.x, WORLD.y);
    driver.set_idle_mode(true);

    let mut grid = TextGrid::new(WORLD, 70, 40);
    for frame in 0..MAX_FRAMES {
        driver.frame(frame as f64 * FRAME_SECS, &mut grid);
        if driver.state().is_some_and(|s| s.phase.is_terminal()) {
            break;
        }
    }

    println!("{grid}");
    if let Some(state) = driver.state() {
        log::info!(
            "Demo finished: {:?} after {} ticks, {}",
            state.phase,
            state.time_ticks,
            state.hud_text()
        );
    }
}
