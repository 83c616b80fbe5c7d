//! Rocketman entry point
//!
//! Owns the window, the keyboard, and the frame clock. Everything inside a
//! frame is delegated: `sim::tick` advances the world under a fixed timestep
//! accumulator, `renderer::Renderer` rasterizes it into the 256x144 frame,
//! and `pixels` scales that up to the window.

use std::process::ExitCode;
use std::rc::Rc;
use std::time::Instant;

use ouroboros::self_referencing;
use pixels::{Pixels, SurfaceTexture};
use rusttype::Font;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use rocketman::consts::*;
use rocketman::renderer::{Renderer, ShipSprite};
use rocketman::sim::{GameState, TickInput, tick};

/// Bitmap-style font for the score digits
const FONT_PATH: &str = "m6x11plus.ttf";
/// Ship texture
const SHIP_PATH: &str = "ship.png";

/// Longest wall-clock delta fed to the accumulator; hides pauses and hitches
const MAX_FRAME_DT: f32 = 0.1;

/// Window plus the pixel surface borrowing from it
#[self_referencing]
struct Surface {
    window: Rc<Window>,
    #[borrows(window)]
    #[covariant]
    pixels: Pixels<'this>,
}

struct App {
    state: GameState,
    renderer: Renderer,
    surface: Option<Surface>,
    input: TickInput,
    accumulator: f32,
    last_time: Instant,
    /// Set when a fatal error forced the event loop to exit
    failed: bool,
}

impl App {
    fn new(state: GameState, renderer: Renderer) -> Self {
        Self {
            state,
            renderer,
            surface: None,
            input: TickInput::default(),
            accumulator: 0.0,
            last_time: Instant::now(),
            failed: false,
        }
    }

    fn update_and_render(&mut self, event_loop: &ActiveEventLoop) {
        let Some(ref mut surface) = self.surface else {
            return;
        };

        let now = Instant::now();
        let dt = now
            .duration_since(self.last_time)
            .as_secs_f32()
            .min(MAX_FRAME_DT);
        self.last_time = now;
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs once a tick has consumed them
            self.input.flip = false;
            self.input.restart = false;
        }

        let state = &self.state;
        let renderer = &self.renderer;
        let result = surface.with_pixels_mut(|pixels| {
            renderer.render(pixels.frame_mut(), state);
            pixels.render()
        });
        if let Err(err) = result {
            log::error!("failed to present frame: {err}");
            self.failed = true;
            event_loop.exit();
        }
    }

    fn handle_key(&mut self, event: &KeyEvent, event_loop: &ActiveEventLoop) {
        if event.state != ElementState::Pressed {
            return;
        }
        match event.physical_key {
            // `repeat` guards the flip so holding space flips once per press
            PhysicalKey::Code(KeyCode::Space) if !event.repeat => {
                self.input.flip = true;
            }
            PhysicalKey::Code(KeyCode::KeyR) => {
                self.input.restart = true;
            }
            PhysicalKey::Code(KeyCode::Escape) => {
                event_loop.exit();
            }
            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false);
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Rc::new(window),
            Err(err) => {
                log::error!("failed to create window: {err}");
                self.failed = true;
                event_loop.exit();
                return;
            }
        };

        let physical = window.inner_size();
        log::info!(
            "window {}x{} physical, frame {}x{}",
            physical.width,
            physical.height,
            FRAME_WIDTH,
            FRAME_HEIGHT
        );

        let surface = SurfaceTryBuilder {
            window: Rc::clone(&window),
            pixels_builder: |win: &Rc<Window>| {
                let size = win.inner_size();
                let texture = SurfaceTexture::new(size.width, size.height, win.as_ref());
                Pixels::new(FRAME_WIDTH, FRAME_HEIGHT, texture)
            },
        }
        .try_build();
        match surface {
            Ok(surface) => {
                self.last_time = Instant::now();
                window.request_redraw();
                self.surface = Some(surface);
            }
            Err(err) => {
                log::error!("failed to create pixel surface: {err}");
                self.failed = true;
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_key(&event, event_loop);
            }
            WindowEvent::Resized(size) => {
                if let Some(ref mut surface) = self.surface {
                    let result = surface
                        .with_pixels_mut(|pixels| pixels.resize_surface(size.width, size.height));
                    if let Err(err) = result {
                        log::error!("failed to resize surface: {err}");
                        self.failed = true;
                        event_loop.exit();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.update_and_render(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref surface) = self.surface {
            surface.borrow_window().request_redraw();
        }
    }
}

fn load_font(path: &str) -> Option<Font<'static>> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            log::error!("failed to read font {path}: {err}");
            return None;
        }
    };
    let font = Font::try_from_vec(data);
    if font.is_none() {
        log::error!("failed to parse font {path}");
    }
    font
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("rocketman starting");

    let Some(font) = load_font(FONT_PATH) else {
        return ExitCode::FAILURE;
    };
    let ship = match ShipSprite::load(SHIP_PATH) {
        Ok(ship) => ship,
        Err(err) => {
            log::error!("failed to load ship texture {SHIP_PATH}: {err}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("assets loaded, ship {:?}", ship.dimensions());

    let seed: u64 = rand::random();
    log::info!("session seed {seed}");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            log::error!("failed to create event loop: {err}");
            return ExitCode::FAILURE;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(GameState::new(seed), Renderer::new(font, ship));
    if let Err(err) = event_loop.run_app(&mut app) {
        log::error!("event loop error: {err}");
        return ExitCode::FAILURE;
    }
    if app.failed {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
