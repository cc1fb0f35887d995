//! Winit graphical backend for gridpath.
//!
//! Presents a model's [`Canvas`] in a native window using:
//! - [`winit`] for window creation, input events and frame scheduling
//! - [`softbuffer`] for CPU-side pixel presentation
//!
//! The event loop is single-threaded. Between events it sleeps until the next
//! frame deadline of a [`FramePacer`], then sends [`Msg::Tick`] to the model
//! and requests a redraw.
//!
//! # Usage
//!
//! ```rust,no_run
//! use gridpath_core::{Canvas, Color, Effect, EventLoopDriver, Model, Msg};
//! use gridpath_winit::{WinitConfig, WinitDriver};
//!
//! struct Blank;
//!
//! impl Model for Blank {
//!     fn update(&mut self, _msg: Msg) -> Option<Effect> {
//!         None
//!     }
//!
//!     fn draw(&self, canvas: &mut Canvas) {
//!         canvas.fill(Color::PURPLE);
//!     }
//! }
//!
//! let driver = WinitDriver::new(WinitConfig::default());
//! driver.run(Blank).unwrap();
//! ```

mod input;

use std::error::Error;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use gridpath_core::{Canvas, Effect, EventLoopDriver, FramePacer, Model, Msg};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the winit driver.
#[derive(Clone, Debug)]
pub struct WinitConfig {
    /// Window title.
    pub title: String,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Frames per second.
    pub fps: u32,
}

impl Default for WinitConfig {
    fn default() -> Self {
        Self {
            title: "gridpath".into(),
            width: 800,
            height: 800,
            fps: 60,
        }
    }
}

// ---------------------------------------------------------------------------
// WinitDriver
// ---------------------------------------------------------------------------

/// Winit-based graphical driver.
///
/// Implements [`EventLoopDriver`]: it owns the main-thread event loop and
/// returns once the window is closed or the model ends the loop.
pub struct WinitDriver {
    config: WinitConfig,
}

impl WinitDriver {
    pub fn new(config: WinitConfig) -> Self {
        Self { config }
    }
}

impl EventLoopDriver for WinitDriver {
    fn run<M: Model>(self, model: M) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;
        let mut app = WinitApp::new(self.config, model);
        event_loop.run_app(&mut app)?;
        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// WinitApp — ApplicationHandler
// ---------------------------------------------------------------------------

struct WinitApp<M> {
    config: WinitConfig,
    model: M,
    pacer: FramePacer,
    state: Option<WinitState>,
    quit: bool,
    error: Option<Box<dyn Error>>,
}

struct WinitState {
    window: Arc<Window>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    canvas: Canvas,
    pixel_width: u32,
    pixel_height: u32,
}

fn non_zero(v: u32) -> NonZeroU32 {
    NonZeroU32::new(v).unwrap_or(NonZeroU32::MIN)
}

impl<M: Model> WinitApp<M> {
    fn new(config: WinitConfig, model: M) -> Self {
        Self {
            pacer: FramePacer::new(config.fps),
            config,
            model,
            state: None,
            quit: false,
            error: None,
        }
    }

    fn create_state(&self, event_loop: &ActiveEventLoop) -> Result<WinitState, Box<dyn Error>> {
        let (w, h) = (self.config.width, self.config.height);
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(PhysicalSize::new(w, h))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let context = softbuffer::Context::new(window.clone())?;
        let mut surface = softbuffer::Surface::new(&context, window.clone())?;
        surface.resize(non_zero(w), non_zero(h))?;

        Ok(WinitState {
            window,
            surface,
            canvas: Canvas::new(w as usize, h as usize),
            pixel_width: w,
            pixel_height: h,
        })
    }

    /// Deliver `msg` to the model, stopping the loop on [`Effect::End`].
    fn send(&mut self, msg: Msg, event_loop: &ActiveEventLoop) {
        if self.model.update(msg) == Some(Effect::End) {
            self.quit = true;
            event_loop.exit();
        }
    }

    fn fail(&mut self, err: Box<dyn Error>, event_loop: &ActiveEventLoop) {
        log::error!("winit backend: {err}");
        self.error = Some(err);
        self.quit = true;
        event_loop.exit();
    }

    fn render(&mut self) -> Result<(), Box<dyn Error>> {
        let Some(state) = self.state.as_mut() else {
            return Ok(());
        };
        let (width, height) = (state.pixel_width, state.pixel_height);
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.model.draw(&mut state.canvas);

        let mut buf = state.surface.buffer_mut()?;
        state
            .canvas
            .blit_to(&mut buf, width as usize, height as usize);
        buf.present()?;
        Ok(())
    }
}

impl<M: Model> ApplicationHandler for WinitApp<M> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return; // already initialized
        }

        match self.create_state(event_loop) {
            Ok(state) => self.state = Some(state),
            Err(e) => return self.fail(e, event_loop),
        }

        self.send(Msg::Init, event_loop);
        if self.quit {
            return;
        }

        // The first frame shows the initial state; ticks start one interval later.
        self.pacer.start(Instant::now());
        log::debug!("winit backend: frame interval {:?}", self.pacer.interval());
        if let Some(state) = self.state.as_ref() {
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.model.update(Msg::Quit);
                self.quit = true;
                event_loop.exit();
            }

            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(state) = self.state.as_mut() {
                    state.pixel_width = width;
                    state.pixel_height = height;
                    if let Err(e) = state.surface.resize(non_zero(width), non_zero(height)) {
                        return self.fail(e.into(), event_loop);
                    }
                    state.window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    self.fail(e, event_loop);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(msg) = input::translate_keyboard(&event) {
                    self.send(msg, event_loop);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.quit || self.state.is_none() {
            return;
        }

        if self.pacer.poll(Instant::now()) {
            self.send(Msg::Tick, event_loop);
            if let Some(state) = self.state.as_ref() {
                state.window.request_redraw();
            }
        }

        if let Some(deadline) = self.pacer.deadline() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }
}
