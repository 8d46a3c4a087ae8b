//! Slither - a chain of circles that follows the mouse

mod config;
mod events;
mod render;
mod snake;
mod state;
mod update;

use anyhow::Result;
use state::SlitherState;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

struct App {
    state: Option<SlitherState>,
}

impl App {
    fn new() -> Self {
        Self { state: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_none() {
            let config = config::AppConfig::load();
            let size = winit::dpi::LogicalSize::new(config.window_width, config.window_height);
            let window_attrs = Window::default_attributes()
                .with_title(config.title.clone())
                .with_inner_size(size);

            let window = match event_loop.create_window(window_attrs) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            match pollster::block_on(SlitherState::new(window.clone(), &config)) {
                Ok(s) => {
                    self.state = Some(s);
                    window.request_redraw();
                }
                Err(e) => {
                    log::error!("Failed to initialize: {:#}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(state) = &mut self.state {
            if state.handle_window_event(event) || !state.running {
                event_loop.exit();
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &mut self.state {
            state.shutdown();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("╔════════════════════════════════════════╗");
    println!("║                Slither                 ║");
    println!("╠════════════════════════════════════════╣");
    println!("║  CONTROLS:                             ║");
    println!("║    Mouse   - Steer the head            ║");
    println!("║    Space   - Grow one segment          ║");
    println!("║    Escape  - Quit                      ║");
    println!("╚════════════════════════════════════════╝");

    log::info!("Starting Slither");

    let event_loop = EventLoop::new()?;
    // Redraw continuously; the simulation advances once per frame.
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    Ok(())
}
