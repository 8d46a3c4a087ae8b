//! Application state: renderer, input, the chain and frame timing.

use crate::config::AppConfig;
use crate::snake::{ChainState, WORLD_HEIGHT, WORLD_WIDTH};
use crate::update::{self, FrameInput};
use anyhow::Result;
use engine_core::Time;
use glam::Vec2;
use input::InputState;
use renderer::{Camera, Renderer};
use std::sync::Arc;
use winit::window::Window;

pub struct SlitherState {
    pub(crate) renderer: Renderer,
    pub(crate) input: InputState,
    pub(crate) chain: ChainState,
    pub(crate) time: Time,
    pub(crate) running: bool,
}

impl SlitherState {
    pub async fn new(window: Arc<Window>, config: &AppConfig) -> Result<Self> {
        let camera = Camera::new(WORLD_WIDTH, WORLD_HEIGHT);
        let mut renderer = Renderer::new(window, camera, config.vsync, config.clear_color).await?;
        let chain = ChainState::new(&mut renderer);

        Ok(Self {
            renderer,
            input: InputState::new(),
            chain,
            time: Time::new(),
            running: true,
        })
    }

    /// One simulation frame. Consumes this frame's key presses.
    pub(crate) fn update(&mut self) {
        self.time.update();

        let mut frame = FrameInput {
            pointer: self.pointer(),
            append_segment: self.input.is_append_pressed(),
        };
        update::step(&mut self.chain, &mut frame, &mut self.renderer);
        self.input.begin_frame();

        if let Some(fps) = self.time.take_report() {
            log::debug!(
                "frame {}: {:.1} fps, {} segments",
                self.time.frame_count(),
                fps,
                self.chain.len()
            );
        }
    }

    /// Pointer in world units. Until the cursor enters the window the head is its own target.
    fn pointer(&self) -> Vec2 {
        if !self.input.has_cursor() {
            return self.chain.head().position.truncate();
        }
        let (w, h) = self.renderer.dimensions();
        let camera = self.renderer.camera().size();
        self.input.pointer_world(Vec2::new(w as f32, h as f32), camera)
    }

    /// Release GPU meshes. Safe to call more than once.
    pub(crate) fn shutdown(&mut self) {
        let released = self.renderer.release_meshes();
        if released > 0 {
            log::info!("Shutting down, released {} meshes", released);
        }
    }
}
