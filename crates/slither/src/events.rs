//! Window event handling for SlitherState.

use winit::event::WindowEvent;
use winit::keyboard::PhysicalKey;

use crate::state::SlitherState;

impl SlitherState {
    /// Handle a window event. Returns true if the app should exit.
    pub(crate) fn handle_window_event(&mut self, event: WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                self.running = false;
                true
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(size);
                false
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.input.process_keyboard(key, event.state);
                    if self.input.is_quit_pressed() {
                        log::info!("Escape pressed, closing");
                        self.running = false;
                        return true;
                    }
                }
                false
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.process_cursor_position((position.x, position.y));
                false
            }
            WindowEvent::RedrawRequested => {
                self.update();
                if let Err(e) = self.render() {
                    log::error!("Render error: {}", e);
                    if e.is_fatal() {
                        self.running = false;
                        return true;
                    }
                }
                self.renderer.window.request_redraw();
                false
            }
            _ => false,
        }
    }
}
