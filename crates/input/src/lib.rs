//! Input handling for keyboard and pointer.

use glam::Vec2;
use std::collections::HashSet;

/// Key that appends a segment to the tail.
pub const APPEND_KEY: KeyCode = KeyCode::Space;
/// Key that closes the window.
pub const QUIT_KEY: KeyCode = KeyCode::Escape;

/// Manages input state for the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<KeyCode>,
    /// Keys pressed this frame.
    keys_pressed: HashSet<KeyCode>,

    /// Cursor position in window pixels, origin top-left.
    cursor_position: Vec2,
    /// Whether the cursor has reported a position yet.
    cursor_seen: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call once a frame has consumed its input.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
    }

    /// Process a keyboard event. Auto-repeat presses of a held key are not new presses.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.keys_held.contains(&key) {
                    self.keys_pressed.insert(key);
                }
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
            }
        }
    }

    /// Process cursor position update.
    pub fn process_cursor_position(&mut self, position: (f64, f64)) {
        self.cursor_position = Vec2::new(position.0 as f32, position.1 as f32);
        self.cursor_seen = true;
    }

    // Query methods

    /// Check if a key was pressed this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Whether the cursor has entered the window at least once.
    pub fn has_cursor(&self) -> bool {
        self.cursor_seen
    }

    /// Cursor in world units with the origin at the bottom-left.
    ///
    /// `window` is the framebuffer size in pixels and `world` the size of the
    /// orthographic view, so a resized window still maps edge to edge.
    pub fn pointer_world(&self, window: Vec2, world: Vec2) -> Vec2 {
        let window = window.max(Vec2::ONE);
        let flipped = Vec2::new(self.cursor_position.x, window.y - self.cursor_position.y);
        flipped * (world / window)
    }

    /// Check if the append key was pressed this frame (edge-triggered).
    pub fn is_append_pressed(&self) -> bool {
        self.is_key_pressed(APPEND_KEY)
    }

    /// Check if the quit key was pressed this frame.
    pub fn is_quit_pressed(&self) -> bool {
        self.is_key_pressed(QUIT_KEY)
    }
}

// Re-export for convenience
pub use winit::event::ElementState;
pub use winit::keyboard::KeyCode;
