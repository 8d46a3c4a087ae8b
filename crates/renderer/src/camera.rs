//! Orthographic screen camera.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// Fixed-size orthographic view with the origin at the bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Visible world width in units.
    pub width: f32,
    /// Visible world height in units.
    pub height: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            near: -1.0,
            far: 1.0,
        }
    }

    /// World extent as a vector.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Get the projection matrix: `ortho(0, width, 0, height, near, far)`.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.width, 0.0, self.height, self.near, self.far)
    }
}

/// Camera uniform data for GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub projection: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            projection: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    pub fn update(&mut self, camera: &Camera) {
        self.projection = camera.projection_matrix().to_cols_array_2d();
    }
}
