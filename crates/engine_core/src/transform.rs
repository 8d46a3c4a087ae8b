//! Screen-space transform and utilities for placing flat meshes.

use glam::{Mat4, Quat, Vec3};

/// A screen-space transform: position, rotation about the screen normal (+Z), and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Rotation around +Z in radians.
    pub angle: f32,
    pub scale: Vec3,
}

impl Transform {
    /// Create a transform from all three components.
    pub fn new(position: Vec3, angle: f32, scale: Vec3) -> Self {
        Self {
            position,
            angle,
            scale,
        }
    }

    /// Rotation as a quaternion around +Z.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_z(self.angle)
    }

    /// Create the model matrix for this transform: `translate * rotate_z * scale`.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation(), self.position)
    }
}
