//! Draw commands: the boundary between the simulation and the GPU.

use crate::vertex::InstanceData;
use engine_core::{Color, Transform};
use glam::Vec3;
use procgen::{FanMesh, FanRange};

/// Opaque handle to a mesh owned by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshHandle(pub u32);

/// How a vertex range is assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Triangles around the first vertex of the range.
    #[default]
    TriangleFan,
}

/// One draw of one fan of a mesh with its own transform and color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub mesh: MeshHandle,
    pub fan: FanRange,
    pub position: Vec3,
    pub dimensions: Vec3,
    pub angle: f32,
    pub color: Color,
    pub mode: DrawMode,
}

impl DrawCommand {
    /// Model transform of this draw: `translate(position) * rotate_z(angle) * scale(dimensions)`.
    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.angle, self.dimensions)
    }

    /// Per-instance GPU data for this draw.
    pub fn instance(&self) -> InstanceData {
        InstanceData::new(self.transform().to_matrix().to_cols_array_2d(), self.color.to_rgba())
    }
}

/// Anything that can take procedural fan meshes and hand back handles to them.
pub trait MeshUploader {
    fn upload_fan_mesh(&mut self, mesh: &FanMesh) -> MeshHandle;
}
