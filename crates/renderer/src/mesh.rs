//! GPU fan meshes.

use crate::vertex::Vertex;
use procgen::{FanMesh, FanRange};
use wgpu::util::DeviceExt;

/// A GPU mesh: fan-ordered vertices plus fan-local triangle-list indices.
///
/// Every fan in the mesh is drawn with the same index buffer, offset by the
/// fan's first vertex as the base vertex.
pub struct Mesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_vertices: u32,
    pub num_indices: u32,
}

impl Mesh {
    /// Create a mesh from vertex and index data.
    pub fn new(device: &wgpu::Device, vertices: &[Vertex], indices: &[u32]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Fan Vertex Buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Fan Index Buffer"),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            num_vertices: vertices.len() as u32,
            num_indices: indices.len() as u32,
        }
    }

    /// Upload procedurally generated fan data.
    pub fn from_fan_mesh(device: &wgpu::Device, data: &FanMesh) -> Self {
        let vertices: Vec<Vertex> = data.vertices.iter().copied().map(Vertex::from).collect();
        Self::new(device, &vertices, &data.fan_indices())
    }

    /// Whether `fan` lies inside this mesh and fits the shared index buffer.
    pub fn contains(&self, fan: &FanRange) -> bool {
        fan.first_vertex + fan.vertex_count <= self.num_vertices
            && fan.index_count() <= self.num_indices
    }

    /// Release GPU memory now instead of waiting for drop.
    pub fn destroy(&self) {
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
    }
}
