//! Triangle-fan mesh data before GPU upload.

use glam::Vec3;

/// A contiguous run of vertices drawn as one triangle fan around its first vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FanRange {
    pub first_vertex: u32,
    pub vertex_count: u32,
}

impl FanRange {
    pub fn new(first_vertex: u32, vertex_count: u32) -> Self {
        Self {
            first_vertex,
            vertex_count,
        }
    }

    /// Number of triangles in the fan (one per ring edge).
    pub fn triangle_count(&self) -> u32 {
        self.vertex_count.saturating_sub(2)
    }

    /// Number of triangle-list indices needed to draw the fan.
    pub fn index_count(&self) -> u32 {
        self.triangle_count() * 3
    }
}

/// Vertex positions laid out as one or more consecutive triangle fans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FanMesh {
    pub vertices: Vec<[f32; 3]>,
    pub fans: Vec<FanRange>,
}

impl FanMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fan: `center` first, then the ring points in order.
    pub fn push_fan(&mut self, center: Vec3, ring: impl IntoIterator<Item = Vec3>) -> FanRange {
        let first_vertex = self.vertices.len() as u32;
        self.vertices.push(center.into());
        self.vertices.extend(ring.into_iter().map(<[f32; 3]>::from));
        let range = FanRange::new(first_vertex, self.vertices.len() as u32 - first_vertex);
        self.fans.push(range);
        range
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Largest fan, in vertices. Index buffers are sized for this.
    pub fn max_fan_vertices(&self) -> u32 {
        self.fans.iter().map(|f| f.vertex_count).max().unwrap_or(0)
    }

    /// Fan-local triangle-list indices `(0, k, k + 1)` covering the largest fan.
    /// Draw fan `f` with `f.index_count()` of these and `f.first_vertex` as the base vertex.
    pub fn fan_indices(&self) -> Vec<u32> {
        fan_indices(self.max_fan_vertices())
    }
}

/// Triangle-list indices for a fan of `vertex_count` vertices with the apex at index 0.
pub fn fan_indices(vertex_count: u32) -> Vec<u32> {
    let triangles = vertex_count.saturating_sub(2);
    let mut indices = Vec::with_capacity(triangles as usize * 3);
    for k in 1..=triangles {
        indices.extend_from_slice(&[0, k, k + 1]);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_indices_share_apex() {
        let indices = fan_indices(5);
        assert_eq!(indices, vec![0, 1, 2, 0, 2, 3, 0, 3, 4]);
    }

    #[test]
    fn fan_indices_degenerate_sizes_are_empty() {
        assert!(fan_indices(0).is_empty());
        assert!(fan_indices(2).is_empty());
    }

    #[test]
    fn push_fan_records_consecutive_ranges() {
        let mut mesh = FanMesh::new();
        let a = mesh.push_fan(Vec3::ZERO, [Vec3::X, Vec3::Y, -Vec3::X]);
        let b = mesh.push_fan(Vec3::ONE, [Vec3::X, Vec3::Y]);
        assert_eq!(a, FanRange::new(0, 4));
        assert_eq!(b, FanRange::new(4, 3));
        assert_eq!(mesh.vertex_count(), 7);
        assert_eq!(mesh.max_fan_vertices(), 4);
        assert_eq!(a.index_count(), 6);
        assert_eq!(mesh.fan_indices().len(), 6);
    }
}
