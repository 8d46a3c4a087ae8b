//! Filled circles and the snake's eyes, built as triangle fans.

use crate::fan::FanMesh;
use glam::Vec3;
use std::f32::consts::TAU;

/// Sclera centers sit at `(EYE_OFFSET_X, ±EYE_OFFSET_Y)` in unit-mesh space.
pub const EYE_OFFSET_X: f32 = 0.125;
pub const EYE_OFFSET_Y: f32 = 0.3;
/// Pupils are pushed forward along +X from the sclera center.
pub const PUPIL_SHIFT_X: f32 = 0.09;
/// Radius used for the sclera when building the head's eyes.
pub const SCLERA_RADIUS: f32 = 0.225;
/// Pupil radius relative to the sclera (0.18 for the default sclera).
pub const PUPIL_RATIO: f32 = 0.8;

/// Which of the four eye sub-fans a range belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EyePart {
    LeftSclera,
    RightSclera,
    LeftPupil,
    RightPupil,
}

impl EyePart {
    /// Sub-fan order inside an eyes mesh.
    pub const ORDER: [EyePart; 4] = [
        EyePart::LeftSclera,
        EyePart::RightSclera,
        EyePart::LeftPupil,
        EyePart::RightPupil,
    ];

    pub fn is_pupil(self) -> bool {
        matches!(self, EyePart::LeftPupil | EyePart::RightPupil)
    }
}

/// Ring of `point_count + 1` points around `center`; the last point closes the loop.
fn ring(center: Vec3, point_count: u32, radius: f32) -> impl Iterator<Item = Vec3> {
    let slice = TAU / point_count.max(1) as f32;
    (0..=point_count).map(move |k| {
        let (sin, cos) = (k as f32 * slice).sin_cos();
        center + Vec3::new(radius * cos, radius * sin, 0.0)
    })
}

/// A filled circle of `point_count + 2` vertices: the origin, then the ring.
pub fn generate_circle(point_count: u32, radius: f32) -> FanMesh {
    let mut mesh = FanMesh::new();
    mesh.push_fan(Vec3::ZERO, ring(Vec3::ZERO, point_count, radius));
    mesh
}

/// Four circles in one mesh, ordered as [`EyePart::ORDER`]. Each sub-fan has
/// `point_count + 2` vertices and is centered on its own eye rather than the origin.
pub fn generate_eyes(point_count: u32, sclera_radius: f32) -> FanMesh {
    let pupil_radius = sclera_radius * PUPIL_RATIO;
    let mut mesh = FanMesh::new();
    for part in EyePart::ORDER {
        let (center, radius) = match part {
            EyePart::LeftSclera => (Vec3::new(EYE_OFFSET_X, EYE_OFFSET_Y, 0.0), sclera_radius),
            EyePart::RightSclera => (Vec3::new(EYE_OFFSET_X, -EYE_OFFSET_Y, 0.0), sclera_radius),
            EyePart::LeftPupil => (
                Vec3::new(EYE_OFFSET_X + PUPIL_SHIFT_X, EYE_OFFSET_Y, 0.0),
                pupil_radius,
            ),
            EyePart::RightPupil => (
                Vec3::new(EYE_OFFSET_X + PUPIL_SHIFT_X, -EYE_OFFSET_Y, 0.0),
                pupil_radius,
            ),
        };
        mesh.push_fan(center, ring(center, point_count, radius));
    }
    log::debug!(
        "Generated eyes mesh: {} vertices in {} fans",
        mesh.vertex_count(),
        mesh.fans.len()
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fan::FanRange;

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        (Vec3::from(a) - Vec3::from(b)).length() < 1e-5
    }

    #[test]
    fn circle_has_center_plus_closed_ring() {
        let mesh = generate_circle(32, 0.5);
        assert_eq!(mesh.vertex_count(), 34);
        assert_eq!(mesh.vertices[0], [0.0, 0.0, 0.0]);
        assert_eq!(mesh.fans, vec![FanRange::new(0, 34)]);
        // First and last ring points coincide at angle 0 / 2π.
        assert!(close(mesh.vertices[1], [0.5, 0.0, 0.0]));
        assert!(close(mesh.vertices[33], [0.5, 0.0, 0.0]));
    }

    #[test]
    fn circle_ring_points_lie_on_radius() {
        for n in [3u32, 8, 17] {
            let mesh = generate_circle(n, 2.0);
            assert_eq!(mesh.vertex_count(), n + 2);
            for v in &mesh.vertices[1..] {
                assert!((Vec3::from(*v).length() - 2.0).abs() < 1e-4);
                assert_eq!(v[2], 0.0);
            }
        }
    }

    #[test]
    fn circle_quarter_point() {
        let mesh = generate_circle(4, 1.0);
        assert!(close(mesh.vertices[2], [0.0, 1.0, 0.0]));
    }

    #[test]
    fn eyes_layout_is_four_equal_fans() {
        let n = 32;
        let mesh = generate_eyes(n, SCLERA_RADIUS);
        assert_eq!(mesh.vertex_count(), 4 * (n + 2));
        assert_eq!(mesh.fans.len(), 4);
        for (j, fan) in mesh.fans.iter().enumerate() {
            assert_eq!(fan.first_vertex, j as u32 * (n + 2));
            assert_eq!(fan.vertex_count, n + 2);
        }
    }

    #[test]
    fn eyes_centers_follow_fixed_order() {
        let n = 16;
        let mesh = generate_eyes(n, SCLERA_RADIUS);
        let centers: Vec<[f32; 3]> = mesh
            .fans
            .iter()
            .map(|f| mesh.vertices[f.first_vertex as usize])
            .collect();
        assert!(close(centers[0], [0.125, 0.3, 0.0]));
        assert!(close(centers[1], [0.125, -0.3, 0.0]));
        assert!(close(centers[2], [0.215, 0.3, 0.0]));
        assert!(close(centers[3], [0.215, -0.3, 0.0]));
    }

    #[test]
    fn eyes_radii_match_sclera_and_pupil() {
        let n = 8;
        let mesh = generate_eyes(n, SCLERA_RADIUS);
        let radius_of = |fan: &FanRange| {
            let center = Vec3::from(mesh.vertices[fan.first_vertex as usize]);
            let first_ring = Vec3::from(mesh.vertices[fan.first_vertex as usize + 1]);
            (first_ring - center).length()
        };
        assert!((radius_of(&mesh.fans[0]) - 0.225).abs() < 1e-5);
        assert!((radius_of(&mesh.fans[1]) - 0.225).abs() < 1e-5);
        assert!((radius_of(&mesh.fans[2]) - 0.18).abs() < 1e-5);
        assert!((radius_of(&mesh.fans[3]) - 0.18).abs() < 1e-5);
    }

    #[test]
    fn eye_part_pupils() {
        assert!(!EyePart::LeftSclera.is_pupil());
        assert!(EyePart::RightPupil.is_pupil());
    }
}
