//! The snake: an ordered chain of circular segments plus the eyes riding on the head.

use engine_core::Color;
use glam::Vec3;
use procgen::{generate_circle, generate_eyes, EyePart, FanRange, SCLERA_RADIUS};
use renderer::{DrawCommand, DrawMode, MeshHandle, MeshUploader};

/// Size of the orthographic world the snake lives in.
pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 600.0;

/// Where the head is placed when the chain is created (screen center).
pub const HEAD_START: Vec3 = Vec3::new(400.0, 300.0, 0.0);
/// Direction the snake is considered to face before the pointer has moved it.
pub const INITIAL_HEADING: Vec3 = Vec3::new(0.0, -1.0, 0.0);

/// Followers closer than this to their leader are pushed back out.
pub const MIN_DISTANCE: f32 = 1.0;
/// Followers farther than this from their leader are pulled in.
pub const MAX_DISTANCE: f32 = 10.0;
/// Base interpolation rate, scaled by `dist / MAX_DISTANCE` each frame.
pub const SMOOTH_FACTOR: f32 = 0.1;
/// Head travel per frame, in world units.
pub const HEAD_SPEED: f32 = 0.75;
/// The head stops advancing once it is this close to the pointer.
pub const ARRIVAL_EPSILON: f32 = 0.01;

pub const CIRCLE_POINTS: u32 = 32;
pub const SEGMENT_RADIUS: f32 = 0.5;
pub const SEGMENT_DIMENSIONS: Vec3 = Vec3::new(50.0, 50.0, 1.0);

/// One circle of the body.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub position: Vec3,
    /// Rotation around +Z in radians.
    pub angle: f32,
    pub dimensions: Vec3,
    pub color: Color,
    pub mesh: MeshHandle,
    pub vertex_count: u32,
}

impl Segment {
    /// The segment's mesh is a single fan starting at vertex 0.
    pub fn fan(&self) -> FanRange {
        FanRange::new(0, self.vertex_count)
    }

    pub fn draw_command(&self) -> DrawCommand {
        DrawCommand {
            mesh: self.mesh,
            fan: self.fan(),
            position: self.position,
            dimensions: self.dimensions,
            angle: self.angle,
            color: self.color,
            mode: DrawMode::TriangleFan,
        }
    }
}

/// Eyes drawn over the head. Not part of the chain; copies the head's transform each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Eyes {
    pub position: Vec3,
    pub angle: f32,
    pub dimensions: Vec3,
    /// Sclera color. Pupils are always black.
    pub color: Color,
    pub mesh: MeshHandle,
    /// Sub-fans in [`EyePart::ORDER`].
    pub fans: Vec<FanRange>,
}

impl Eyes {
    pub fn new(meshes: &mut impl MeshUploader) -> Self {
        let data = generate_eyes(CIRCLE_POINTS, SCLERA_RADIUS);
        let mesh = meshes.upload_fan_mesh(&data);
        Self {
            position: HEAD_START,
            angle: 0.0,
            dimensions: SEGMENT_DIMENSIONS,
            color: Color::WHITE,
            mesh,
            fans: data.fans,
        }
    }

    /// One fan draw per eye part: scleras first, pupils on top.
    pub fn draw_commands(&self) -> impl Iterator<Item = DrawCommand> + '_ {
        EyePart::ORDER
            .into_iter()
            .zip(self.fans.iter().copied())
            .map(move |(part, fan)| DrawCommand {
                mesh: self.mesh,
                fan,
                position: self.position,
                dimensions: self.dimensions,
                angle: self.angle,
                color: if part.is_pupil() { Color::BLACK } else { self.color },
                mode: DrawMode::TriangleFan,
            })
    }
}

/// The whole simulated state: segments (head first), eyes, and the head's last heading.
#[derive(Debug, Clone)]
pub struct ChainState {
    pub(crate) segments: Vec<Segment>,
    pub eyes: Eyes,
    /// Last non-degenerate head direction. New tail segments are laid out against it.
    pub(crate) heading: Vec3,
}

impl ChainState {
    /// A one-segment snake at the screen center with its eyes.
    pub fn new(meshes: &mut impl MeshUploader) -> Self {
        let mut head = create_segment(&[], 0, INITIAL_HEADING, meshes);
        head.color = Color::YELLOW;
        let eyes = Eyes::new(meshes);
        Self {
            segments: vec![head],
            eyes,
            heading: INITIAL_HEADING,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Push a new tail segment, laid out behind the current heading.
    pub fn append(&mut self, meshes: &mut impl MeshUploader) {
        let index = self.segments.len();
        let segment = create_segment(&self.segments, index, -self.heading, meshes);
        self.segments.push(segment);
    }

    /// Copy the head's transform onto the eyes.
    pub fn sync_eyes(&mut self) {
        let head = &self.segments[0];
        self.eyes.position = head.position;
        self.eyes.angle = head.angle;
    }
}

/// Build segment `index` of `chain` (which must already hold `index` segments).
///
/// The head goes to [`HEAD_START`]. Segment 1 is placed `MIN_DISTANCE` along
/// `fallback_dir` from the head; later segments continue the line from
/// `chain[index - 2]` through `chain[index - 1]`.
pub fn create_segment(
    chain: &[Segment],
    index: usize,
    fallback_dir: Vec3,
    meshes: &mut impl MeshUploader,
) -> Segment {
    log::info!("Creating segment {}", index);
    debug_assert!(chain.len() >= index, "segment {} created out of order", index);

    let position = if index == 0 {
        HEAD_START
    } else {
        let mut dir = fallback_dir;
        if index >= 2 {
            let tail_run = chain[index - 1].position - chain[index - 2].position;
            dir = tail_run.try_normalize().unwrap_or(fallback_dir);
        }
        chain[index - 1].position + MIN_DISTANCE * dir
    };

    let data = generate_circle(CIRCLE_POINTS, SEGMENT_RADIUS);
    let mesh = meshes.upload_fan_mesh(&data);

    Segment {
        position,
        angle: 0.0,
        dimensions: SEGMENT_DIMENSIONS,
        color: if index % 2 == 0 { Color::BLUE } else { Color::YELLOW },
        mesh,
        vertex_count: data.vertex_count(),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingUploader;
    use super::*;

    #[test]
    fn head_is_placed_at_screen_center_regardless_of_direction() {
        let mut meshes = RecordingUploader::default();
        for dir in [Vec3::X, -Vec3::Y, Vec3::new(0.6, 0.8, 0.0)] {
            let head = create_segment(&[], 0, dir, &mut meshes);
            assert_eq!(head.position, Vec3::new(400.0, 300.0, 0.0));
        }
    }

    #[test]
    fn second_segment_uses_fallback_direction() {
        let mut meshes = RecordingUploader::default();
        let head = create_segment(&[], 0, INITIAL_HEADING, &mut meshes);
        let seg = create_segment(&[head], 1, Vec3::new(0.0, -1.0, 0.0), &mut meshes);
        assert_eq!(seg.position, Vec3::new(400.0, 299.0, 0.0));
    }

    #[test]
    fn later_segments_extend_the_tail_line() {
        let mut meshes = RecordingUploader::default();
        let mut chain = vec![create_segment(&[], 0, INITIAL_HEADING, &mut meshes)];
        chain.push(create_segment(&chain, 1, Vec3::X, &mut meshes));
        // Fallback is ignored from index 2 on.
        let seg = create_segment(&chain, 2, Vec3::Y, &mut meshes);
        assert_eq!(seg.position, Vec3::new(402.0, 300.0, 0.0));
    }

    #[test]
    fn stacked_tail_falls_back_to_given_direction() {
        let mut meshes = RecordingUploader::default();
        let head = create_segment(&[], 0, INITIAL_HEADING, &mut meshes);
        let twin = head.clone();
        let seg = create_segment(&[head, twin], 2, Vec3::X, &mut meshes);
        assert_eq!(seg.position, Vec3::new(401.0, 300.0, 0.0));
    }

    #[test]
    fn colors_alternate_by_parity() {
        let mut meshes = RecordingUploader::default();
        let mut chain = vec![create_segment(&[], 0, INITIAL_HEADING, &mut meshes)];
        for i in 1..6 {
            chain.push(create_segment(&chain, i, -Vec3::Y, &mut meshes));
        }
        for (i, seg) in chain.iter().enumerate() {
            let expected = if i % 2 == 0 { Color::BLUE } else { Color::YELLOW };
            assert_eq!(seg.color, expected, "segment {}", i);
            assert_eq!(seg.angle, 0.0);
            assert_eq!(seg.dimensions, SEGMENT_DIMENSIONS);
        }
    }

    #[test]
    fn every_segment_gets_its_own_circle_mesh() {
        let mut meshes = RecordingUploader::default();
        let a = create_segment(&[], 0, INITIAL_HEADING, &mut meshes);
        let b = create_segment(&[a.clone()], 1, -Vec3::Y, &mut meshes);
        assert_ne!(a.mesh, b.mesh);
        assert_eq!(meshes.uploads.len(), 2);
        assert_eq!(a.vertex_count, CIRCLE_POINTS + 2);
        assert_eq!(a.fan(), FanRange::new(0, CIRCLE_POINTS + 2));
    }

    #[test]
    fn new_chain_has_yellow_head_and_eyes() {
        let mut meshes = RecordingUploader::default();
        let chain = ChainState::new(&mut meshes);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.head().position, HEAD_START);
        assert_eq!(chain.head().color, Color::YELLOW);
        assert_eq!(chain.heading, INITIAL_HEADING);
        assert_eq!(chain.eyes.position, HEAD_START);
        assert_eq!(chain.eyes.color, Color::WHITE);
        assert_eq!(chain.eyes.fans.len(), 4);
        // Head circle plus the eyes mesh.
        assert_eq!(meshes.uploads.len(), 2);
        assert_eq!(meshes.uploads[1].vertex_count(), 4 * (CIRCLE_POINTS + 2));
    }

    #[test]
    fn append_lays_segment_against_heading() {
        let mut meshes = RecordingUploader::default();
        let mut chain = ChainState::new(&mut meshes);
        chain.heading = Vec3::X;
        chain.append(&mut meshes);
        assert_eq!(chain.segments()[1].position, Vec3::new(399.0, 300.0, 0.0));
        assert_eq!(chain.segments()[1].color, Color::YELLOW);
    }

    #[test]
    fn eye_draws_color_pupils_black() {
        let mut meshes = RecordingUploader::default();
        let chain = ChainState::new(&mut meshes);
        let colors: Vec<Color> = chain.eyes.draw_commands().map(|c| c.color).collect();
        assert_eq!(colors, vec![Color::WHITE, Color::WHITE, Color::BLACK, Color::BLACK]);
    }
}
