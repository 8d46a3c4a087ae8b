//! Per-frame chain update: steer the head, drag the followers, grow the tail, carry the eyes.
//!
//! Step sizes are fixed per frame and deliberately not scaled by frame time.

use crate::snake::{
    ChainState, Segment, ARRIVAL_EPSILON, HEAD_SPEED, MAX_DISTANCE, MIN_DISTANCE, SMOOTH_FACTOR,
};
use glam::{Vec2, Vec3};
use renderer::MeshUploader;
use std::f32::consts::FRAC_PI_2;

/// What the chain needs from the outside world for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer in world units, origin bottom-left.
    pub pointer: Vec2,
    /// One-shot request for a new tail segment. Cleared by [`step`].
    pub append_segment: bool,
}

/// Advance the chain by one frame.
pub fn step(chain: &mut ChainState, input: &mut FrameInput, meshes: &mut impl MeshUploader) {
    steer_head(chain, input.pointer.extend(0.0));
    propagate_followers(&mut chain.segments);

    if std::mem::take(&mut input.append_segment) {
        chain.append(meshes);
    }

    chain.sync_eyes();
}

/// Point the head at `target` and move it `HEAD_SPEED` toward it.
/// A zero-length offset leaves position, angle and heading untouched.
fn steer_head(chain: &mut ChainState, target: Vec3) {
    let head = &mut chain.segments[0];
    let offset = target - head.position;
    let Some(dir) = offset.try_normalize() else {
        return;
    };

    // Meshes face +Y, atan2 measures from +X.
    let target_angle = dir.y.atan2(dir.x) - FRAC_PI_2;

    if offset.length() > ARRIVAL_EPSILON {
        head.position += HEAD_SPEED * dir;
    }
    head.angle = target_angle;
    chain.heading = dir;
}

/// Pull each follower toward its band around the (already moved) segment ahead of it.
///
/// Below `MIN_DISTANCE` the correction `(dist - MIN_DISTANCE) * dir` is negative and
/// pushes the follower away; above `MAX_DISTANCE` it pulls the follower in. The step
/// is then eased by a rate proportional to the gap.
fn propagate_followers(segments: &mut [Segment]) {
    for i in 1..segments.len() {
        let leader = segments[i - 1].position;
        let follower = &mut segments[i];

        let gap = leader - follower.position;
        let dist = gap.length();
        let Some(dir) = gap.try_normalize() else {
            continue;
        };

        let correction = if dist < MIN_DISTANCE {
            dist - MIN_DISTANCE
        } else if dist > MAX_DISTANCE {
            dist - MAX_DISTANCE
        } else {
            0.0
        };
        let target = follower.position + correction * dir;

        let dynamic_smooth = SMOOTH_FACTOR * (dist / MAX_DISTANCE);
        follower.position = follower.position.lerp(target, dynamic_smooth);
    }
}
