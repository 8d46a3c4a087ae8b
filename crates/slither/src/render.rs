//! Frame submission: turn the chain into an ordered list of draw commands.

use crate::snake::ChainState;
use crate::state::SlitherState;
use renderer::{DrawCommand, RenderError};

/// Tail first, head last, then the eyes on top of the head.
pub fn build_draw_list(chain: &ChainState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(chain.len() + chain.eyes.fans.len());
    commands.extend(chain.segments().iter().rev().map(|seg| seg.draw_command()));
    commands.extend(chain.eyes.draw_commands());
    commands
}

impl SlitherState {
    /// Draw the current chain.
    pub(crate) fn render(&mut self) -> Result<(), RenderError> {
        let commands = build_draw_list(&self.chain);
        self.renderer.render(&commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::testing::RecordingUploader;
    use crate::snake::CIRCLE_POINTS;
    use engine_core::Color;
    use procgen::FanRange;

    #[test]
    fn segments_are_drawn_tail_to_head_then_eyes() {
        let mut meshes = RecordingUploader::default();
        let mut chain = ChainState::new(&mut meshes);
        for _ in 0..4 {
            chain.append(&mut meshes);
        }

        let commands = build_draw_list(&chain);
        assert_eq!(commands.len(), chain.len() + 4);

        for (slot, seg) in chain.segments().iter().rev().enumerate() {
            assert_eq!(commands[slot].mesh, seg.mesh);
            assert_eq!(commands[slot].position, seg.position);
        }
        let head_slot = chain.len() - 1;
        assert_eq!(commands[head_slot].color, Color::YELLOW);
        assert_eq!(commands[head_slot].mesh, chain.head().mesh);
    }

    #[test]
    fn eye_parts_use_their_own_fans() {
        let mut meshes = RecordingUploader::default();
        let chain = ChainState::new(&mut meshes);
        let commands = build_draw_list(&chain);

        let per_fan = CIRCLE_POINTS + 2;
        let eyes = &commands[1..];
        assert_eq!(eyes.len(), 4);
        for (j, cmd) in eyes.iter().enumerate() {
            assert_eq!(cmd.mesh, chain.eyes.mesh);
            assert_eq!(cmd.fan, FanRange::new(j as u32 * per_fan, per_fan));
            assert_eq!(cmd.position, chain.head().position);
        }
        assert_eq!(eyes[0].color, Color::WHITE);
        assert_eq!(eyes[3].color, Color::BLACK);
    }
}
