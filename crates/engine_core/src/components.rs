//! Common flat-shading components used across the demo.

use glam::{Vec3, Vec4};

/// Opaque RGB color. Alpha is always 1 when uploaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub Vec3);

impl Color {
    pub const BLACK: Self = Self(Vec3::ZERO);
    pub const WHITE: Self = Self(Vec3::ONE);
    pub const BLUE: Self = Self(Vec3::new(0.0, 0.0, 1.0));
    pub const YELLOW: Self = Self(Vec3::new(1.0, 1.0, 0.0));

    /// RGBA with opaque alpha, ready for a shader uniform or instance attribute.
    pub fn to_rgba(self) -> [f32; 4] {
        Vec4::from((self.0, 1.0)).to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_is_opaque() {
        assert_eq!(Color::YELLOW.to_rgba(), [1.0, 1.0, 0.0, 1.0]);
        assert_eq!(Color::BLACK.to_rgba(), [0.0, 0.0, 0.0, 1.0]);
    }
}
