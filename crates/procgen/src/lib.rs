//! Procedural generation of the flat meshes drawn by the demo.

pub mod circle;
pub mod fan;

pub use circle::*;
pub use fan::*;
