//! Rendering system using wgpu for Slither.

pub mod camera;
pub mod draw;
pub mod error;
pub mod mesh;
pub mod pipeline;
pub mod renderer;
pub mod vertex;

pub use camera::*;
pub use draw::*;
pub use error::*;
pub use mesh::*;
pub use pipeline::*;
pub use renderer::*;
pub use vertex::*;
