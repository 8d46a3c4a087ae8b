//! Renderer error type.

use crate::draw::MeshHandle;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to find a suitable GPU adapter")]
    NoAdapter,
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("failed to request device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface unavailable: {0}")]
    Surface(#[from] wgpu::SurfaceError),
    #[error("draw references unknown mesh {0:?}")]
    UnknownMesh(MeshHandle),
}

impl RenderError {
    /// Errors after which no further frame can be drawn.
    pub fn is_fatal(&self) -> bool {
        match self {
            RenderError::Surface(wgpu::SurfaceError::OutOfMemory) => true,
            RenderError::Surface(_) | RenderError::UnknownMesh(_) => false,
            _ => true,
        }
    }
}
