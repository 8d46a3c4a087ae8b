//! Core engine types and utilities for Slither.
//!
//! This crate provides the foundational types used across the demo:
//! - Screen-space transforms (position, rotation about +Z, scale)
//! - Flat colors
//! - Frame timing

pub mod components;
pub mod time;
pub mod transform;

pub use components::*;
pub use time::*;
pub use transform::*;
