//! Common graphics utilities for the simulations
//!
//! Window and GPU setup plus a pixel-space camera, shared by the
//! simulation binaries in this workspace.

pub mod graphics;
pub mod camera;

pub use graphics::*;
pub use camera::*;
