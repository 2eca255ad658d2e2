//! paramviz engine crate.
//!
//! Platform and GPU runtime for the viewer: a single `winit` window, a wgpu
//! device with a depth-tested surface, platform-neutral input, a frame clock,
//! a free-fly camera and the renderer for flattened vertex buffers.

pub mod camera;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
