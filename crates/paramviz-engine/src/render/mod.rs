//! GPU rendering.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into the
//! frame's `RenderTarget`. Geometry arrives as the flattened vertex buffer of a
//! `paramviz_geom::ShapeBatch` and is transformed by projection/view/model
//! matrices in the vertex shader.

mod ctx;
mod plot;

pub use ctx::{RenderCtx, RenderTarget};
pub use plot::{DrawRequest, Matrices, PlotRenderer};
