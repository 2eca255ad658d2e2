use bytemuck::{Pod, Zeroable};

/// Number of `f32` values one vertex occupies in a flattened buffer.
pub const FLOATS_PER_VERTEX: usize = 6;

/// Offset of the position attribute, in floats.
pub const POSITION_OFFSET: usize = 0;

/// Offset of the color attribute, in floats.
pub const COLOR_OFFSET: usize = 3;

/// RGB color with channels conventionally in `[0, 1]`.
pub type Rgb = [f32; 3];

pub const WHITE: Rgb = [1.0, 1.0, 1.0];
pub const RED: Rgb = [1.0, 0.0, 0.0];

/// A position + color pair.
///
/// The layout is `#[repr(C)]` with no padding, so a `[Vertex]` slice has
/// exactly the interleaved layout the GPU pipeline expects:
/// stride 6 floats, position at offset 0, color at offset 3.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: Rgb,
}

impl Vertex {
    #[inline]
    pub const fn new(position: [f32; 3], color: Rgb) -> Self {
        Self { position, color }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.position[0]
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.position[1]
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.position[2]
    }
}

// Guards the flattening contract at compile time.
const _: () = assert!(std::mem::size_of::<Vertex>() == FLOATS_PER_VERTEX * 4);
