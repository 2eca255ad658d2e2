use crate::error::GeomError;
use crate::vertex::Vertex;
use crate::writer;

/// Primitive assembly used to draw a shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    PointList,
    LineStrip,
    TriangleList,
}

/// Axis-aligned bounds of a vertex sequence.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Bounds {
    /// Returns `None` for an empty sequence.
    pub fn of(vertices: &[Vertex]) -> Option<Self> {
        let first = vertices.first()?;
        let init = Bounds { min: first.position, max: first.position };

        Some(vertices.iter().fold(init, |mut b, v| {
            for axis in 0..3 {
                b.min[axis] = b.min[axis].min(v.position[axis]);
                b.max[axis] = b.max[axis].max(v.position[axis]);
            }
            b
        }))
    }

    pub fn center(&self) -> [f32; 3] {
        std::array::from_fn(|a| 0.5 * (self.min[a] + self.max[a]))
    }

    /// Largest side length.
    pub fn extent(&self) -> f32 {
        (0..3)
            .map(|a| self.max[a] - self.min[a])
            .fold(0.0, f32::max)
    }
}

/// One shape's slice of a [`ShapeBatch`] buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRange {
    pub name: String,
    pub topology: Topology,
    /// Index of the shape's first vertex in the batch.
    pub first: u32,
    pub count: u32,
    pub bounds: Option<Bounds>,
}

impl ShapeRange {
    /// Vertex range for a draw call.
    #[inline]
    pub fn vertices(&self) -> std::ops::Range<u32> {
        self.first..self.first + self.count
    }
}

/// Several generated sequences concatenated into a single vertex buffer.
///
/// Offsets are cumulative vertex counts in push order.
#[derive(Debug, Clone, Default)]
pub struct ShapeBatch {
    vertices: Vec<Vertex>,
    shapes: Vec<ShapeRange>,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shape and returns its index.
    ///
    /// Fails without modifying the batch if the shape would end past
    /// `u32::MAX` vertices.
    pub fn push(
        &mut self,
        name: impl Into<String>,
        topology: Topology,
        vertices: &[Vertex],
    ) -> Result<usize, GeomError> {
        let (first, count) = draw_range(self.vertices.len(), vertices.len())?;
        let range = ShapeRange {
            name: name.into(),
            topology,
            first,
            count,
            bounds: Bounds::of(vertices),
        };
        log::debug!(
            "batched {:?} ({:?}) at {}..{}",
            range.name,
            range.topology,
            range.first,
            range.first + range.count
        );

        self.vertices.extend_from_slice(vertices);
        self.shapes.push(range);
        Ok(self.shapes.len() - 1)
    }

    pub fn shapes(&self) -> &[ShapeRange] {
        &self.shapes
    }

    pub fn shape(&self, index: usize) -> Option<&ShapeRange> {
        self.shapes.get(index)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The whole batch as the packed GPU buffer.
    pub fn flattened(&self) -> &[f32] {
        writer::flatten(&self.vertices)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Converts a shape's start and length to a `u32` draw range.
fn draw_range(first: usize, count: usize) -> Result<(u32, u32), GeomError> {
    let too_many = || GeomError::TooManyVertices(first.saturating_add(count));

    let first32 = u32::try_from(first).map_err(|_| too_many())?;
    let count32 = u32::try_from(count).map_err(|_| too_many())?;
    first32.checked_add(count32).ok_or_else(too_many)?;
    Ok((first32, count32))
}
