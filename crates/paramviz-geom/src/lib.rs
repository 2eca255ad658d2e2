//! Vertex generation for paramviz.
//!
//! Pure generators map numeric domains to position + color vertices, the
//! writer dumps them as text and packs them for GPU upload, and
//! [`ShapeBatch`] concatenates several shapes into one buffer with per-shape
//! draw ranges.
//!
//! ```
//! use paramviz_geom::{sampler, writer};
//!
//! let graph = sampler::sample_function(|x| x * x - 2.0 * x + 4.0, 0.0, 3.0, 100);
//! assert_eq!(graph[1].position, [3.0, 7.0, 0.0]);
//! assert_eq!(writer::flatten(&graph).len(), 600);
//! ```

pub mod batch;
pub mod error;
pub mod sampler;
pub mod vertex;
pub mod writer;

pub use batch::{Bounds, ShapeBatch, ShapeRange, Topology};
pub use error::{GeomError, WriteError};
pub use vertex::Vertex;
pub use writer::OpenMode;
