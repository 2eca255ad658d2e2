use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Rejected generator parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// The spiral divides its index by the level of detail.
    #[error("level of detail must be greater than zero")]
    ZeroLevelOfDetail,

    #[error("grid cell size must be finite and positive, got {0}")]
    InvalidCellSize(f32),

    /// Draw ranges are `u32`; a batch cannot address more vertices.
    #[error("batch would hold {0} vertices, more than a u32 draw range allows")]
    TooManyVertices(usize),
}

/// Failure while dumping, reading back or unpacking vertex data.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 1-based line number of a malformed dump line.
    #[error("{path}:{line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("flattened buffer length {0} is not a multiple of 6")]
    RaggedBuffer(usize),
}
