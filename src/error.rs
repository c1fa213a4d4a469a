//! Error type for nnindex.
//!
//! Queries on well-formed input never fail; an empty index answers `None`.
//! Errors only come from the dynamic boundaries: flat coordinate slices,
//! point files and strategy names.

use thiserror::Error;

/// Errors returned by the fallible constructors and queries of the index.
#[derive(Error, Debug)]
pub enum IndexError {
    /// A point or query did not have the dimension of the index.
    #[error("expected {expected} coordinates, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A coordinate was NaN or infinite.
    #[error("coordinate {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },

    /// A flat coordinate slice could not be split into whole points.
    #[error("{len} coordinates cannot be split into points of dimension {dims}")]
    RaggedCoordinates { dims: usize, len: usize },

    /// A line of a point file could not be read as a point.
    #[error("line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },

    /// The strategy name is not one of the known search strategies.
    #[error("unknown search strategy: {0:?}")]
    UnknownStrategy(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
