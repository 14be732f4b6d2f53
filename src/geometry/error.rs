// src/geometry/error.rs

use crate::geometry::Point;
use thiserror::Error;

/// Failures raised by the geometry operations.
///
/// All of these are detected before any work is done; no partial result is
/// ever returned alongside one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("can't operate on a null shape")]
    NullInput,

    #[error("box size must be positive, got {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    /// A derived coordinate (a corner, a moved edge) doesn't fit in an `i32`.
    #[error("box at {origin:?} sized {width}x{height} leaves the i32 range")]
    CoordinateOverflow {
        origin: Point,
        width: i32,
        height: i32,
    },

    #[error("segment left edge {left} is past its right edge {right}")]
    InvalidSegment { left: i32, right: i32 },
}
