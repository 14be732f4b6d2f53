// src/geometry/mod.rs
//! Integer 2D geometry used by the map generators: box overlap tests for
//! room placement and skyline envelopes of height-tagged ranges.

pub mod bounding_box;
pub mod error;
pub mod point;
pub mod segment;
pub mod skyline;

pub use bounding_box::{intersect, AxisAlignedBoundingBox};
pub use error::GeometryError;
pub use point::Point;
pub use segment::{combine, Overlap, Segment};
pub use skyline::{height_at, merge, SkylineConfig, SkylineMerger};
