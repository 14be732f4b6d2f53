// src/geometry/bounding_box.rs
//! Axis-aligned boxes on the integer grid.
//!
//! A box stores its top-left corner and a size. The opposite corner is always
//! derived, never stored, so moving a box can't leave it inconsistent.

use crate::geometry::{GeometryError, Point};
use log::trace;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisAlignedBoundingBox {
    pub top_left: Point,
    pub width: i32,
    pub height: i32,
}

impl AxisAlignedBoundingBox {
    pub fn new(top_left: Point, width: i32, height: i32) -> Self {
        AxisAlignedBoundingBox {
            top_left,
            width,
            height,
        }
    }

    /// True when both dimensions are strictly positive.
    pub fn size_is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    fn check_size(&self) -> Result<(), GeometryError> {
        if self.size_is_valid() {
            Ok(())
        } else {
            Err(GeometryError::InvalidSize {
                width: self.width,
                height: self.height,
            })
        }
    }

    fn overflow(&self, origin: Point) -> GeometryError {
        GeometryError::CoordinateOverflow {
            origin,
            width: self.width,
            height: self.height,
        }
    }

    fn corner(&self, dx: i32, dy: i32) -> Result<Point, GeometryError> {
        self.check_size()?;
        self.top_left
            .checked_offset(dx, dy)
            .ok_or_else(|| self.overflow(self.top_left))
    }

    pub fn top_right(&self) -> Result<Point, GeometryError> {
        self.corner(self.width, 0)
    }

    pub fn bottom_left(&self) -> Result<Point, GeometryError> {
        self.corner(0, self.height)
    }

    pub fn bottom_right(&self) -> Result<Point, GeometryError> {
        self.corner(self.width, self.height)
    }

    /// Returns a copy translated vertically so its bottom edge sits on `y`.
    pub fn move_bottom_to(&self, y: i32) -> Result<Self, GeometryError> {
        let top = y
            .checked_sub(self.height)
            .ok_or_else(|| self.overflow(Point::new(self.top_left.x, y)))?;
        let top_left = Point::new(self.top_left.x, top);
        Ok(AxisAlignedBoundingBox { top_left, ..*self })
    }

    /// Returns a copy translated horizontally so its right edge sits on `x`.
    pub fn move_right_to(&self, x: i32) -> Result<Self, GeometryError> {
        let left = x
            .checked_sub(self.width)
            .ok_or_else(|| self.overflow(Point::new(x, self.top_left.y)))?;
        let top_left = Point::new(left, self.top_left.y);
        Ok(AxisAlignedBoundingBox { top_left, ..*self })
    }

    /// Overlap of two boxes, as its top-left and bottom-right corners.
    ///
    /// Boxes are treated as closed rectangles, so boxes that only share an
    /// edge or a corner produce a degenerate (zero width and/or height)
    /// overlap rather than `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_generators::geometry::{AxisAlignedBoundingBox, Point};
    ///
    /// let a = AxisAlignedBoundingBox::new(Point::new(0, 0), 4, 4);
    /// let b = AxisAlignedBoundingBox::new(Point::new(2, 2), 4, 4);
    /// assert_eq!(
    ///     a.intersection(&b).unwrap(),
    ///     Some([Point::new(2, 2), Point::new(4, 4)])
    /// );
    /// ```
    pub fn intersection(&self, other: &Self) -> Result<Option<[Point; 2]>, GeometryError> {
        let self_br = self.bottom_right()?;
        let other_br = other.bottom_right()?;

        let x = overlap_closed(self.top_left.x, self_br.x, other.top_left.x, other_br.x);
        let y = overlap_closed(self.top_left.y, self_br.y, other.top_left.y, other_br.y);

        let result = match (x, y) {
            (Some((x1, x2)), Some((y1, y2))) => Some([Point::new(x1, y1), Point::new(x2, y2)]),
            _ => None,
        };
        trace!("intersection of {:?} and {:?}: {:?}", self, other, result);
        Ok(result)
    }

    /// True when the closed rectangles share at least one point.
    pub fn intersects(&self, other: &Self) -> Result<bool, GeometryError> {
        Ok(self.intersection(other)?.is_some())
    }

    pub fn contains_point(&self, point: &Point) -> Result<bool, GeometryError> {
        let br = self.bottom_right()?;
        Ok(point.x >= self.top_left.x
            && point.x <= br.x
            && point.y >= self.top_left.y
            && point.y <= br.y)
    }
}

/// Intersection of two possibly-absent boxes. Either side missing is a
/// `NullInput` failure.
pub fn intersect(
    a: Option<&AxisAlignedBoundingBox>,
    b: Option<&AxisAlignedBoundingBox>,
) -> Result<Option<[Point; 2]>, GeometryError> {
    match (a, b) {
        (Some(a), Some(b)) => a.intersection(b),
        _ => Err(GeometryError::NullInput),
    }
}

// Closed interval [a1, a2] ∩ [b1, b2].
fn overlap_closed(a1: i32, a2: i32, b1: i32, b2: i32) -> Option<(i32, i32)> {
    let lo = a1.max(b1);
    let hi = a2.min(b2);
    if lo <= hi {
        Some((lo, hi))
    } else {
        None
    }
}
