// src/geometry/point.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Returns a new point shifted by `(dx, dy)`, or `None` if either
    /// coordinate leaves the `i32` range.
    pub fn checked_offset(&self, dx: i32, dy: i32) -> Option<Self> {
        Some(Point::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_returns_new_point() {
        let p = Point::new(3, -2);
        assert_eq!(p.checked_offset(4, 4), Some(Point::new(7, 2)));
        assert_eq!(p, Point::new(3, -2));
    }

    #[test]
    fn test_offset_out_of_range() {
        assert_eq!(Point::new(i32::MAX - 1, 0).checked_offset(5, 0), None);
        assert_eq!(Point::new(0, i32::MIN).checked_offset(0, -1), None);
    }
}
