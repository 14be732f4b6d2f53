// src/geometry/segment.rs
//! Height-tagged integer ranges and the pairwise combiner used by the
//! skyline merge.

use serde::{Deserialize, Serialize};

/// An inclusive range `[left, right]` carrying a height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub left: i32,
    pub right: i32,
    pub height: i32,
}

/// How two segment ranges relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlap {
    /// The first segment ends before the second starts.
    DisjointLeft,
    /// The first segment starts after the second ends.
    DisjointRight,
    IdenticalRange,
    /// `inner` lies strictly inside `outer`, sharing neither endpoint.
    Nested { outer: Segment, inner: Segment },
    /// The ranges share exactly one position.
    TouchingEdge,
    PartialOverlap,
}

impl Segment {
    pub fn new(left: i32, right: i32, height: i32) -> Self {
        Segment {
            left,
            right,
            height,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.left <= self.right
    }

    /// Number of integer positions covered.
    pub fn span(&self) -> i64 {
        self.right as i64 - self.left as i64 + 1
    }

    pub fn contains(&self, position: i32) -> bool {
        self.left <= position && position <= self.right
    }

    /// A copy with the left edge moved `by` units to the right, or `None`
    /// if nothing would be left of the range.
    pub fn shrink_left(&self, by: i32) -> Option<Segment> {
        let left = self.left.checked_add(by)?;
        if left > self.right {
            return None;
        }
        Some(Segment { left, ..*self })
    }

    /// A copy with the right edge moved `by` units to the left, or `None`
    /// if nothing would be left of the range.
    pub fn shrink_right(&self, by: i32) -> Option<Segment> {
        let right = self.right.checked_sub(by)?;
        if right < self.left {
            return None;
        }
        Some(Segment { right, ..*self })
    }

    pub fn relation(&self, other: &Segment) -> Overlap {
        let (a, b) = (self, other);
        if a.right < b.left {
            Overlap::DisjointLeft
        } else if b.right < a.left {
            Overlap::DisjointRight
        } else if a.left == b.left && a.right == b.right {
            Overlap::IdenticalRange
        } else if b.left > a.left && b.right < a.right {
            Overlap::Nested { outer: *a, inner: *b }
        } else if a.left > b.left && a.right < b.right {
            Overlap::Nested { outer: *b, inner: *a }
        } else if a.right.min(b.right) == a.left.max(b.left) {
            Overlap::TouchingEdge
        } else {
            Overlap::PartialOverlap
        }
    }
}

/// Combines two segments into the skyline they form together, sorted by
/// `left`.
///
/// Overlapping segments of equal height collapse into a single segment over
/// the union of their ranges. Otherwise the lower segment loses whatever the
/// higher one covers, and is dropped if nothing remains.
///
/// Both inputs are assumed valid; see [`crate::geometry::skyline`] for the
/// checked entry point.
pub fn combine(a: Segment, b: Segment) -> Vec<Segment> {
    match a.relation(&b) {
        Overlap::DisjointLeft => vec![a, b],
        Overlap::DisjointRight => vec![b, a],
        _ if a.height == b.height => vec![Segment::new(
            a.left.min(b.left),
            a.right.max(b.right),
            a.height,
        )],
        Overlap::IdenticalRange => vec![if a.height >= b.height { a } else { b }],
        Overlap::Nested { outer, inner } => {
            if inner.height <= outer.height {
                return vec![outer];
            }
            vec![
                Segment::new(outer.left, inner.left - 1, outer.height),
                inner,
                Segment::new(inner.right + 1, outer.right, outer.height),
            ]
        }
        Overlap::TouchingEdge => {
            let (high, low) = if a.height > b.height { (a, b) } else { (b, a) };
            let shared = a.left.max(b.left);
            let trimmed = if low.left == shared {
                low.shrink_left(1)
            } else {
                low.shrink_right(1)
            };
            let mut out = vec![high];
            out.extend(trimmed);
            out.sort_by_key(|s| s.left);
            out
        }
        Overlap::PartialOverlap => {
            let (high, low) = if a.height > b.height { (a, b) } else { (b, a) };
            trim_under(high, low)
        }
    }
}

// Removes `high`'s range from `low`. Callers guarantee the ranges overlap and
// that `low` does not strictly contain `high`, so at most one piece of `low`
// survives.
fn trim_under(high: Segment, low: Segment) -> Vec<Segment> {
    let mut out = Vec::with_capacity(2);
    if low.left < high.left {
        out.push(Segment::new(low.left, high.left - 1, low.height));
    }
    out.push(high);
    if low.right > high.right {
        out.push(Segment::new(high.right + 1, low.right, low.height));
    }
    out
}
