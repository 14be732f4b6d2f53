// src/geometry/skyline.rs
//! # Skyline merge
//!
//! Collapses a set of height-tagged, possibly overlapping ranges into the
//! envelope formed by the highest segment at every position. The result is
//! sorted by `left`, has no overlaps, and never leaves two touching segments
//! at the same height.
//!
//! The merge is divide and conquer: the input is split by index, each half
//! is reduced to a skyline on its own (on separate rayon tasks once the half
//! is large enough) and the two partial skylines are swept together.

use crate::geometry::segment::combine;
use crate::geometry::{GeometryError, Segment};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Tuning for [`SkylineMerger`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkylineConfig {
    /// Inputs longer than this are split across rayon tasks.
    pub parallel_threshold: usize,
}

impl Default for SkylineConfig {
    fn default() -> Self {
        SkylineConfig {
            parallel_threshold: 4096,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SkylineMerger {
    config: SkylineConfig,
}

impl SkylineMerger {
    pub fn new(config: SkylineConfig) -> Self {
        SkylineMerger { config }
    }

    pub fn config(&self) -> &SkylineConfig {
        &self.config
    }

    /// Merges `segments` into their skyline.
    ///
    /// Fails with [`GeometryError::InvalidSegment`] if any segment has
    /// `left > right`; nothing is computed in that case.
    pub fn merge(&self, segments: &[Segment]) -> Result<Vec<Segment>, GeometryError> {
        if let Some(bad) = segments.iter().find(|s| !s.is_valid()) {
            return Err(GeometryError::InvalidSegment {
                left: bad.left,
                right: bad.right,
            });
        }

        debug!("merging {} segments", segments.len());
        let skyline = self.merge_valid(segments);
        debug!("skyline has {} segments", skyline.len());
        Ok(skyline)
    }

    fn merge_valid(&self, segments: &[Segment]) -> Vec<Segment> {
        match segments {
            [] => Vec::new(),
            [only] => vec![*only],
            [a, b] => coalesce(combine(*a, *b)),
            _ => {
                let (left, right) = segments.split_at(segments.len() / 2);
                let (left, right) = if segments.len() > self.config.parallel_threshold {
                    rayon::join(|| self.merge_valid(left), || self.merge_valid(right))
                } else {
                    (self.merge_valid(left), self.merge_valid(right))
                };
                merge_skylines(&left, &right)
            }
        }
    }
}

/// Merges `segments` with the default configuration.
///
/// # Examples
///
/// ```
/// use map_generators::geometry::{merge, Segment};
///
/// let skyline = merge(&[Segment::new(4, 6, 5), Segment::new(0, 10, 3)]).unwrap();
/// assert_eq!(
///     skyline,
///     vec![Segment::new(0, 3, 3), Segment::new(4, 6, 5), Segment::new(7, 10, 3)]
/// );
/// ```
pub fn merge(segments: &[Segment]) -> Result<Vec<Segment>, GeometryError> {
    SkylineMerger::default().merge(segments)
}

/// Height of the skyline at `position`, or `None` outside of it.
pub fn height_at(skyline: &[Segment], position: i32) -> Option<i32> {
    let idx = skyline.partition_point(|s| s.right < position);
    skyline
        .get(idx)
        .filter(|s| s.left <= position)
        .map(|s| s.height)
}

// Walks a sorted, non-overlapping skyline in increasing position order.
struct Cursor<'a> {
    skyline: &'a [Segment],
    idx: usize,
}

impl<'a> Cursor<'a> {
    fn new(skyline: &'a [Segment]) -> Self {
        Cursor { skyline, idx: 0 }
    }

    fn height_at(&mut self, position: i64) -> Option<i32> {
        while self
            .skyline
            .get(self.idx)
            .is_some_and(|s| (s.right as i64) < position)
        {
            self.idx += 1;
        }
        self.skyline
            .get(self.idx)
            .filter(|s| s.left as i64 <= position)
            .map(|s| s.height)
    }
}

/// Sweeps two skylines together.
///
/// Every position where either skyline can change height is a breakpoint.
/// Between two consecutive breakpoints both inputs are constant, so the
/// output over that stretch is the higher of the two (or a gap if neither
/// covers it).
fn merge_skylines(a: &[Segment], b: &[Segment]) -> Vec<Segment> {
    let mut breakpoints: Vec<i64> = a
        .iter()
        .chain(b.iter())
        .flat_map(|s| [s.left as i64, s.right as i64 + 1])
        .collect();
    breakpoints.sort_unstable();
    breakpoints.dedup();

    let mut ca = Cursor::new(a);
    let mut cb = Cursor::new(b);
    let mut out: Vec<Segment> = Vec::with_capacity(a.len() + b.len());

    for window in breakpoints.windows(2) {
        let (start, end) = (window[0], window[1] - 1);
        let height = match (ca.height_at(start), cb.height_at(start)) {
            (Some(ha), Some(hb)) => ha.max(hb),
            (Some(h), None) | (None, Some(h)) => h,
            (None, None) => continue,
        };
        // Both bounds lie within some input segment, so they fit in an i32.
        push_coalesced(&mut out, Segment::new(start as i32, end as i32, height));
    }

    trace!("merged {} + {} into {} segments", a.len(), b.len(), out.len());
    out
}

fn push_coalesced(out: &mut Vec<Segment>, next: Segment) {
    if let Some(last) = out.last_mut() {
        if last.height == next.height && last.right as i64 + 1 == next.left as i64 {
            last.right = next.right;
            return;
        }
    }
    out.push(next);
}

/// Joins touching neighbours of equal height in an already sorted skyline.
pub(crate) fn coalesce(skyline: Vec<Segment>) -> Vec<Segment> {
    let mut out = Vec::with_capacity(skyline.len());
    for segment in skyline {
        push_coalesced(&mut out, segment);
    }
    out
}
