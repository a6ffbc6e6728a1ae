use crate::math::distance_2d::endpoint_clearance;
use crate::math::intersect_2d::segments_intersect;
use crate::math::Point2;

/// A crossing between two non-adjacent segments of an open path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathCrossing {
    /// Index of the first segment.
    pub seg_i: usize,
    /// Index of the second segment (always `>= seg_i + 2`).
    pub seg_j: usize,
    /// Smallest endpoint-to-other-segment distance of the pair.
    pub clearance: f64,
}

impl PathCrossing {
    /// A crossing whose clearance is within `tolerance` is a tremor-sized
    /// near loop, not a real self-intersection.
    #[must_use]
    pub fn is_small(&self, tolerance: f64) -> bool {
        self.clearance <= tolerance
    }
}

/// Finds the first crossing (in `(i, j)` scan order) matching `accept`.
pub(crate) fn find_first(
    path: &[Point2],
    mut accept: impl FnMut(&PathCrossing) -> bool,
) -> Option<PathCrossing> {
    let n = path.len();
    if n < 4 {
        return None;
    }
    for i in 0..n - 1 {
        for j in (i + 2)..n - 1 {
            let (a0, a1) = (&path[i], &path[i + 1]);
            let (b0, b1) = (&path[j], &path[j + 1]);
            if !segments_intersect(a0, a1, b0, b1) {
                continue;
            }
            let crossing = PathCrossing {
                seg_i: i,
                seg_j: j,
                clearance: endpoint_clearance(a0, a1, b0, b1),
            };
            if accept(&crossing) {
                return Some(crossing);
            }
        }
    }
    None
}

/// Returns `true` if the open path crosses itself with a clearance larger
/// than `tolerance`.
#[must_use]
pub fn has_self_intersection(path: &[Point2], tolerance: f64) -> bool {
    find_first(path, |c| !c.is_small(tolerance)).is_some()
}
