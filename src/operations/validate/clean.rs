use tracing::trace;

use super::self_intersect::find_first;
use crate::math::Point2;

/// Removes small loops (crossings with clearance `<= threshold`) from a
/// drawn path.
///
/// Each pass splices out the vertices strictly between the two crossing
/// segments, keeping `path[..=i]` followed by `path[j + 1..]`. Every splice
/// drops at least two vertices, so the loop terminates; it stops when no
/// small loop remains or fewer than 4 points are left.
#[must_use]
pub fn clean_small_intersections(path: &[Point2], threshold: f64) -> Vec<Point2> {
    let mut cleaned = path.to_vec();

    while cleaned.len() >= 4 {
        let Some(loop_) = find_first(&cleaned, |c| c.is_small(threshold)) else {
            break;
        };
        trace!(
            seg_i = loop_.seg_i,
            seg_j = loop_.seg_j,
            clearance = loop_.clearance,
            "splicing small loop"
        );
        cleaned.drain(loop_.seg_i + 1..=loop_.seg_j);
    }

    cleaned
}
