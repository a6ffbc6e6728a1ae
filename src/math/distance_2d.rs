use super::Point2;

/// Returns the minimum distance from `p` to the segment `a → b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (p - a).norm();
    }

    // Project onto the infinite line, clamp to the segment.
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;
    (p - closest).norm()
}

/// Smallest distance from any endpoint of one segment to the other segment.
///
/// Two crossing segments with a small clearance form a tight "near loop",
/// typically pointer jitter rather than an intended crossing.
#[must_use]
pub fn endpoint_clearance(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> f64 {
    point_to_segment_dist(a0, b0, b1)
        .min(point_to_segment_dist(a1, b0, b1))
        .min(point_to_segment_dist(b0, a0, a1))
        .min(point_to_segment_dist(b1, a0, a1))
}
