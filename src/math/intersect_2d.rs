use super::{cross, Point2, TOLERANCE};

/// Orientation of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation of the triple `(p, q, r)`.
#[must_use]
pub fn orientation(p: &Point2, q: &Point2, r: &Point2) -> Orientation {
    let val = cross(p, q, r);
    if val.abs() < TOLERANCE {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// For collinear `p, q, r`: does `q` lie within the bounding box of `p → r`?
#[must_use]
pub fn on_segment(p: &Point2, q: &Point2, r: &Point2) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Closed segment-segment intersection test `a0 → a1` vs `b0 → b1`.
///
/// Touching endpoints and collinear overlaps count as intersecting.
#[must_use]
pub fn segments_intersect(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let o1 = orientation(a0, a1, b0);
    let o2 = orientation(a0, a1, b1);
    let o3 = orientation(b0, b1, a0);
    let o4 = orientation(b0, b1, a1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(a0, b0, a1))
        || (o2 == Orientation::Collinear && on_segment(a0, b1, a1))
        || (o3 == Orientation::Collinear && on_segment(b0, a0, b1))
        || (o4 == Orientation::Collinear && on_segment(b0, a1, b1))
}

/// Crossing of the segment `a → b` with the axis-parallel line
/// `coord(axis) == value`.
///
/// Returns the crossing point and the segment parameter `t ∈ [0, 1]`
/// (inclusive, `eps` slack). Segments parallel to the line never cross it.
#[must_use]
pub fn segment_axis_crossing(
    a: &Point2,
    b: &Point2,
    axis: Axis,
    value: f64,
    eps: f64,
) -> Option<(Point2, f64)> {
    let (a_fixed, b_fixed) = match axis {
        Axis::X => (a.x, b.x),
        Axis::Y => (a.y, b.y),
    };
    let delta = b_fixed - a_fixed;
    if delta.abs() < TOLERANCE {
        return None;
    }
    let t = (value - a_fixed) / delta;
    if t < -eps || t > 1.0 + eps {
        return None;
    }
    let t = t.clamp(0.0, 1.0);
    let point = match axis {
        Axis::X => Point2::new(value, a.y + t * (b.y - a.y)),
        Axis::Y => Point2::new(a.x + t * (b.x - a.x), value),
    };
    Some((point, t))
}

/// Coordinate axis selector for axis-parallel lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Lines of constant `x`.
    X,
    /// Lines of constant `y`.
    Y,
}
