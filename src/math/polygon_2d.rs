use std::cmp::Ordering;

use super::distance_2d::point_to_segment_dist;
use super::intersect_2d::segments_intersect;
use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Vertex average of a point set. `None` for an empty slice.
#[must_use]
pub fn centroid(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point2::new(sx / n, sy / n))
}

/// Sorts items by the angle (`atan2`) of their position around the vertex
/// centroid, ascending. For a convex point set this yields a
/// counter-clockwise, non-self-intersecting ordering.
pub fn sort_by_centroid_angle<T>(items: &mut [T], position: impl Fn(&T) -> Point2) {
    let points: Vec<Point2> = items.iter().map(&position).collect();
    let Some(c) = centroid(&points) else {
        return;
    };
    let angle = |p: &Point2| (p.y - c.y).atan2(p.x - c.x);
    items.sort_by(|a, b| {
        angle(&position(a))
            .partial_cmp(&angle(&position(b)))
            .unwrap_or(Ordering::Equal)
    });
}

/// Even-odd ray-casting point-in-polygon test.
///
/// The polygon is implicitly closed. Only meaningful for simple polygons.
#[must_use]
pub fn point_in_polygon(point: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (&polygon[i], &polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Returns `true` if `point` is within `eps` of an edge of the closed
/// polygon.
#[must_use]
pub fn on_polygon_edge(point: &Point2, polygon: &[Point2], eps: f64) -> bool {
    let n = polygon.len();
    (0..n).any(|i| point_to_segment_dist(point, &polygon[i], &polygon[(i + 1) % n]) <= eps)
}

/// Returns `true` if no two non-adjacent edges of the closed polygon touch.
#[must_use]
pub fn is_simple_polygon(polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 4 {
        return true;
    }
    for i in 0..n {
        let a0 = &polygon[i];
        let a1 = &polygon[(i + 1) % n];
        for j in (i + 2)..n {
            // First and last edges share vertex 0.
            if i == 0 && j == n - 1 {
                continue;
            }
            let b0 = &polygon[j];
            let b1 = &polygon[(j + 1) % n];
            if segments_intersect(a0, a1, b0, b1) {
                return false;
            }
        }
    }
    true
}

/// Rotates a closed polygon so that vertex `start` comes first.
#[must_use]
pub fn rotate_to_start<T: Clone>(items: &[T], start: usize) -> Vec<T> {
    if start == 0 || start >= items.len() {
        return items.to_vec();
    }
    let mut rotated = Vec::with_capacity(items.len());
    rotated.extend_from_slice(&items[start..]);
    rotated.extend_from_slice(&items[..start]);
    rotated
}
