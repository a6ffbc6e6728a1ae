use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// Whether a boundary is a straight chord or a free-hand curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    Line,
    Curve,
}

/// A separating boundary in graph space.
///
/// Once resolved, both extreme points lie on the square's perimeter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Boundary {
    /// Straight chord between two perimeter points.
    Line([Point2; 2]),
    /// Ordered chain; first and last points on the perimeter, interior
    /// points in drawing order.
    Curve(Vec<Point2>),
}

impl Boundary {
    /// Returns the boundary kind.
    #[must_use]
    pub fn kind(&self) -> BoundaryKind {
        match self {
            Boundary::Line(_) => BoundaryKind::Line,
            Boundary::Curve(_) => BoundaryKind::Curve,
        }
    }

    /// All points of the boundary path, endpoints included.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        match self {
            Boundary::Line(pts) => pts,
            Boundary::Curve(pts) => pts,
        }
    }

    /// First and last point, or `None` if fewer than 2 points exist.
    #[must_use]
    pub fn endpoints(&self) -> Option<(Point2, Point2)> {
        match self.points() {
            [first, .., last] => Some((*first, *last)),
            _ => None,
        }
    }

    /// Points strictly between the endpoints. Empty for lines.
    #[must_use]
    pub fn interior(&self) -> &[Point2] {
        match self.points() {
            [_, inner @ .., _] => inner,
            _ => &[],
        }
    }

    /// A boundary with fewer than 2 points does not partition anything yet.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.points().len() >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn line_has_no_interior() {
        let b = Boundary::Line([p(0.0, 10.0), p(500.0, 20.0)]);
        assert_eq!(b.kind(), BoundaryKind::Line);
        assert!(b.interior().is_empty());
        assert_eq!(b.endpoints(), Some((p(0.0, 10.0), p(500.0, 20.0))));
    }

    #[test]
    fn curve_interior_excludes_endpoints() {
        let b = Boundary::Curve(vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 1.0), p(3.0, 0.0)]);
        assert_eq!(b.interior(), &[p(1.0, 1.0), p(2.0, 1.0)]);
        assert!(b.is_resolved());
    }

    #[test]
    fn short_curve_is_unresolved() {
        let b = Boundary::Curve(vec![p(0.0, 0.0)]);
        assert!(!b.is_resolved());
        assert!(b.endpoints().is_none());
        assert!(b.interior().is_empty());
    }
}
