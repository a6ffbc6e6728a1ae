use serde::{Deserialize, Serialize};

use crate::math::intersect_2d::{segment_axis_crossing, Axis};
use crate::math::{approx_eq, Point2, DEDUP_EPSILON};

/// Side length of the default graph-space square.
pub const GRAPH_SIZE: f64 = 500.0;

/// One of the four sides of a [`BoundingSquare`].
///
/// The discriminant order follows the counter-clockwise perimeter walk
/// starting at the minimum corner: edge `i` runs from corner `i` to
/// corner `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Bottom = 0,
    Right = 1,
    Top = 2,
    Left = 3,
}

impl Edge {
    /// All edges in counter-clockwise order.
    pub const ALL: [Edge; 4] = [Edge::Bottom, Edge::Right, Edge::Top, Edge::Left];

    /// Index into [`BoundingSquare::corners`] of this edge's first corner.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    fn axis(self) -> Axis {
        match self {
            Edge::Bottom | Edge::Top => Axis::Y,
            Edge::Left | Edge::Right => Axis::X,
        }
    }
}

/// Axis-aligned square (or rectangle) in graph space, given by its min/max
/// corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingSquare {
    pub min: Point2,
    pub max: Point2,
}

impl Default for BoundingSquare {
    fn default() -> Self {
        Self::graph()
    }
}

impl BoundingSquare {
    /// Creates a square from its min and max corners.
    #[must_use]
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// The fixed `(0,0)-(500,500)` graph-space square.
    #[must_use]
    pub fn graph() -> Self {
        Self::new(Point2::new(0.0, 0.0), Point2::new(GRAPH_SIZE, GRAPH_SIZE))
    }

    /// Corners in counter-clockwise order starting at `min`.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.min.x, self.min.y),
            Point2::new(self.max.x, self.min.y),
            Point2::new(self.max.x, self.max.y),
            Point2::new(self.min.x, self.max.y),
        ]
    }

    /// Center of the square.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Returns a copy grown by `offset` on every side.
    #[must_use]
    pub fn inflated(&self, offset: f64) -> Self {
        Self::new(
            Point2::new(self.min.x - offset, self.min.y - offset),
            Point2::new(self.max.x + offset, self.max.y + offset),
        )
    }

    /// Fixed coordinate of an edge's supporting line.
    #[must_use]
    pub fn edge_value(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Bottom => self.min.y,
            Edge::Right => self.max.x,
            Edge::Top => self.max.y,
            Edge::Left => self.min.x,
        }
    }

    /// Closed containment test.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Strict interior test: points on the perimeter are not inside.
    #[must_use]
    pub fn contains_strictly(&self, p: &Point2) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }

    /// Returns `true` if `p` lies on `edge` (within [`DEDUP_EPSILON`]).
    #[must_use]
    pub fn on_edge(&self, p: &Point2, edge: Edge) -> bool {
        let eps = DEDUP_EPSILON;
        let value = self.edge_value(edge);
        match edge.axis() {
            Axis::X => {
                (p.x - value).abs() < eps && p.y >= self.min.y - eps && p.y <= self.max.y + eps
            }
            Axis::Y => {
                (p.y - value).abs() < eps && p.x >= self.min.x - eps && p.x <= self.max.x + eps
            }
        }
    }

    /// Returns `true` if `p` lies on any edge.
    #[must_use]
    pub fn on_perimeter(&self, p: &Point2) -> bool {
        Edge::ALL.iter().any(|&e| self.on_edge(p, e))
    }

    /// An edge containing both points, if any.
    ///
    /// This is the "boundary runs along a side" test: both endpoints of the
    /// boundary share `x = min/max` or `y = min/max`.
    #[must_use]
    pub fn shared_edge(&self, a: &Point2, b: &Point2) -> Option<Edge> {
        if approx_eq(a, b, DEDUP_EPSILON) {
            return None;
        }
        Edge::ALL
            .into_iter()
            .find(|&e| self.on_edge(a, e) && self.on_edge(b, e))
    }

    /// Crossing of the segment `a → b` with one edge.
    ///
    /// Returns the (clamped) crossing point and the segment parameter.
    #[must_use]
    pub fn segment_edge_crossing(
        &self,
        a: &Point2,
        b: &Point2,
        edge: Edge,
        eps: f64,
    ) -> Option<(Point2, f64)> {
        let (point, t) = segment_axis_crossing(a, b, edge.axis(), self.edge_value(edge), eps)?;
        let within = match edge.axis() {
            Axis::X => point.y >= self.min.y - eps && point.y <= self.max.y + eps,
            Axis::Y => point.x >= self.min.x - eps && point.x <= self.max.x + eps,
        };
        within.then(|| (self.clamp(&point), t))
    }

    /// Clamps a point into the closed square.
    #[must_use]
    pub fn clamp(&self, p: &Point2) -> Point2 {
        Point2::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
        )
    }

    /// Returns the index of the corner equal to `p`, if any.
    #[must_use]
    pub fn corner_index(&self, p: &Point2) -> Option<usize> {
        self.corners()
            .iter()
            .position(|c| approx_eq(c, p, DEDUP_EPSILON))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn default_is_graph_square() {
        let sq = BoundingSquare::default();
        assert_eq!(sq.corners()[2], p(500.0, 500.0));
        assert_eq!(sq.center(), p(250.0, 250.0));
    }

    #[test]
    fn perimeter_points_are_not_strictly_inside() {
        let sq = BoundingSquare::graph();
        assert!(sq.contains(&p(0.0, 250.0)));
        assert!(!sq.contains_strictly(&p(0.0, 250.0)));
        assert!(sq.contains_strictly(&p(1.0, 250.0)));
        assert!(!sq.contains(&p(-1.0, 250.0)));
    }

    #[test]
    fn shared_edge_detection() {
        let sq = BoundingSquare::graph();
        assert_eq!(sq.shared_edge(&p(0.0, 100.0), &p(0.0, 400.0)), Some(Edge::Left));
        assert_eq!(sq.shared_edge(&p(0.0, 0.0), &p(500.0, 0.0)), Some(Edge::Bottom));
        assert_eq!(sq.shared_edge(&p(0.0, 100.0), &p(500.0, 400.0)), None);
        assert_eq!(sq.shared_edge(&p(0.0, 100.0), &p(0.0, 100.0)), None);
    }

    #[test]
    fn edge_crossing_rejects_outside_span() {
        let sq = BoundingSquare::graph();
        // Crosses x = 0 at y = 600: beyond the square.
        assert!(sq
            .segment_edge_crossing(&p(-10.0, 600.0), &p(10.0, 600.0), Edge::Left, 1e-6)
            .is_none());
        let (pt, _) = sq
            .segment_edge_crossing(&p(-10.0, 300.0), &p(10.0, 300.0), Edge::Left, 1e-6)
            .unwrap();
        assert_eq!(pt, p(0.0, 300.0));
    }

    #[test]
    fn inflated_grows_every_side() {
        let sq = BoundingSquare::graph().inflated(30.0);
        assert_eq!(sq.min, p(-30.0, -30.0));
        assert_eq!(sq.max, p(530.0, 530.0));
    }

    #[test]
    fn corner_lookup() {
        let sq = BoundingSquare::graph();
        assert_eq!(sq.corner_index(&p(500.0, 0.0)), Some(1));
        assert_eq!(sq.corner_index(&p(250.0, 0.0)), None);
    }
}
