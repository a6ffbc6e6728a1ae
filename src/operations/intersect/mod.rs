use std::cmp::Ordering;

use crate::geometry::{BoundingSquare, Edge};
use crate::math::{approx_eq, Point2, DEDUP_EPSILON, TOLERANCE};

/// Intersects the infinite line through two points with the square's
/// perimeter.
///
/// Returns 0, 1 or 2 unique crossings, ordered along the direction
/// `p1 → p2`. A line that only grazes a corner yields a single crossing.
#[derive(Debug, Clone)]
pub struct LineSquareIntersect {
    p1: Point2,
    p2: Point2,
    square: BoundingSquare,
    eps: f64,
}

impl LineSquareIntersect {
    /// Creates the query against the default graph square.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self {
            p1,
            p2,
            square: BoundingSquare::graph(),
            eps: DEDUP_EPSILON,
        }
    }

    /// Uses a different square (e.g. the inflated handle square).
    #[must_use]
    pub fn with_square(mut self, square: BoundingSquare) -> Self {
        self.square = square;
        self
    }

    /// Overrides the acceptance/dedup epsilon.
    #[must_use]
    pub fn with_epsilon(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        let sq = &self.square;
        let eps = self.eps;
        let dx = self.p2.x - self.p1.x;
        let dy = self.p2.y - self.p1.y;

        let mut candidates = Vec::with_capacity(4);

        if dx.abs() < TOLERANCE {
            // Vertical line: meets bottom and top directly.
            if dy.abs() < TOLERANCE {
                return Vec::new();
            }
            let x = self.p1.x;
            if x >= sq.min.x - eps && x <= sq.max.x + eps {
                let x = x.clamp(sq.min.x, sq.max.x);
                candidates.push(Point2::new(x, sq.min.y));
                candidates.push(Point2::new(x, sq.max.y));
            }
        } else {
            let slope = dy / dx;
            let intercept = self.p1.y - slope * self.p1.x;

            candidates.push(Point2::new(sq.min.x, slope * sq.min.x + intercept));
            candidates.push(Point2::new(sq.max.x, slope * sq.max.x + intercept));
            if slope.abs() > TOLERANCE {
                candidates.push(Point2::new((sq.min.y - intercept) / slope, sq.min.y));
                candidates.push(Point2::new((sq.max.y - intercept) / slope, sq.max.y));
            }
            candidates.retain(|c| {
                c.x >= sq.min.x - eps
                    && c.x <= sq.max.x + eps
                    && c.y >= sq.min.y - eps
                    && c.y <= sq.max.y + eps
            });
            for c in &mut candidates {
                *c = sq.clamp(c);
            }
        }

        let mut unique = dedup_points(candidates, eps);

        let dir = self.p2 - self.p1;
        let param = |p: &Point2| (p - self.p1).dot(&dir);
        unique.sort_by(|a, b| param(a).partial_cmp(&param(b)).unwrap_or(Ordering::Equal));
        unique
    }
}

/// A place where a drawn path crosses the square's perimeter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveCrossing {
    pub point: Point2,
    /// Index of the path segment (`path[segment] → path[segment + 1]`).
    pub segment: usize,
    /// Parameter along that segment, in `[0, 1]`.
    pub t: f64,
}

/// Finds every perimeter crossing along a drawn path, treating each
/// consecutive pair of points as a bounded segment.
#[derive(Debug, Clone)]
pub struct CurveSquareIntersect<'a> {
    path: &'a [Point2],
    square: BoundingSquare,
    eps: f64,
}

impl<'a> CurveSquareIntersect<'a> {
    /// Creates the query against the default graph square.
    #[must_use]
    pub fn new(path: &'a [Point2]) -> Self {
        Self {
            path,
            square: BoundingSquare::graph(),
            eps: DEDUP_EPSILON,
        }
    }

    /// Uses a different square.
    #[must_use]
    pub fn with_square(mut self, square: BoundingSquare) -> Self {
        self.square = square;
        self
    }

    /// Executes the query. Crossings are returned in drawing order; a
    /// crossing at a shared vertex or a corner is reported once.
    #[must_use]
    pub fn execute(&self) -> Vec<CurveCrossing> {
        let mut crossings = Vec::new();
        for (segment, pair) in self.path.windows(2).enumerate() {
            for edge in Edge::ALL {
                if let Some((point, t)) =
                    self.square
                        .segment_edge_crossing(&pair[0], &pair[1], edge, self.eps)
                {
                    crossings.push(CurveCrossing { point, segment, t });
                }
            }
        }

        crossings.sort_by(|a, b| {
            a.segment
                .cmp(&b.segment)
                .then(a.t.partial_cmp(&b.t).unwrap_or(Ordering::Equal))
        });

        let mut unique: Vec<CurveCrossing> = Vec::with_capacity(crossings.len());
        for c in crossings {
            if !unique.iter().any(|u| approx_eq(&u.point, &c.point, self.eps)) {
                unique.push(c);
            }
        }
        unique
    }
}

fn dedup_points(points: Vec<Point2>, eps: f64) -> Vec<Point2> {
    let mut unique: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        if !unique.iter().any(|u| approx_eq(u, &p, eps)) {
            unique.push(p);
        }
    }
    unique
}
