mod clean;
mod self_intersect;

pub use clean::clean_small_intersections;
pub use self_intersect::{has_self_intersection, PathCrossing};

use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::geometry::{Boundary, BoundingSquare};
use crate::math::{approx_eq, Point2, DEDUP_EPSILON};
use crate::operations::intersect::CurveSquareIntersect;

/// Default clearance below which a self-crossing counts as drawing noise.
pub const SELF_INTERSECTION_TOLERANCE: f64 = 5.0;

/// Validates a free-hand curve and trims it to the part inside the square.
///
/// Steps:
/// 1. both ends must lie outside the square (or exactly on its edge);
/// 2. small tremor loops are spliced out;
/// 3. any remaining crossing beyond the tolerance rejects the curve;
/// 4. the repaired path must cross the perimeter exactly twice.
///
/// The result is a [`Boundary::Curve`] running from the first crossing to the
/// second, with the drawn points in between.
#[derive(Debug, Clone)]
pub struct ValidateCurve<'a> {
    path: &'a [Point2],
    square: BoundingSquare,
    tolerance: f64,
}

impl<'a> ValidateCurve<'a> {
    /// Creates a validator against the default graph square.
    #[must_use]
    pub fn new(path: &'a [Point2]) -> Self {
        Self {
            path,
            square: BoundingSquare::graph(),
            tolerance: SELF_INTERSECTION_TOLERANCE,
        }
    }

    /// Uses a different square.
    #[must_use]
    pub fn with_square(mut self, square: BoundingSquare) -> Self {
        self.square = square;
        self
    }

    /// Overrides the self-intersection tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the validation.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::DegenerateBoundary`] for fewer than 2 points;
    /// - [`ValidationError::InvalidBounds`] if an end lies inside the square;
    /// - [`ValidationError::SelfIntersection`] for a real self-crossing;
    /// - [`ValidationError::InvalidIntersectionCount`] unless the perimeter
    ///   is crossed exactly twice.
    pub fn execute(&self) -> Result<Boundary, ValidationError> {
        let (Some(first), Some(last)) = (self.path.first(), self.path.last()) else {
            return Err(ValidationError::DegenerateBoundary);
        };
        if self.path.len() < 2 {
            return Err(ValidationError::DegenerateBoundary);
        }

        if self.square.contains_strictly(first) || self.square.contains_strictly(last) {
            warn!("curve rejected: starts or ends inside the square");
            return Err(ValidationError::InvalidBounds);
        }

        let cleaned = clean_small_intersections(self.path, self.tolerance);
        if has_self_intersection(&cleaned, self.tolerance) {
            warn!("curve rejected: self-intersection");
            return Err(ValidationError::SelfIntersection);
        }

        let crossings = CurveSquareIntersect::new(&cleaned)
            .with_square(self.square)
            .execute();
        let [enter, exit] = crossings.as_slice() else {
            warn!(found = crossings.len(), "curve rejected: crossing count");
            return Err(ValidationError::InvalidIntersectionCount {
                found: crossings.len(),
            });
        };

        let mut chain = Vec::with_capacity(exit.segment - enter.segment + 2);
        chain.push(enter.point);
        for p in &cleaned[enter.segment + 1..=exit.segment] {
            let duplicate = chain.last().is_some_and(|q| approx_eq(q, p, DEDUP_EPSILON))
                || approx_eq(p, &exit.point, DEDUP_EPSILON);
            if !duplicate {
                chain.push(*p);
            }
        }
        chain.push(exit.point);

        debug!(
            drawn = self.path.len(),
            cleaned = cleaned.len(),
            chain = chain.len(),
            "curve validated"
        );
        Ok(Boundary::Curve(chain))
    }
}
