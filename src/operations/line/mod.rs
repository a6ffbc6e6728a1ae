use tracing::debug;

use crate::error::ValidationError;
use crate::geometry::{Boundary, BoundingSquare};
use crate::math::{approx_eq, Point2, DEDUP_EPSILON};
use crate::operations::intersect::LineSquareIntersect;

/// Default distance the drag handles sit outside the square.
pub const HANDLE_OFFSET: f64 = 30.0;

/// Default length a dragged line is extended by on both sides before
/// re-intersecting it with the square.
pub const DRAG_EXTENSION: f64 = 500.0;

/// Turns two clicked points into a [`Boundary::Line`] spanning the square.
#[derive(Debug, Clone)]
pub struct ResolveLine {
    p1: Point2,
    p2: Point2,
    square: BoundingSquare,
}

impl ResolveLine {
    /// Creates the operation against the default graph square.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self {
            p1,
            p2,
            square: BoundingSquare::graph(),
        }
    }

    /// Uses a different square.
    #[must_use]
    pub fn with_square(mut self, square: BoundingSquare) -> Self {
        self.square = square;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// [`ValidationError::DegenerateBoundary`] if the points coincide, or
    /// [`ValidationError::InvalidIntersectionCount`] if the line does not
    /// cross the square twice.
    pub fn execute(&self) -> Result<Boundary, ValidationError> {
        if approx_eq(&self.p1, &self.p2, DEDUP_EPSILON) {
            return Err(ValidationError::DegenerateBoundary);
        }
        let hits = LineSquareIntersect::new(self.p1, self.p2)
            .with_square(self.square)
            .execute();
        match hits.as_slice() {
            [a, b] => {
                debug!(?a, ?b, "line resolved");
                Ok(Boundary::Line([*a, *b]))
            }
            _ => Err(ValidationError::InvalidIntersectionCount { found: hits.len() }),
        }
    }
}

/// Positions of the two drag handles of a line: where the line meets the
/// square inflated by `offset`.
#[derive(Debug, Clone)]
pub struct ExtendedHandles {
    line: [Point2; 2],
    square: BoundingSquare,
    offset: f64,
}

impl ExtendedHandles {
    /// Creates the query for a resolved line.
    #[must_use]
    pub fn new(line: [Point2; 2]) -> Self {
        Self {
            line,
            square: BoundingSquare::graph(),
            offset: HANDLE_OFFSET,
        }
    }

    /// Uses a different square.
    #[must_use]
    pub fn with_square(mut self, square: BoundingSquare) -> Self {
        self.square = square;
        self
    }

    /// Overrides the handle offset.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Executes the query. Handles are ordered like the line's endpoints.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ResolveLine::execute`].
    pub fn execute(&self) -> Result<[Point2; 2], ValidationError> {
        let [p1, p2] = self.line;
        if approx_eq(&p1, &p2, DEDUP_EPSILON) {
            return Err(ValidationError::DegenerateBoundary);
        }
        let hits = LineSquareIntersect::new(p1, p2)
            .with_square(self.square.inflated(self.offset))
            .execute();
        match hits.as_slice() {
            [a, b] => Ok([*a, *b]),
            _ => Err(ValidationError::InvalidIntersectionCount { found: hits.len() }),
        }
    }
}

/// Outcome of dragging one handle.
#[derive(Debug, Clone, PartialEq)]
pub struct DraggedLine {
    /// The new boundary, clipped to the square.
    pub boundary: Boundary,
    /// Handles of the new line, back on the inflated square.
    pub handles: [Point2; 2],
}

/// Moves one drag handle and recomputes the line through both handles.
#[derive(Debug, Clone)]
pub struct DragEndpoint {
    handles: [Point2; 2],
    index: usize,
    position: Point2,
    square: BoundingSquare,
    extension: f64,
    offset: f64,
}

impl DragEndpoint {
    /// `index` selects the dragged handle (0 or 1); `position` is its new
    /// graph-space location.
    #[must_use]
    pub fn new(handles: [Point2; 2], index: usize, position: Point2) -> Self {
        Self {
            handles,
            index: index.min(1),
            position,
            square: BoundingSquare::graph(),
            extension: DRAG_EXTENSION,
            offset: HANDLE_OFFSET,
        }
    }

    /// Uses a different square.
    #[must_use]
    pub fn with_square(mut self, square: BoundingSquare) -> Self {
        self.square = square;
        self
    }

    /// Overrides the extension length.
    #[must_use]
    pub fn with_extension(mut self, extension: f64) -> Self {
        self.extension = extension;
        self
    }

    /// Overrides the offset of the recomputed handles.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Executes the drag.
    ///
    /// # Errors
    ///
    /// [`ValidationError::DegenerateBoundary`] if the dragged handle lands on
    /// the fixed one; [`ValidationError::InvalidIntersectionCount`] if the
    /// new line misses the square. Either way the caller keeps its previous
    /// line.
    pub fn execute(&self) -> Result<DraggedLine, ValidationError> {
        let fixed = self.handles[1 - self.index];
        let dragged = self.position;

        let d = dragged - fixed;
        let length = d.norm();
        if length < DEDUP_EPSILON {
            return Err(ValidationError::DegenerateBoundary);
        }
        let unit = d / length;

        let far_dragged = dragged + unit * self.extension;
        let far_fixed = fixed - unit * self.extension;

        // Keep endpoint order: handle 0 maps to the first boundary point.
        let (from, to) = if self.index == 0 {
            (far_dragged, far_fixed)
        } else {
            (far_fixed, far_dragged)
        };
        let hits = LineSquareIntersect::new(from, to)
            .with_square(self.square)
            .execute();
        let [a, b] = hits.as_slice() else {
            return Err(ValidationError::InvalidIntersectionCount { found: hits.len() });
        };

        let line = [*a, *b];
        let handles = ExtendedHandles::new(line)
            .with_square(self.square)
            .with_offset(self.offset)
            .execute()?;
        debug!(?line, ?handles, "handle dragged");
        Ok(DraggedLine {
            boundary: Boundary::Line(line),
            handles,
        })
    }
}
