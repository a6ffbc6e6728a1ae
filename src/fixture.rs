use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::LabeledPoint;
use crate::error::{FixtureError, ValidationError};
use crate::geometry::{Boundary, BoundingSquare};
use crate::math::{Point2, Vector2};
use crate::operations::classify::{tally, ConfusionCounts, Membership, PointClassifier};

/// A plain `{x, y}` graph-space point as stored in level files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint {
    pub x: f64,
    pub y: f64,
}

impl From<GraphPoint> for Point2 {
    fn from(p: GraphPoint) -> Self {
        Point2::new(p.x, p.y)
    }
}

/// One level's record: a dataset plus a precomputed best boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelFixture {
    pub data: Vec<LabeledPoint>,
    pub best: Vec<GraphPoint>,
    /// Whether the region holding the square's origin corner is Pass under
    /// the best boundary.
    pub origin_is_pass: bool,
    /// Held-out points, scored but not shown while drawing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_data: Option<Vec<LabeledPoint>>,
}

/// Confusion counts of the best boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BestEvaluation {
    pub seen: ConfusionCounts,
    pub unseen: Option<ConfusionCounts>,
}

impl LevelFixture {
    /// # Errors
    ///
    /// [`FixtureError::Json`] on malformed input.
    pub fn from_json_str(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// [`FixtureError::Io`] or [`FixtureError::Json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// The best boundary: a line for 2 points, a curve for more.
    ///
    /// # Errors
    ///
    /// [`FixtureError::BestTooShort`] for fewer than 2 points.
    pub fn best_boundary(&self) -> Result<Boundary, FixtureError> {
        let points: Vec<Point2> = self.best.iter().map(|&p| p.into()).collect();
        match points.as_slice() {
            [] | [_] => Err(FixtureError::BestTooShort(points.len())),
            [a, b] => Ok(Boundary::Line([*a, *b])),
            _ => Ok(Boundary::Curve(points)),
        }
    }

    /// Scores the best boundary on the seen and unseen data.
    ///
    /// # Errors
    ///
    /// Fails if the best boundary is too short, has coinciding endpoints,
    /// or cannot be partitioned.
    pub fn evaluate_best(
        &self,
        square: &BoundingSquare,
        reference: &Point2,
    ) -> crate::Result<BestEvaluation> {
        let boundary = self.best_boundary()?;
        let classifier = PointClassifier::for_boundary(&boundary, reference, square, Some(true))?
            .ok_or(ValidationError::DegenerateBoundary)?;

        // Probe just inside the origin corner; the corner itself is a
        // polygon vertex.
        let probe = square.min + Vector2::new(1e-3, 1e-3);
        let reference_is_pass = match classifier.membership(&probe) {
            Membership::Reference => self.origin_is_pass,
            Membership::Other | Membership::Neither => !self.origin_is_pass,
        };
        let classifier = classifier.with_reference_is_pass(reference_is_pass);

        let seen = tally(&self.data, &classifier);
        let unseen = self.test_data.as_deref().map(|d| tally(d, &classifier));
        debug!(?seen, ?unseen, "best boundary evaluated");
        Ok(BestEvaluation { seen, unseen })
    }
}
