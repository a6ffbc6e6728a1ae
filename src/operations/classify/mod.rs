mod counts;

pub use counts::{tally, ConfusionCounts, CountsKey, CountsMemo};

use serde::{Deserialize, Serialize};

use crate::dataset::{Label, LabeledPoint};
use crate::error::PartitionError;
use crate::geometry::{Boundary, BoundingSquare};
use crate::math::polygon_2d::{on_polygon_edge, point_in_polygon};
use crate::math::{cross, Point2, DEDUP_EPSILON, TOLERANCE};
use crate::operations::partition::{reference_side, side_of, PartitionSquare, Side};

/// Result of comparing a predicted label against the true one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "TP")]
    TruePositive,
    #[serde(rename = "TN")]
    TrueNegative,
    #[serde(rename = "FP")]
    FalsePositive,
    #[serde(rename = "FN")]
    FalseNegative,
}

impl Outcome {
    #[must_use]
    pub fn from_labels(actual: Label, predicted: Label) -> Self {
        match (actual, predicted) {
            (Label::Pass, Label::Pass) => Outcome::TruePositive,
            (Label::Fail, Label::Fail) => Outcome::TrueNegative,
            (Label::Fail, Label::Pass) => Outcome::FalsePositive,
            (Label::Pass, Label::Fail) => Outcome::FalseNegative,
        }
    }
}

/// Which region a point fell in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    /// The region holding the reference corner.
    Reference,
    Other,
    /// Outside both polygons, which only happens outside the square.
    Neither,
}

/// How points are assigned to regions.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifyStrategy {
    /// Cross-product side of the directed line; on-line points go to the
    /// reference side.
    SideTest { p1: Point2, p2: Point2, reference: Side },
    /// Even-odd ray cast against both region polygons. Edge points of
    /// `region1`, the drawn curve included, go to the reference side.
    RayCast {
        region1: Vec<Point2>,
        region2: Vec<Point2>,
    },
}

/// Predicts a label for each data point from the current boundary and the
/// user's choice of which region counts as Pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PointClassifier {
    strategy: ClassifyStrategy,
    reference_is_pass: bool,
}

impl PointClassifier {
    /// Side-test classifier for a straight line.
    #[must_use]
    pub fn side_test(
        p1: Point2,
        p2: Point2,
        reference: &Point2,
        square: &BoundingSquare,
        reference_is_pass: bool,
    ) -> Self {
        Self {
            strategy: ClassifyStrategy::SideTest {
                p1,
                p2,
                reference: reference_side(&p1, &p2, reference, square),
            },
            reference_is_pass,
        }
    }

    /// Ray-cast classifier over precomputed graph-space regions.
    #[must_use]
    pub fn ray_cast(region1: Vec<Point2>, region2: Vec<Point2>, reference_is_pass: bool) -> Self {
        Self {
            strategy: ClassifyStrategy::RayCast { region1, region2 },
            reference_is_pass,
        }
    }

    /// Picks the strategy by boundary kind.
    ///
    /// Returns `Ok(None)` while the boundary is unresolved or the Pass side
    /// has not been chosen.
    ///
    /// # Errors
    ///
    /// Propagates a [`PartitionError`] from partitioning a curve.
    pub fn for_boundary(
        boundary: &Boundary,
        reference: &Point2,
        square: &BoundingSquare,
        reference_is_pass: Option<bool>,
    ) -> Result<Option<Self>, PartitionError> {
        let Some(reference_is_pass) = reference_is_pass else {
            return Ok(None);
        };
        if !boundary.is_resolved() {
            return Ok(None);
        }
        match boundary {
            Boundary::Line([p1, p2]) => Ok(Some(Self::side_test(
                *p1,
                *p2,
                reference,
                square,
                reference_is_pass,
            ))),
            Boundary::Curve(_) => {
                let regions = PartitionSquare::new(boundary, *reference)
                    .with_square(*square)
                    .graph_regions()?;
                Ok(regions.map(|(r1, r2)| Self::ray_cast(r1, r2, reference_is_pass)))
            }
        }
    }

    /// Same regions, other Pass side.
    #[must_use]
    pub fn with_reference_is_pass(mut self, reference_is_pass: bool) -> Self {
        self.reference_is_pass = reference_is_pass;
        self
    }

    #[must_use]
    pub fn strategy(&self) -> &ClassifyStrategy {
        &self.strategy
    }

    /// Region membership of a graph-space point.
    #[must_use]
    pub fn membership(&self, point: &Point2) -> Membership {
        match &self.strategy {
            ClassifyStrategy::SideTest { p1, p2, reference } => {
                if cross(p1, p2, point).abs() <= TOLERANCE || side_of(p1, p2, point) == *reference
                {
                    Membership::Reference
                } else {
                    Membership::Other
                }
            }
            ClassifyStrategy::RayCast { region1, region2 } => {
                if point_in_polygon(point, region1)
                    || on_polygon_edge(point, region1, DEDUP_EPSILON)
                {
                    Membership::Reference
                } else if point_in_polygon(point, region2)
                    || on_polygon_edge(point, region2, DEDUP_EPSILON)
                {
                    Membership::Other
                } else {
                    Membership::Neither
                }
            }
        }
    }

    /// Predicted label. Points in neither region are predicted Fail.
    #[must_use]
    pub fn predict(&self, point: &Point2) -> Label {
        let pass = match self.membership(point) {
            Membership::Reference => self.reference_is_pass,
            Membership::Other => !self.reference_is_pass,
            Membership::Neither => false,
        };
        Label::from_pass(pass)
    }

    #[must_use]
    pub fn classify(&self, point: &LabeledPoint) -> Outcome {
        Outcome::from_labels(point.label, self.predict(&point.position()))
    }
}
