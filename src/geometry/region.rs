use serde::Serialize;

use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

/// One side of the partitioned square: a simple polygon, implicitly closed.
///
/// `overlay` holds the same vertices mapped into on-screen pixel space.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Region {
    pub graph: Vec<Point2>,
    pub overlay: Vec<Point2>,
}

impl Region {
    /// Returns `true` if the region has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Unsigned graph-space area.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.graph).abs()
    }
}

/// The two regions obtained by cutting the square along a boundary.
///
/// `region1` is the region containing the reference corner.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegionPair {
    pub region1: Region,
    pub region2: Region,
}

impl RegionPair {
    /// The "no partition yet" value.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if no partition has been computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.region1.is_empty() && self.region2.is_empty()
    }
}
