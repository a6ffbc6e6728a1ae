mod perimeter;
mod splice;

pub use splice::SpliceCase;

use tracing::{debug, trace};

use crate::error::PartitionError;
use crate::geometry::{Boundary, BoundingSquare, Region, RegionPair};
use crate::mapping::OverlayMapper;
use crate::math::polygon_2d::{
    point_in_polygon, rotate_to_start, signed_area_2d, sort_by_centroid_angle,
};
use crate::math::{approx_eq, cross, Point2, DEDUP_EPSILON, TOLERANCE};
use splice::{Tag, Vertex};

/// Which side of the directed line `p1 → p2` a point lies on.
///
/// Points exactly on the line count as [`Side::Left`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Cross-product side test against the directed line `p1 → p2`.
#[must_use]
pub fn side_of(p1: &Point2, p2: &Point2, point: &Point2) -> Side {
    if cross(p1, p2, point) >= 0.0 {
        Side::Left
    } else {
        Side::Right
    }
}

/// The side of `p1 → p2` that the reference corner's region occupies.
///
/// When the reference lies on the line itself, a boundary along a square
/// edge takes the side holding the square's area; any other line takes
/// [`Side::Left`].
#[must_use]
pub fn reference_side(
    p1: &Point2,
    p2: &Point2,
    reference: &Point2,
    square: &BoundingSquare,
) -> Side {
    if cross(p1, p2, reference).abs() > TOLERANCE {
        return side_of(p1, p2, reference);
    }
    if square.shared_edge(p1, p2).is_some() {
        side_of(p1, p2, &square.center())
    } else {
        Side::Left
    }
}

/// Graph-space `(region1, region2)` polygons.
pub type GraphRegions = (Vec<Point2>, Vec<Point2>);

/// Cuts the square into two simple polygons along a resolved boundary.
///
/// `region1` is the region holding the reference corner. Both regions are
/// counter-clockwise (unless of zero area) and start at the boundary's
/// first endpoint.
#[derive(Debug, Clone)]
pub struct PartitionSquare<'a> {
    boundary: &'a Boundary,
    reference: Point2,
    square: BoundingSquare,
}

impl<'a> PartitionSquare<'a> {
    /// Creates the operation for the default graph square.
    #[must_use]
    pub fn new(boundary: &'a Boundary, reference: Point2) -> Self {
        Self {
            boundary,
            reference,
            square: BoundingSquare::graph(),
        }
    }

    /// Uses a different square.
    #[must_use]
    pub fn with_square(mut self, square: BoundingSquare) -> Self {
        self.square = square;
        self
    }

    /// Executes the partition, mapping every vertex through `mapper` for the
    /// overlay copy. A boundary with fewer than 2 distinct points yields
    /// [`RegionPair::empty`].
    ///
    /// # Errors
    ///
    /// Returns a [`PartitionError`] if the curve cannot be spliced into a
    /// region (endpoints not on the perimeter).
    pub fn execute(&self, mapper: &impl OverlayMapper) -> Result<RegionPair, PartitionError> {
        let Some((region1, region2)) = self.graph_regions()? else {
            return Ok(RegionPair::empty());
        };
        debug!(
            region1 = region1.len(),
            region2 = region2.len(),
            "square partitioned"
        );
        Ok(RegionPair {
            region1: to_region(region1, mapper),
            region2: to_region(region2, mapper),
        })
    }

    /// Graph-space polygons only, `None` when there is nothing to partition.
    ///
    /// # Errors
    ///
    /// See [`PartitionSquare::execute`].
    pub fn graph_regions(&self) -> Result<Option<GraphRegions>, PartitionError> {
        let Some((p1, p2)) = self.boundary.endpoints() else {
            return Ok(None);
        };
        if approx_eq(&p1, &p2, DEDUP_EPSILON) {
            return Ok(None);
        }

        let mut chain = Vec::with_capacity(self.boundary.points().len());
        chain.push(Vertex::new(p1, Tag::Start));
        chain.extend(
            self.boundary
                .interior()
                .iter()
                .map(|p| Vertex::new(*p, Tag::Chain)),
        );
        chain.push(Vertex::new(p2, Tag::End));

        let (region1, region2) = match self.square.shared_edge(&p1, &p2) {
            Some(edge) => {
                trace!(case = ?SpliceCase::StraightEdge(edge), "walking the perimeter");
                let (with_corners, enclosed) =
                    perimeter::edge_aligned_regions(&self.square, edge, &chain);
                let enclosed_points: Vec<Point2> = enclosed.iter().map(|v| v.point).collect();
                if point_in_polygon(&self.reference, &enclosed_points) {
                    (enclosed, with_corners)
                } else {
                    (with_corners, enclosed)
                }
            }
            None => self.chord_regions(&p1, &p2)?,
        };

        Ok(Some((normalize(region1), normalize(region2))))
    }

    /// Builds both regions from the corner split of the chord `p1 → p2`,
    /// then splices the curve interior back in.
    fn chord_regions(
        &self,
        p1: &Point2,
        p2: &Point2,
    ) -> Result<(Vec<Vertex>, Vec<Vertex>), PartitionError> {
        let ref_side = reference_side(p1, p2, &self.reference, &self.square);

        let mut same = vec![Vertex::new(*p1, Tag::Start), Vertex::new(*p2, Tag::End)];
        let mut other = same.clone();
        for corner in self.square.corners() {
            if approx_eq(&corner, p1, DEDUP_EPSILON) || approx_eq(&corner, p2, DEDUP_EPSILON) {
                continue;
            }
            let v = Vertex::new(corner, Tag::Corner);
            if side_of(p1, p2, &corner) == ref_side {
                same.push(v);
            } else {
                other.push(v);
            }
        }

        let interior = self.boundary.interior();
        Ok((splice_in(same, interior)?, splice_in(other, interior)?))
    }
}

fn splice_in(mut ring: Vec<Vertex>, interior: &[Point2]) -> Result<Vec<Vertex>, PartitionError> {
    sort_by_centroid_angle(&mut ring, |v| v.point);
    if interior.is_empty() {
        return Ok(ring);
    }
    let case = splice::classify(&ring)?;
    trace!(?case, "splicing curve interior");
    Ok(splice::apply(&ring, interior, case))
}

/// Counter-clockwise winding, starting at the boundary's first endpoint.
fn normalize(mut vertices: Vec<Vertex>) -> Vec<Point2> {
    let points: Vec<Point2> = vertices.iter().map(|v| v.point).collect();
    if signed_area_2d(&points) < 0.0 {
        vertices.reverse();
    }
    let start = vertices
        .iter()
        .position(|v| v.tag == Tag::Start)
        .unwrap_or(0);
    rotate_to_start(&vertices, start)
        .into_iter()
        .map(|v| v.point)
        .collect()
}

fn to_region(graph: Vec<Point2>, mapper: &impl OverlayMapper) -> Region {
    let overlay = graph.iter().map(|p| mapper.to_overlay(p)).collect();
    Region { graph, overlay }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mapping::{IdentityMapper, ViewportMapper};
    use crate::math::polygon_2d::is_simple_polygon;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn reference() -> Point2 {
        p(500.0, 0.0)
    }

    fn partition(boundary: &Boundary) -> RegionPair {
        PartitionSquare::new(boundary, reference())
            .execute(&IdentityMapper)
            .unwrap()
    }

    fn assert_tiles(pair: &RegionPair) {
        let total = pair.region1.area() + pair.region2.area();
        assert!((total - 250_000.0).abs() < 1e-6, "total area {total}");
        assert!(is_simple_polygon(&pair.region1.graph), "{:?}", pair.region1.graph);
        assert!(is_simple_polygon(&pair.region2.graph), "{:?}", pair.region2.graph);
    }

    #[test]
    fn vertical_line_scenario() {
        let b = Boundary::Line([p(250.0, 0.0), p(250.0, 500.0)]);
        let pair = partition(&b);
        assert_eq!(
            pair.region1.graph,
            vec![p(250.0, 0.0), p(500.0, 0.0), p(500.0, 500.0), p(250.0, 500.0)]
        );
        assert_eq!(
            pair.region2.graph,
            vec![p(250.0, 0.0), p(250.0, 500.0), p(0.0, 500.0), p(0.0, 0.0)]
        );
        assert_tiles(&pair);
    }

    #[test]
    fn reversed_line_keeps_reference_region() {
        let b = Boundary::Line([p(250.0, 500.0), p(250.0, 0.0)]);
        let pair = partition(&b);
        assert!(pair.region1.graph.contains(&p(500.0, 0.0)));
        assert!(pair.region1.graph.contains(&p(500.0, 500.0)));
        assert_eq!(pair.region1.graph[0], p(250.0, 500.0));
        assert_tiles(&pair);
    }

    #[test]
    fn triangle_cut_off_the_reference_corner() {
        let b = Boundary::Line([p(400.0, 0.0), p(500.0, 100.0)]);
        let pair = partition(&b);
        assert_eq!(pair.region1.graph.len(), 3);
        assert_eq!(pair.region2.graph.len(), 5);
        assert!((pair.region1.area() - 5000.0).abs() < 1e-9);
        assert_tiles(&pair);
    }

    #[test]
    fn diagonal_through_corners() {
        let b = Boundary::Line([p(0.0, 0.0), p(500.0, 500.0)]);
        let pair = partition(&b);
        assert_eq!(pair.region1.graph.len(), 3);
        assert_eq!(pair.region2.graph.len(), 3);
        assert!(pair.region1.graph.contains(&p(500.0, 0.0)));
        assert!(pair.region2.graph.contains(&p(0.0, 500.0)));
        assert_tiles(&pair);
    }

    #[test]
    fn anti_diagonal_through_the_reference_corner() {
        let b = Boundary::Line([p(500.0, 0.0), p(0.0, 500.0)]);
        let pair = partition(&b);
        assert_eq!(pair.region1.graph.len(), 3);
        assert_eq!(pair.region2.graph.len(), 3);
        assert_tiles(&pair);
    }

    #[test]
    fn line_along_an_edge_leaves_an_empty_side() {
        let b = Boundary::Line([p(500.0, 500.0), p(500.0, 0.0)]);
        let pair = partition(&b);
        assert!((pair.region1.area() - 250_000.0).abs() < 1e-6);
        assert!(pair.region2.area().abs() < 1e-9);
        assert_eq!(pair.region2.graph.len(), 2);
    }

    #[test]
    fn curve_interior_is_spliced() {
        let b = Boundary::Curve(vec![
            p(0.0, 250.0),
            p(100.0, 300.0),
            p(250.0, 350.0),
            p(400.0, 300.0),
            p(500.0, 250.0),
        ]);
        let pair = partition(&b);
        assert_eq!(pair.region1.graph.len(), 7);
        assert_eq!(pair.region2.graph.len(), 7);
        assert!(pair.region1.graph.contains(&p(500.0, 0.0)));
        assert!(point_in_polygon(&p(250.0, 320.0), &pair.region1.graph));
        assert!(point_in_polygon(&p(250.0, 400.0), &pair.region2.graph));
        assert_tiles(&pair);
    }

    #[test]
    fn curve_reversed_draw_order() {
        let b = Boundary::Curve(vec![
            p(500.0, 250.0),
            p(400.0, 300.0),
            p(250.0, 350.0),
            p(100.0, 300.0),
            p(0.0, 250.0),
        ]);
        let pair = partition(&b);
        assert!(point_in_polygon(&p(250.0, 320.0), &pair.region1.graph));
        assert!(point_in_polygon(&p(250.0, 400.0), &pair.region2.graph));
        assert_tiles(&pair);
    }

    #[test]
    fn curve_around_a_corner() {
        let b = Boundary::Curve(vec![
            p(300.0, 0.0),
            p(320.0, 150.0),
            p(420.0, 180.0),
            p(500.0, 200.0),
        ]);
        let pair = partition(&b);
        // Region 1 is the pocket holding the reference corner.
        assert_eq!(pair.region1.graph.len(), 5);
        assert!(point_in_polygon(&p(450.0, 50.0), &pair.region1.graph));
        assert!(!point_in_polygon(&p(100.0, 400.0), &pair.region1.graph));
        assert_tiles(&pair);
    }

    #[test]
    fn curve_entering_and_leaving_the_same_edge() {
        let b = Boundary::Curve(vec![
            p(0.0, 100.0),
            p(200.0, 150.0),
            p(200.0, 350.0),
            p(0.0, 400.0),
        ]);
        let pair = partition(&b);
        assert!(pair.region1.graph.contains(&p(500.0, 0.0)));
        assert!(point_in_polygon(&p(100.0, 250.0), &pair.region2.graph));
        assert!(!point_in_polygon(&p(100.0, 250.0), &pair.region1.graph));
        assert!(point_in_polygon(&p(400.0, 250.0), &pair.region1.graph));
        assert_tiles(&pair);
    }

    #[test]
    fn curve_along_right_edge_does_not_fold_back() {
        let b = Boundary::Curve(vec![p(500.0, 100.0), p(300.0, 250.0), p(500.0, 400.0)]);
        let pair = partition(&b);
        assert!(point_in_polygon(&p(450.0, 250.0), &pair.region2.graph));
        assert!(point_in_polygon(&p(100.0, 250.0), &pair.region1.graph));
        assert_tiles(&pair);
    }

    #[test]
    fn fewer_than_two_points_is_empty() {
        let b = Boundary::Curve(vec![p(0.0, 100.0)]);
        assert!(partition(&b).is_empty());
    }

    #[test]
    fn overlay_vertices_are_mapped() {
        let b = Boundary::Line([p(250.0, 0.0), p(250.0, 500.0)]);
        let mapper = ViewportMapper::new(0.0, 0.0, 250.0, 250.0);
        let pair = PartitionSquare::new(&b, reference()).execute(&mapper).unwrap();
        assert_eq!(pair.region1.overlay.len(), pair.region1.graph.len());
        assert_eq!(pair.region1.overlay[0], p(125.0, 250.0));
    }

    #[test]
    fn reference_side_on_edge_line_points_inward() {
        let sq = BoundingSquare::graph();
        let side = reference_side(&p(500.0, 500.0), &p(500.0, 0.0), &reference(), &sq);
        assert_eq!(side, side_of(&p(500.0, 500.0), &p(500.0, 0.0), &p(250.0, 250.0)));
    }
}
