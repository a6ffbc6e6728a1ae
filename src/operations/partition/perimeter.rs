use super::splice::{Tag, Vertex};
use crate::geometry::{BoundingSquare, Edge};
use crate::math::{approx_eq, Point2, DEDUP_EPSILON};

/// Corners visited when walking the perimeter from `p2` away from `p1`,
/// given that both lie on `edge`. Ends at the corner just behind `p1`;
/// corners coinciding with either endpoint are dropped.
pub(crate) fn corners_away_from_start(
    square: &BoundingSquare,
    edge: Edge,
    p1: &Point2,
    p2: &Point2,
) -> Vec<Point2> {
    let corners = square.corners();
    let i = edge.index();
    let edge_dir = corners[(i + 1) % 4] - corners[i];
    let ccw = (p2 - p1).dot(&edge_dir) > 0.0;

    let order: [usize; 4] = if ccw {
        [(i + 1) % 4, (i + 2) % 4, (i + 3) % 4, i]
    } else {
        [i, (i + 3) % 4, (i + 2) % 4, (i + 1) % 4]
    };

    order
        .iter()
        .map(|&k| corners[k])
        .filter(|c| !approx_eq(c, p1, DEDUP_EPSILON) && !approx_eq(c, p2, DEDUP_EPSILON))
        .collect()
}

/// Regions for a boundary whose endpoints share a square edge.
///
/// Returns `(with_corners, enclosed)`: the first is the chain followed by
/// the whole perimeter walk back to `p1`; the second is the chain alone,
/// closed along the edge (zero area for a straight boundary).
pub(crate) fn edge_aligned_regions(
    square: &BoundingSquare,
    edge: Edge,
    chain: &[Vertex],
) -> (Vec<Vertex>, Vec<Vertex>) {
    let (Some(first), Some(last)) = (chain.first(), chain.last()) else {
        return (Vec::new(), Vec::new());
    };
    let mut with_corners = chain.to_vec();
    with_corners.extend(
        corners_away_from_start(square, edge, &first.point, &last.point)
            .into_iter()
            .map(|c| Vertex::new(c, Tag::Corner)),
    );
    (with_corners, chain.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::{is_simple_polygon, signed_area_2d};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn walk(p1: Point2, p2: Point2) -> Vec<Point2> {
        let sq = BoundingSquare::graph();
        let edge = sq.shared_edge(&p1, &p2).unwrap_or(Edge::Bottom);
        corners_away_from_start(&sq, edge, &p1, &p2)
    }

    /// Every direction on every edge: the chain + walk is a simple polygon
    /// covering the full square.
    #[test]
    fn all_eight_orientations_tile_the_square() {
        let cases = [
            (p(0.0, 100.0), p(0.0, 400.0)),
            (p(0.0, 400.0), p(0.0, 100.0)),
            (p(500.0, 100.0), p(500.0, 400.0)),
            (p(500.0, 400.0), p(500.0, 100.0)),
            (p(100.0, 0.0), p(400.0, 0.0)),
            (p(400.0, 0.0), p(100.0, 0.0)),
            (p(100.0, 500.0), p(400.0, 500.0)),
            (p(400.0, 500.0), p(100.0, 500.0)),
        ];
        for (a, b) in cases {
            let mut poly = vec![a, b];
            poly.extend(walk(a, b));
            assert_eq!(poly.len(), 6, "{a:?} -> {b:?}");
            assert!(is_simple_polygon(&poly), "{a:?} -> {b:?}: {poly:?}");
            assert!(
                (signed_area_2d(&poly).abs() - 250_000.0).abs() < 1e-6,
                "{a:?} -> {b:?}: {poly:?}"
            );
        }
    }

    #[test]
    fn left_edge_upwards_walks_clockwise() {
        assert_eq!(
            walk(p(0.0, 100.0), p(0.0, 400.0)),
            vec![p(0.0, 500.0), p(500.0, 500.0), p(500.0, 0.0), p(0.0, 0.0)]
        );
    }

    #[test]
    fn full_edge_drops_coincident_corners() {
        assert_eq!(
            walk(p(0.0, 0.0), p(0.0, 500.0)),
            vec![p(500.0, 500.0), p(500.0, 0.0)]
        );
    }

    #[test]
    fn bulge_region_is_the_chain() {
        let sq = BoundingSquare::graph();
        let chain = [
            Vertex::new(p(0.0, 100.0), Tag::Start),
            Vertex::new(p(150.0, 250.0), Tag::Chain),
            Vertex::new(p(0.0, 400.0), Tag::End),
        ];
        let (outer, inner) = edge_aligned_regions(&sq, Edge::Left, &chain);
        assert_eq!(inner.len(), 3);
        assert_eq!(outer.len(), 7);
        let outer_pts: Vec<Point2> = outer.iter().map(|v| v.point).collect();
        let inner_pts: Vec<Point2> = inner.iter().map(|v| v.point).collect();
        assert!(is_simple_polygon(&outer_pts));
        let total = signed_area_2d(&outer_pts).abs() + signed_area_2d(&inner_pts).abs();
        assert!((total - 250_000.0).abs() < 1e-6);
    }
}
