mod common;

use proptest::prelude::*;
use regionsplit::geometry::{Boundary, BoundingSquare, RegionPair};
use regionsplit::mapping::IdentityMapper;
use regionsplit::math::polygon_2d::{is_simple_polygon, signed_area_2d};
use regionsplit::math::Point2;
use regionsplit::operations::partition::PartitionSquare;
use regionsplit::operations::validate::ValidateCurve;

const AREA: f64 = 250_000.0;

fn reference() -> Point2 {
    Point2::new(500.0, 0.0)
}

fn partition(boundary: &Boundary) -> RegionPair {
    PartitionSquare::new(boundary, reference())
        .execute(&IdentityMapper)
        .unwrap_or_else(|e| panic!("partition failed for {boundary:?}: {e}"))
}

fn check_tiling(boundary: &Boundary, pair: &RegionPair) -> Result<(), TestCaseError> {
    let total = pair.region1.area() + pair.region2.area();
    prop_assert!((total - AREA).abs() < 1e-6 * AREA, "{boundary:?}: area {total}");
    prop_assert!(is_simple_polygon(&pair.region1.graph), "{boundary:?}: {:?}", pair.region1);
    prop_assert!(is_simple_polygon(&pair.region2.graph), "{boundary:?}: {:?}", pair.region2);
    prop_assert!(signed_area_2d(&pair.region1.graph) >= 0.0);
    prop_assert!(signed_area_2d(&pair.region2.graph) >= 0.0);
    Ok(())
}

fn transpose(path: &[Point2]) -> Vec<Point2> {
    path.iter().map(|p| Point2::new(p.y, p.x)).collect()
}

#[test]
fn vertical_line_scenario() {
    common::init_tracing();
    let b = Boundary::Line([Point2::new(250.0, 0.0), Point2::new(250.0, 500.0)]);
    let pair = partition(&b);
    let pts = |v: &[(f64, f64)]| v.iter().map(|&(x, y)| Point2::new(x, y)).collect::<Vec<_>>();
    assert_eq!(
        pair.region1.graph,
        pts(&[(250.0, 0.0), (500.0, 0.0), (500.0, 500.0), (250.0, 500.0)])
    );
    assert_eq!(
        pair.region2.graph,
        pts(&[(250.0, 0.0), (250.0, 500.0), (0.0, 500.0), (0.0, 0.0)])
    );
}

proptest! {
    #[test]
    fn lines_tile_the_square((a, b) in common::perimeter_pair()) {
        let boundary = Boundary::Line([a, b]);
        let pair = partition(&boundary);
        check_tiling(&boundary, &pair)?;
        prop_assert_eq!(pair.region1.graph[0], a);
        prop_assert_eq!(pair.region2.graph[0], a);
    }

    #[test]
    fn reference_corner_is_a_region1_vertex((a, b) in common::perimeter_pair()) {
        let pair = partition(&Boundary::Line([a, b]));
        prop_assert!(pair.region1.graph.contains(&reference()), "{:?}", pair);
    }

    #[test]
    fn curves_tile_the_square(stroke in common::monotone_stroke(), flip in any::<bool>()) {
        let path = if flip { transpose(&stroke) } else { stroke };
        let boundary = ValidateCurve::new(&path)
            .execute()
            .map_err(|e| TestCaseError::fail(format!("{e}: {path:?}")))?;
        let pair = partition(&boundary);
        check_tiling(&boundary, &pair)?;
        prop_assert_eq!(
            pair.region1.graph.len() + pair.region2.graph.len(),
            boundary.points().len() * 2 + 4
        );
    }

    #[test]
    fn reversed_curves_give_the_same_regions(stroke in common::monotone_stroke()) {
        let forward = ValidateCurve::new(&stroke).execute().map_err(|e| TestCaseError::fail(e.to_string()))?;
        let reversed: Vec<Point2> = stroke.iter().rev().copied().collect();
        let backward = ValidateCurve::new(&reversed).execute().map_err(|e| TestCaseError::fail(e.to_string()))?;
        let (f, b) = (partition(&forward), partition(&backward));
        prop_assert!((f.region1.area() - b.region1.area()).abs() < 1e-6 * AREA);
    }
}

#[test]
fn custom_square() {
    let square = BoundingSquare::new(Point2::new(10.0, 10.0), Point2::new(110.0, 60.0));
    let b = Boundary::Line([Point2::new(60.0, 10.0), Point2::new(60.0, 60.0)]);
    let pair = PartitionSquare::new(&b, Point2::new(110.0, 10.0))
        .with_square(square)
        .execute(&IdentityMapper)
        .unwrap_or_else(|e| panic!("{e}"));
    assert!((pair.region1.area() - 2500.0).abs() < 1e-9);
    assert!(pair.region1.graph.contains(&Point2::new(110.0, 10.0)));
}
