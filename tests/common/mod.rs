#![allow(dead_code)]

use proptest::prelude::*;
use regionsplit::math::Point2;
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Integer position along the perimeter of the graph square, walked
/// counter-clockwise from `(0, 0)`.
pub fn perimeter_at(s: u32) -> Point2 {
    let s = f64::from(s % 2000);
    match s {
        s if s < 500.0 => Point2::new(s, 0.0),
        s if s < 1000.0 => Point2::new(500.0, s - 500.0),
        s if s < 1500.0 => Point2::new(1500.0 - s, 500.0),
        s => Point2::new(0.0, 2000.0 - s),
    }
}

/// Two distinct perimeter points.
pub fn perimeter_pair() -> impl Strategy<Value = (Point2, Point2)> {
    (0u32..2000, 0u32..2000)
        .prop_filter("distinct endpoints", |(a, b)| a != b)
        .prop_map(|(a, b)| (perimeter_at(a), perimeter_at(b)))
}

/// A point strictly inside the graph square.
pub fn interior_point() -> impl Strategy<Value = Point2> {
    (0.5f64..499.5, 0.5f64..499.5).prop_map(|(x, y)| Point2::new(x, y))
}

/// An x-monotone stroke from left of the square to right of it.
pub fn monotone_stroke() -> impl Strategy<Value = Vec<Point2>> {
    (
        50.0f64..450.0,
        50.0f64..450.0,
        prop::collection::btree_set(5u32..495, 1..12),
        prop::collection::vec(50.0f64..450.0, 12),
    )
        .prop_map(|(y_start, y_end, xs, ys)| {
            let mut path = vec![Point2::new(-20.0, y_start)];
            path.extend(
                xs.iter()
                    .zip(ys.iter())
                    .map(|(&x, &y)| Point2::new(f64::from(x), y)),
            );
            path.push(Point2::new(520.0, y_end));
            path
        })
}
