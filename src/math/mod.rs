pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type (graph or overlay space).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global tolerance for floating-point zero tests (orientation, slopes).
pub const TOLERANCE: f64 = 1e-10;

/// Two crossings closer than this on both axes are the same crossing.
pub const DEDUP_EPSILON: f64 = 1e-6;

/// Signed area of the triangle `(a, b, p)` times two.
///
/// Positive when `p` is to the left of the directed line `a → b`.
#[must_use]
pub fn cross(a: &Point2, b: &Point2, p: &Point2) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Returns `true` if two points coincide within `eps` on both axes.
#[must_use]
pub fn approx_eq(a: &Point2, b: &Point2, eps: f64) -> bool {
    (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_sign_follows_left_of_line() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        assert!(cross(&a, &b, &Point2::new(0.5, 1.0)) > 0.0);
        assert!(cross(&a, &b, &Point2::new(0.5, -1.0)) < 0.0);
        assert!(cross(&a, &b, &Point2::new(7.0, 0.0)).abs() < TOLERANCE);
    }

    #[test]
    fn approx_eq_within_epsilon() {
        let a = Point2::new(1.0, 2.0);
        assert!(approx_eq(&a, &Point2::new(1.0 + 1e-7, 2.0), DEDUP_EPSILON));
        assert!(!approx_eq(&a, &Point2::new(1.0 + 1e-5, 2.0), DEDUP_EPSILON));
    }
}
