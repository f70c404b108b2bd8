pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type, in model-space meters.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Absolute tolerance on the ray/segment cross product below which the two
/// are treated as parallel. Only meaningful for inputs in meters.
pub const PARALLEL_TOLERANCE: f64 = 1e-8;

/// Distance in meters below which two points are the same point.
pub const COINCIDENCE_TOLERANCE: f64 = 1e-8;

/// Returns `true` if `a` and `b` are within [`COINCIDENCE_TOLERANCE`] of each
/// other. The check is absolute, so it does not depend on where the points
/// lie in model space.
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2) -> bool {
    (a - b).norm() <= COINCIDENCE_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincide_exact() {
        let p = Point2::new(1.0, 2.0);
        assert!(points_coincide(&p, &p));
    }

    #[test]
    fn coincide_within_tolerance() {
        let a = Point2::new(1000.0, 0.0);
        let b = Point2::new(1000.0 + 5e-9, 0.0);
        assert!(points_coincide(&a, &b));
    }

    #[test]
    fn tolerance_does_not_grow_with_coordinates() {
        let a = Point2::new(100_000.0, 100_000.0);
        let b = Point2::new(100_000.0, 100_001.0);
        assert!(!points_coincide(&a, &b));
        let far = Point2::new(500_000.0, 500_000.0);
        assert!(!points_coincide(&far, &Point2::new(500_000.0, 500_000.001)));
    }

    #[test]
    fn distinct_points() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(0.0, 1e-6);
        assert!(!points_coincide(&a, &b));
    }
}
