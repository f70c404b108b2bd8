use super::{points_coincide, Point2, Vector2};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. A repeated
/// closing vertex contributes nothing, so open and closed outlines agree.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the left-pointing normal (90° counter-clockwise) of a direction.
#[must_use]
pub fn left_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Returns the outline as a closed vertex loop: the first vertex is
/// appended at the end unless the outline already ends on it.
#[must_use]
pub fn close_loop(points: &[Point2]) -> Vec<Point2> {
    let mut closed = points.to_vec();
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        if points.len() > 1 && !points_coincide(last, first) {
            closed.push(*first);
        }
    }
    closed
}
