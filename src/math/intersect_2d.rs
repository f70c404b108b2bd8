use super::{Point2, Vector2, PARALLEL_TOLERANCE, TOLERANCE};

/// 2D cross product (z-component of the 3D cross product).
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Intersection of a ray with a bounded segment in 2D.
///
/// The ray starts at `ray_origin` and points towards `ray_through`, extending
/// to infinity (`t1 >= 0`). The segment spans `seg_start..=seg_end`
/// (`t2` in `[0, 1]`). With `v1 = ray_origin - seg_start`,
/// `v2 = seg_end - seg_start` and `v3` the left normal of the ray direction:
///
/// ```text
/// t1 = cross(v2, v1) / (v2 · v3)
/// t2 = (v1 · v3)     / (v2 · v3)
/// ```
///
/// Returns `None` when the ray and segment are parallel (`|v2 · v3|` below
/// [`PARALLEL_TOLERANCE`]), when the ray has no direction, or when the hit
/// lies behind the origin or outside the segment.
#[must_use]
pub fn ray_segment_intersect_2d(
    ray_origin: &Point2,
    ray_through: &Point2,
    seg_start: &Point2,
    seg_end: &Point2,
) -> Option<Point2> {
    let d = ray_through - ray_origin;
    let len = d.norm();
    if len < TOLERANCE {
        return None;
    }
    let dir = d / len;

    let v1 = ray_origin - seg_start;
    let v2 = seg_end - seg_start;
    let v3 = Vector2::new(-dir.y, dir.x);

    let dot = v2.dot(&v3);
    if dot.abs() < PARALLEL_TOLERANCE {
        return None;
    }

    let t1 = cross_2d(&v2, &v1) / dot;
    let t2 = v1.dot(&v3) / dot;

    if t1 >= 0.0 && (0.0..=1.0).contains(&t2) {
        Some(ray_origin + dir * t1)
    } else {
        None
    }
}
