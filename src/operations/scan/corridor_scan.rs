use tracing::{debug, trace};

use super::ScanParams;
use crate::error::Result;
use crate::geometry::{Segment, Wall};
use crate::math::intersect_2d::ray_segment_intersect_2d;
use crate::math::polygon_2d::left_normal;
use crate::math::{points_coincide, Point2};
use crate::operations::sampling::SampleSegment;

/// Casts perpendicular rays from an edge and measures the clearance to the
/// nearest wall at each sample point.
///
/// Rays always point to the left of the edge (90° counter-clockwise of its
/// direction), so for a counter-clockwise room outline they point inward.
#[derive(Debug, Clone)]
pub struct CorridorScan<'a> {
    edge: &'a Segment,
    walls: &'a [Wall],
    point_count: usize,
    params: ScanParams,
}

impl<'a> CorridorScan<'a> {
    /// Creates a new scan of `edge` against `walls` with `point_count`
    /// samples.
    #[must_use]
    pub fn new(edge: &'a Segment, walls: &'a [Wall], point_count: usize) -> Self {
        Self {
            edge,
            walls,
            point_count,
            params: ScanParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: ScanParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the scan.
    ///
    /// Returns one candidate per sample point that hit a wall, running from
    /// the sample point to the nearest hit, in sample order. Sample points
    /// whose ray hits nothing are dropped.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if the scan parameters are
    /// out of range.
    pub fn execute(&self) -> Result<Vec<Segment>> {
        self.params.validate()?;

        let normal = left_normal(&self.edge.direction());
        let samples = SampleSegment::new(self.edge, self.point_count)
            .with_margin_ratio(self.params.margin_ratio)
            .with_max_margin(self.params.max_margin)
            .execute();

        let mut candidates = Vec::with_capacity(samples.len());
        for point in &samples {
            let ray_end = point + normal * self.params.ray_length;
            let Some(hit) = nearest_hit(point, &ray_end, self.walls) else {
                debug!(x = point.x, y = point.y, "no wall found from sample point");
                continue;
            };
            match Segment::new(*point, hit) {
                Ok(candidate) => {
                    trace!(
                        x = point.x,
                        y = point.y,
                        width = candidate.length(),
                        "corridor candidate"
                    );
                    candidates.push(candidate);
                }
                Err(err) => debug!(%err, "discarding zero-length candidate"),
            }
        }
        Ok(candidates)
    }
}

/// Returns the wall hit closest to `origin` along the ray through
/// `ray_end`, ignoring hits on `origin` itself. Ties keep the earlier wall.
fn nearest_hit(origin: &Point2, ray_end: &Point2, walls: &[Wall]) -> Option<Point2> {
    let mut best: Option<(Point2, f64)> = None;
    for wall in walls {
        let Some(hit) = ray_segment_intersect_2d(origin, ray_end, wall.start(), wall.end()) else {
            continue;
        };
        if points_coincide(&hit, origin) {
            continue;
        }
        let dist = (hit - origin).norm();
        if best.is_none_or(|(_, d)| dist < d) {
            best = Some((hit, dist));
        }
    }
    best.map(|(hit, _)| hit)
}
