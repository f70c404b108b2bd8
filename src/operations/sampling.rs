use crate::error::Result;
use crate::geometry::Segment;
use crate::math::Point2;

/// Default margin as a fraction of the segment length.
pub const DEFAULT_MARGIN_RATIO: f64 = 0.05;

/// Upper bound on the margin, in meters.
pub const DEFAULT_MAX_MARGIN: f64 = 0.15;

/// Produces evenly spaced sample points along a segment.
///
/// Both ends are inset by `min(max_margin, margin_ratio * length)` so no
/// sample sits exactly on a corner, where ray intersection tests are
/// numerically unstable. The inset endpoints themselves are sampled.
#[derive(Debug, Clone)]
pub struct SampleSegment<'a> {
    segment: &'a Segment,
    count: usize,
    margin_ratio: f64,
    max_margin: f64,
}

impl<'a> SampleSegment<'a> {
    /// Creates a sampler producing `max(2, count)` points.
    #[must_use]
    pub fn new(segment: &'a Segment, count: usize) -> Self {
        Self {
            segment,
            count,
            margin_ratio: DEFAULT_MARGIN_RATIO,
            max_margin: DEFAULT_MAX_MARGIN,
        }
    }

    /// Creates a sampler whose point count follows from `spacing`, see
    /// [`Segment::point_count`].
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if `spacing` is not positive.
    pub fn with_spacing(segment: &'a Segment, spacing: f64) -> Result<Self> {
        Ok(Self::new(segment, segment.point_count(spacing)?))
    }

    #[must_use]
    pub fn with_margin_ratio(mut self, margin_ratio: f64) -> Self {
        self.margin_ratio = margin_ratio;
        self
    }

    #[must_use]
    pub fn with_max_margin(mut self, max_margin: f64) -> Self {
        self.max_margin = max_margin;
        self
    }

    /// Returns the inset applied at each end of the segment.
    #[must_use]
    pub fn margin(&self) -> f64 {
        let length = self.segment.length();
        // Never cross over the midpoint.
        self.max_margin
            .min(self.margin_ratio * length)
            .clamp(0.0, 0.5 * length)
    }

    /// Executes the sampling, returning points ordered from start to end.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        let count = self.count.max(2);
        let dir = self.segment.direction();
        let margin = self.margin();
        let first = self.segment.start() + dir * margin;
        let last = self.segment.end() - dir * margin;
        let step = last - first;

        #[allow(clippy::cast_precision_loss)]
        let divisor = (count - 1) as f64;
        (0..count)
            .map(|i| {
                if i == count - 1 {
                    last
                } else {
                    #[allow(clippy::cast_precision_loss)]
                    let t = i as f64 / divisor;
                    first + step * t
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point2::new(x0, y0), Point2::new(x1, y1)).unwrap()
    }

    #[test]
    fn margin_capped_at_fifteen_centimetres() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert_abs_diff_eq!(SampleSegment::new(&s, 5).margin(), 0.15);
    }

    #[test]
    fn margin_proportional_on_short_segment() {
        let s = seg(0.0, 0.0, 2.0, 0.0);
        assert_abs_diff_eq!(SampleSegment::new(&s, 5).margin(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn evenly_spaced_between_inset_ends() {
        let s = seg(0.0, 0.0, 3.0, 0.0);
        let pts = SampleSegment::new(&s, 10).execute();
        assert_eq!(pts.len(), 10);
        assert_abs_diff_eq!(pts[0].x, 0.15, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[9].x, 2.85, epsilon = 1e-12);
        for w in pts.windows(2) {
            assert_abs_diff_eq!(w[1].x - w[0].x, 0.3, epsilon = 1e-12);
            assert_abs_diff_eq!(w[0].y, 0.0);
        }
    }

    #[test]
    fn follows_segment_direction() {
        let s = seg(0.0, 4.0, 0.0, 0.0);
        let pts = SampleSegment::new(&s, 3).execute();
        assert_abs_diff_eq!(pts[0].y, 3.85, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[1].y, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[2].y, 0.15, epsilon = 1e-12);
    }

    #[test]
    fn count_below_two_is_raised() {
        let s = seg(0.0, 0.0, 1.0, 0.0);
        assert_eq!(SampleSegment::new(&s, 0).execute().len(), 2);
        assert_eq!(SampleSegment::new(&s, 1).execute().len(), 2);
    }

    #[test]
    fn spacing_drives_count() {
        let s = seg(0.0, 0.0, 1.0, 0.0);
        let pts = SampleSegment::with_spacing(&s, 0.1).unwrap().execute();
        assert_eq!(pts.len(), 11);
    }

    #[test]
    fn zero_margin_samples_true_endpoints() {
        let s = seg(0.0, 0.0, 1.0, 0.0);
        let pts = SampleSegment::new(&s, 2).with_margin_ratio(0.0).execute();
        assert_abs_diff_eq!(pts[0].x, 0.0);
        assert_abs_diff_eq!(pts[1].x, 1.0);
    }

    #[test]
    fn deterministic() {
        let s = seg(0.3, -1.2, 4.7, 2.9);
        let a = SampleSegment::new(&s, 17).execute();
        let b = SampleSegment::new(&s, 17).execute();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn count_bounds_and_order(
            x0 in -100.0f64..100.0,
            y0 in -100.0f64..100.0,
            dx in 0.5f64..50.0,
            angle in 0.0f64..std::f64::consts::TAU,
            n in 0usize..200,
        ) {
            let s = Segment::new(
                Point2::new(x0, y0),
                Point2::new(x0 + dx * angle.cos(), y0 + dx * angle.sin()),
            ).unwrap();
            let sampler = SampleSegment::new(&s, n);
            let margin = sampler.margin();
            let pts = sampler.execute();
            prop_assert_eq!(pts.len(), n.max(2));

            let dir = s.direction();
            let along: Vec<f64> = pts.iter().map(|p| (p - s.start()).dot(&dir)).collect();
            for a in &along {
                prop_assert!(*a >= margin - 1e-9);
                prop_assert!(*a <= s.length() - margin + 1e-9);
                prop_assert!(*a > 0.0 && *a < s.length());
            }
            for w in along.windows(2) {
                prop_assert!(w[1] > w[0]);
            }
        }
    }
}
