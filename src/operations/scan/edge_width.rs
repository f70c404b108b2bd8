use super::{CorridorScan, ScanParams};
use crate::error::Result;
use crate::geometry::{Segment, Wall};
use crate::operations::select::{CorridorWidth, MinimumWidth};

/// Measures the corridor width in front of a single edge.
///
/// Samples the edge at `params.sample_spacing`, scans it against `walls`
/// and keeps the narrowest candidate above `params.min_width`.
#[derive(Debug, Clone)]
pub struct EdgeWidth<'a> {
    edge: &'a Segment,
    walls: &'a [Wall],
    params: ScanParams,
}

impl<'a> EdgeWidth<'a> {
    #[must_use]
    pub fn new(edge: &'a Segment, walls: &'a [Wall]) -> Self {
        Self {
            edge,
            walls,
            params: ScanParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: ScanParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the measurement.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` for out-of-range parameters
    /// and `OperationError::NoValidCandidate` if no ray produced a usable
    /// width.
    pub fn execute(&self) -> Result<CorridorWidth> {
        let point_count = self.edge.point_count(self.params.sample_spacing)?;
        let candidates = CorridorScan::new(self.edge, self.walls, point_count)
            .with_params(self.params)
            .execute()?;
        let narrowest = MinimumWidth::new(&candidates)
            .with_threshold(self.params.min_width)
            .execute()?;
        Ok(CorridorWidth::from_segment(narrowest))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ClearwayError, OperationError};
    use crate::math::Point2;
    use approx::assert_abs_diff_eq;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point2::new(x0, y0), Point2::new(x1, y1)).unwrap()
    }

    #[test]
    fn narrowing_corridor_reports_pinch_point() {
        // Corridor along the x axis, narrowing from 2.0 m to 1.2 m at x = 4.
        let edge = seg(0.0, 0.0, 6.0, 0.0);
        let walls = vec![
            edge,
            seg(6.0, 0.0, 6.0, 1.2),
            seg(6.0, 1.2, 4.0, 1.2),
            seg(4.0, 1.2, 4.0, 2.0),
            seg(4.0, 2.0, 0.0, 2.0),
            seg(0.0, 2.0, 0.0, 0.0),
        ];
        let width = EdgeWidth::new(&edge, &walls).execute().unwrap();
        assert_abs_diff_eq!(width.width, 1.2);
        assert!(width.narrowest.start().x > 4.0);
    }

    #[test]
    fn open_side_has_no_width() {
        let edge = seg(0.0, 0.0, 2.0, 0.0);
        let walls = vec![edge];
        let err = EdgeWidth::new(&edge, &walls).execute().unwrap_err();
        assert!(matches!(
            err,
            ClearwayError::Operation(OperationError::NoValidCandidate { scanned: 0, .. })
        ));
    }

    #[test]
    fn custom_threshold_applies() {
        let edge = seg(0.0, 0.0, 2.0, 0.0);
        let walls = vec![edge, seg(-1.0, 0.5, 3.0, 0.5)];
        let params = ScanParams {
            min_width: 0.6,
            ..ScanParams::default()
        };
        assert!(EdgeWidth::new(&edge, &walls)
            .with_params(params)
            .execute()
            .is_err());
        let width = EdgeWidth::new(&edge, &walls).execute().unwrap();
        assert_abs_diff_eq!(width.width, 0.5);
    }
}
