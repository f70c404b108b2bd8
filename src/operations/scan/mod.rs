mod corridor_scan;
mod edge_width;

pub use corridor_scan::CorridorScan;
pub use edge_width::EdgeWidth;

use crate::error::{GeometryError, Result};
use crate::operations::sampling::{DEFAULT_MARGIN_RATIO, DEFAULT_MAX_MARGIN};
use crate::operations::select::DEFAULT_MIN_WIDTH;

/// Parameters controlling corridor scanning and width selection.
///
/// All lengths are in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanParams {
    /// Sampling inset at each end, as a fraction of the edge length.
    pub margin_ratio: f64,
    /// Upper bound on the sampling inset.
    pub max_margin: f64,
    /// Target distance between sample points.
    pub sample_spacing: f64,
    /// Candidates at or below this length are treated as noise.
    pub min_width: f64,
    /// Length of each cast ray. Large but finite.
    pub ray_length: f64,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            margin_ratio: DEFAULT_MARGIN_RATIO,
            max_margin: DEFAULT_MAX_MARGIN,
            sample_spacing: 0.1,
            min_width: DEFAULT_MIN_WIDTH,
            ray_length: 1e9,
        }
    }
}

impl ScanParams {
    /// Checks that every parameter is finite and within its usable range.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` naming the first offending
    /// field.
    pub fn validate(&self) -> Result<()> {
        let checks: [(&'static str, f64, bool); 5] = [
            (
                "margin_ratio",
                self.margin_ratio,
                (0.0..0.5).contains(&self.margin_ratio),
            ),
            ("max_margin", self.max_margin, self.max_margin >= 0.0),
            ("sample_spacing", self.sample_spacing, self.sample_spacing > 0.0),
            ("min_width", self.min_width, self.min_width >= 0.0),
            ("ray_length", self.ray_length, self.ray_length > 0.0),
        ];
        for (name, value, in_range) in checks {
            if !value.is_finite() || !in_range {
                return Err(GeometryError::InvalidParameter { name, value }.into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClearwayError;

    #[test]
    fn defaults_are_valid() {
        assert!(ScanParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_spacing() {
        let params = ScanParams {
            sample_spacing: 0.0,
            ..ScanParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ClearwayError::Geometry(GeometryError::InvalidParameter {
                name: "sample_spacing",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_infinite_ray() {
        let params = ScanParams {
            ray_length: f64::INFINITY,
            ..ScanParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_margin_past_midpoint() {
        let params = ScanParams {
            margin_ratio: 0.5,
            ..ScanParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn zero_threshold_is_allowed() {
        let params = ScanParams {
            min_width: 0.0,
            ..ScanParams::default()
        };
        assert!(params.validate().is_ok());
    }
}
