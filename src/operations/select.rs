use crate::error::{OperationError, Result};
use crate::geometry::Segment;

/// Default noise threshold, in meters.
pub const DEFAULT_MIN_WIDTH: f64 = 0.3;

/// Rounds a width to centimetres (2 decimal places).
#[must_use]
pub fn round_width(width: f64) -> f64 {
    (width * 100.0).round() / 100.0
}

/// Reduces scan candidates to the narrowest plausible one.
///
/// Candidates whose length is at or below the threshold are treated as
/// measurement noise (a ray grazing a corner, for instance) and never
/// selected.
#[derive(Debug, Clone)]
pub struct MinimumWidth<'a> {
    candidates: &'a [Segment],
    threshold: f64,
}

impl<'a> MinimumWidth<'a> {
    #[must_use]
    pub fn new(candidates: &'a [Segment]) -> Self {
        Self {
            candidates,
            threshold: DEFAULT_MIN_WIDTH,
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Executes the selection. Equal lengths keep the first candidate.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::NoValidCandidate` if no candidate is longer
    /// than the threshold.
    pub fn execute(&self) -> Result<Segment> {
        let mut best: Option<&Segment> = None;
        for candidate in self.candidates {
            let len = candidate.length();
            if len <= self.threshold {
                continue;
            }
            if best.is_none_or(|b| len < b.length()) {
                best = Some(candidate);
            }
        }
        best.copied().ok_or_else(|| {
            OperationError::NoValidCandidate {
                threshold: self.threshold,
                scanned: self.candidates.len(),
            }
            .into()
        })
    }
}

/// A measured corridor width together with the segment it was taken from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorridorWidth {
    /// Width in meters, rounded to 2 decimals.
    pub width: f64,
    /// The narrowest candidate, unrounded.
    pub narrowest: Segment,
}

impl CorridorWidth {
    #[must_use]
    pub fn from_segment(narrowest: Segment) -> Self {
        Self {
            width: round_width(narrowest.length()),
            narrowest,
        }
    }
}
