use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

/// An immutable straight segment between two distinct points.
///
/// The parametric form is: `P(t) = start + t * (end - start)`, `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2,
    end: Point2,
}

/// Upper bound on the number of sample points on one segment.
pub const MAX_POINT_COUNT: usize = 1_000_000;

// `MAX_POINT_COUNT - 1` as a float, for comparing before the cast.
const MAX_STEPS: f64 = 999_999.0;

/// A boundary edge acting as an obstacle for ray casting.
pub type Wall = Segment;

impl Segment {
    /// Creates a new segment.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateSegment` if `start` and `end`
    /// coincide, since a zero-length segment has no direction.
    pub fn new(start: Point2, end: Point2) -> Result<Self> {
        if (end - start).norm() < TOLERANCE {
            return Err(GeometryError::DegenerateSegment {
                x: start.x,
                y: start.y,
            }
            .into());
        }
        Ok(Self { start, end })
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the Euclidean length, always greater than [`TOLERANCE`].
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Returns the unit direction from start to end.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        (self.end - self.start) / self.length()
    }

    /// Returns the point at parameter `t` (`0` is start, `1` is end).
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.start + (self.end - self.start) * t
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        self.point_at(0.5)
    }

    /// X coordinates of `(start, end)`.
    #[must_use]
    pub fn x_values(&self) -> (f64, f64) {
        (self.start.x, self.end.x)
    }

    /// Y coordinates of `(start, end)`.
    #[must_use]
    pub fn y_values(&self) -> (f64, f64) {
        (self.start.y, self.end.y)
    }

    /// Returns the segment with start and end swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Number of sample points for the given spacing:
    /// `max(2, floor(length / spacing) + 1)`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if `spacing` is not a
    /// positive finite number, or if it would need more than
    /// [`MAX_POINT_COUNT`] points on this segment.
    pub fn point_count(&self, spacing: f64) -> Result<usize> {
        let invalid = || GeometryError::InvalidParameter {
            name: "sample_spacing",
            value: spacing,
        };
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(invalid().into());
        }
        let steps = (self.length() / spacing).floor();
        if !steps.is_finite() || steps > MAX_STEPS {
            return Err(invalid().into());
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = steps as usize + 1;
        Ok(n.max(2))
    }
}
