mod check;
mod classify;
pub mod rase;

pub use check::{ComplianceCheck, ComplianceReport, RoomCompliance};
pub use classify::{
    classify, required_min_width, required_width_for, FLAT_MINIMUM_WIDTH, OCCUPANCY_THRESHOLD,
    UNIVERSAL_WIDTH_PRIVATE, UNIVERSAL_WIDTH_PUBLIC,
};
pub use rase::RaseCheck;

use std::fmt;

use crate::operations::scan::ScanParams;

/// Outcome of classifying a corridor width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Narrower than the legally required minimum.
    NonCompliant,
    /// Meets the legal minimum but not the universal-design width.
    CompliantMinimal,
    /// Wider than the universal-design width.
    CompliantUniversal,
}

impl Verdict {
    /// Universal-design recommended width: 2.0 m for public buildings,
    /// 1.5 m otherwise.
    #[must_use]
    pub fn recommended_width(is_public_building: bool) -> f64 {
        if is_public_building {
            UNIVERSAL_WIDTH_PUBLIC
        } else {
            UNIVERSAL_WIDTH_PRIVATE
        }
    }

    #[must_use]
    pub fn is_compliant(self) -> bool {
        !matches!(self, Self::NonCompliant)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NonCompliant => "non-compliant",
            Self::CompliantMinimal => "compliant (minimum)",
            Self::CompliantUniversal => "compliant (universal design)",
        };
        f.write_str(s)
    }
}

/// Result of checking one escape-route room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplianceResult {
    /// Narrowest corridor width in meters, rounded to 2 decimals.
    pub measured_width: f64,
    /// Legally required minimum width in meters.
    pub required_width: f64,
    pub verdict: Verdict,
}

/// How an unknown use-category code is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryPolicy {
    /// Log a warning and require the flat minimum width.
    #[default]
    Lenient,
    /// Fail the room's check with `ComplianceError::InvalidCategory`.
    Strict,
}

/// Parameters for a full compliance check.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CheckParams {
    pub scan: ScanParams,
    pub category_policy: CategoryPolicy,
}
