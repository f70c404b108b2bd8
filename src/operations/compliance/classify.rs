use tracing::warn;

use super::{CategoryPolicy, Verdict};
use crate::building::{Room, UseCategory};
use crate::error::Result;

/// Flat minimum corridor width, in meters.
pub const FLAT_MINIMUM_WIDTH: f64 = 1.3;

/// Occupant count above which the required width scales with occupancy.
pub const OCCUPANCY_THRESHOLD: u32 = 150;

/// Universal-design recommended width for public buildings, in meters.
pub const UNIVERSAL_WIDTH_PUBLIC: f64 = 2.0;

/// Universal-design recommended width for other buildings, in meters.
pub const UNIVERSAL_WIDTH_PRIVATE: f64 = 1.5;

/// Classifies a measured corridor width.
///
/// - `measured < required`: [`Verdict::NonCompliant`]
/// - `measured <= recommended` (2.0 m public, 1.5 m otherwise):
///   [`Verdict::CompliantMinimal`]
/// - otherwise: [`Verdict::CompliantUniversal`]
///
/// A width exactly at the required minimum is compliant; a width exactly at
/// the recommended width is not yet universal.
#[must_use]
pub fn classify(measured_width: f64, required_minimum: f64, is_public_building: bool) -> Verdict {
    if measured_width < required_minimum {
        Verdict::NonCompliant
    } else if measured_width <= Verdict::recommended_width(is_public_building) {
        Verdict::CompliantMinimal
    } else {
        Verdict::CompliantUniversal
    }
}

/// Required minimum corridor width for a use category and occupant count.
///
/// Categories 1, 2, 3 and 5 with more than 150 occupants need 10 mm per
/// occupant; everything else needs the flat 1.3 m.
#[must_use]
pub fn required_min_width(category: UseCategory, occupant_count: u32) -> f64 {
    if category.scales_with_occupancy() && occupant_count > OCCUPANCY_THRESHOLD {
        f64::from(occupant_count) * 10.0 / 1000.0
    } else {
        FLAT_MINIMUM_WIDTH
    }
}

/// Required minimum width for a room, resolving its raw category code
/// under `policy`.
///
/// # Errors
///
/// Returns `ComplianceError::InvalidCategory` for an unknown code under
/// [`CategoryPolicy::Strict`].
pub fn required_width_for(room: &Room, policy: CategoryPolicy) -> Result<f64> {
    match UseCategory::try_from(room.use_category()) {
        Ok(category) => Ok(required_min_width(category, room.occupant_count())),
        Err(err) => match policy {
            CategoryPolicy::Lenient => {
                warn!(room = room.name(), %err, "using flat minimum width");
                Ok(FLAT_MINIMUM_WIDTH)
            }
            CategoryPolicy::Strict => Err(err.into()),
        },
    }
}
