//! Escape-route corridor width measurement for 2D room boundaries.
//!
//! Rays are cast perpendicular to each boundary edge of a room; the nearest
//! wall hits form candidate widths, the narrowest plausible one is the
//! corridor width, and that width is classified against the fire-regulation
//! minimum and the universal-design recommendation.

pub mod building;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use building::{Room, UseCategory};
pub use error::{ClearwayError, Result};
pub use geometry::segment::{Segment, Wall};
pub use operations::compliance::{
    classify, required_min_width, CategoryPolicy, CheckParams, ComplianceCheck, ComplianceReport,
    ComplianceResult, RoomCompliance, Verdict,
};
pub use operations::scan::{CorridorScan, ScanParams};
