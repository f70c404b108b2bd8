#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, debug_span, warn};

use super::classify::{classify, required_width_for};
use super::{CheckParams, ComplianceResult, Verdict};
use crate::building::Room;
use crate::error::{ClearwayError, Result};
use crate::operations::scan::CorridorScan;
use crate::operations::select::{round_width, MinimumWidth};

/// Outcome of the check for one escape-route room.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomCompliance {
    pub name: String,
    pub long_name: String,
    /// The verdict, or why no verdict could be reached for this room.
    pub outcome: std::result::Result<ComplianceResult, ClearwayError>,
}

/// Results of a compliance check, one entry per escape-route room in input
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceReport {
    pub rooms: Vec<RoomCompliance>,
    pub is_public_building: bool,
}

impl ComplianceReport {
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoomCompliance> {
        self.rooms.iter()
    }

    /// Looks up a room's entry by name.
    #[must_use]
    pub fn room(&self, name: &str) -> Option<&RoomCompliance> {
        self.rooms.iter().find(|r| r.name == name)
    }

    /// Number of rooms that reached the given verdict.
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.rooms
            .iter()
            .filter(|r| matches!(&r.outcome, Ok(res) if res.verdict == verdict))
            .count()
    }

    /// `true` when every room was measured and none is non-compliant.
    #[must_use]
    pub fn all_compliant(&self) -> bool {
        self.rooms
            .iter()
            .all(|r| matches!(&r.outcome, Ok(res) if res.verdict.is_compliant()))
    }
}

/// Checks the corridor width of every escape-route room.
///
/// For each room flagged as part of the escape route, every boundary edge is
/// scanned against the room's walls; the candidates of all edges are pooled
/// and the narrowest one above the noise threshold is the room's width.
#[derive(Debug, Clone)]
pub struct ComplianceCheck<'a> {
    rooms: &'a [Room],
    is_public_building: bool,
    params: CheckParams,
}

impl<'a> ComplianceCheck<'a> {
    #[must_use]
    pub fn new(rooms: &'a [Room], is_public_building: bool) -> Self {
        Self {
            rooms,
            is_public_building,
            params: CheckParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: CheckParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the check.
    ///
    /// Failures specific to one room (no measurable width, an unknown use
    /// category under the strict policy) are recorded in that room's entry
    /// and do not stop the others.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if the scan parameters are
    /// out of range.
    pub fn execute(&self) -> Result<ComplianceReport> {
        self.params.scan.validate()?;

        let escape_rooms: Vec<&Room> = self.rooms.iter().filter(|r| r.is_escape_route()).collect();
        debug!(
            rooms = self.rooms.len(),
            escape_rooms = escape_rooms.len(),
            "checking corridor widths"
        );

        #[cfg(feature = "parallel")]
        let rooms = escape_rooms
            .par_iter()
            .map(|room| self.check_room(room))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let rooms = escape_rooms
            .iter()
            .map(|room| self.check_room(room))
            .collect();

        Ok(ComplianceReport {
            rooms,
            is_public_building: self.is_public_building,
        })
    }

    fn check_room(&self, room: &Room) -> RoomCompliance {
        let span = debug_span!("room", name = room.name());
        let _guard = span.enter();

        let outcome = self.evaluate(room);
        match &outcome {
            Ok(result) => debug!(
                width = result.measured_width,
                required = result.required_width,
                verdict = %result.verdict,
                "room checked"
            ),
            Err(err) => warn!(%err, "no verdict for room"),
        }
        RoomCompliance {
            name: room.name().to_owned(),
            long_name: room.long_name().to_owned(),
            outcome,
        }
    }

    fn evaluate(&self, room: &Room) -> Result<ComplianceResult> {
        let scan = self.params.scan;
        let walls = room.walls();

        let mut candidates = Vec::new();
        for edge in room.boundary() {
            let point_count = edge.point_count(scan.sample_spacing)?;
            candidates.extend(
                CorridorScan::new(edge, walls, point_count)
                    .with_params(scan)
                    .execute()?,
            );
        }

        let narrowest = MinimumWidth::new(&candidates)
            .with_threshold(scan.min_width)
            .execute()?;
        let measured_width = round_width(narrowest.length());
        let required_width = required_width_for(room, self.params.category_policy)?;

        Ok(ComplianceResult {
            measured_width,
            required_width,
            verdict: classify(measured_width, required_width, self.is_public_building),
        })
    }
}
