use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::{Segment, Wall};
use crate::math::polygon_2d::{close_loop, signed_area_2d};
use crate::math::Point2;

/// A room: a closed boundary polygon plus the data its fire-regulation
/// check depends on.
///
/// The boundary edges double as the walls rays are cast against.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    name: String,
    long_name: String,
    level: Option<String>,
    boundary: Vec<Segment>,
    use_category: i32,
    occupant_count: u32,
    is_escape_route: bool,
}

impl Room {
    /// Creates a room from boundary segments, taken as given.
    ///
    /// The boundary is expected to be closed; that is not re-checked here.
    /// Defaults: use category 1, no occupants, not part of the escape route.
    #[must_use]
    pub fn new(name: impl Into<String>, boundary: Vec<Segment>) -> Self {
        Self {
            name: name.into(),
            long_name: String::new(),
            level: None,
            boundary,
            use_category: 1,
            occupant_count: 0,
            is_escape_route: false,
        }
    }

    /// Creates a room from an outline of vertices.
    ///
    /// The outline is closed if needed and oriented counter-clockwise, so
    /// that every edge's left side faces the interior. Zero-length edges
    /// from repeated vertices are skipped.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::OpenBoundary` if fewer than three edges
    /// remain.
    pub fn from_outline(name: impl Into<String>, outline: &[Point2]) -> Result<Self> {
        let name = name.into();
        let mut vertices = close_loop(outline);
        if signed_area_2d(&vertices) < 0.0 {
            vertices.reverse();
        }

        let mut boundary = Vec::with_capacity(vertices.len().saturating_sub(1));
        for pair in vertices.windows(2) {
            match Segment::new(pair[0], pair[1]) {
                Ok(edge) => boundary.push(edge),
                Err(err) => debug!(room = %name, %err, "skipping boundary edge"),
            }
        }
        if boundary.len() < 3 {
            return Err(GeometryError::OpenBoundary(boundary.len()).into());
        }
        Ok(Self::new(name, boundary))
    }

    #[must_use]
    pub fn with_long_name(mut self, long_name: impl Into<String>) -> Self {
        self.long_name = long_name.into();
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Sets the raw use-category code; it is validated when the check runs.
    #[must_use]
    pub fn with_use_category(mut self, code: i32) -> Self {
        self.use_category = code;
        self
    }

    #[must_use]
    pub fn with_occupant_count(mut self, count: u32) -> Self {
        self.occupant_count = count;
        self
    }

    #[must_use]
    pub fn with_escape_route(mut self, is_escape_route: bool) -> Self {
        self.is_escape_route = is_escape_route;
        self
    }

    pub fn set_escape_route(&mut self, is_escape_route: bool) {
        self.is_escape_route = is_escape_route;
    }

    pub fn set_occupant_count(&mut self, count: u32) {
        self.occupant_count = count;
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    #[must_use]
    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    #[must_use]
    pub fn boundary(&self) -> &[Segment] {
        &self.boundary
    }

    /// The walls rays are cast against: the boundary edges, one to one.
    #[must_use]
    pub fn walls(&self) -> &[Wall] {
        &self.boundary
    }

    #[must_use]
    pub fn use_category(&self) -> i32 {
        self.use_category
    }

    #[must_use]
    pub fn occupant_count(&self) -> u32 {
        self.occupant_count
    }

    #[must_use]
    pub fn is_escape_route(&self) -> bool {
        self.is_escape_route
    }
}
